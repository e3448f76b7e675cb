use crate::constants::TOGGLE_EVENT;
use crate::frame::Scheduler;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Toggle channel: the host dispatches a `CustomEvent` on `window`
/// with `detail = { enabled: boolean }`. A malformed or missing
/// `enabled` field leaves the prior flag value unchanged; a redraw is
/// requested on every receipt so a disabled surface still reflects the
/// latest geometry.
pub fn wire_toggle(enabled: Rc<Cell<bool>>, scheduler: Scheduler) {
    let closure = Closure::wrap(Box::new(move |ev: web::CustomEvent| {
        let detail = ev.detail();
        if let Ok(value) = js_sys::Reflect::get(&detail, &"enabled".into()) {
            if let Some(flag) = value.as_bool() {
                enabled.set(flag);
            }
        }
        scheduler.request();
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback(TOGGLE_EVENT, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
