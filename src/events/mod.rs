pub mod pointer;
pub mod toggle;

use crate::frame::Scheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window resize: the backing-store reflow happens at the top of every
/// frame, so the handler only forces a redraw (also while disabled).
pub fn wire_resize(scheduler: Scheduler) {
    let closure = Closure::wrap(Box::new(move || scheduler.request()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
