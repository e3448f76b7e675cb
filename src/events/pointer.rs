use crate::core::trail::PointerTracker;
use crate::frame::Scheduler;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer wiring: handlers only queue state into the tracker and
/// request a frame to drain it; they never draw. The request is a
/// no-op while the animation loop is already running.
pub fn wire_pointer(
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerTracker>>,
    scheduler: Scheduler,
) {
    wire_pointermove(pointer.clone(), scheduler.clone());
    wire_pointerleave(canvas, pointer, scheduler);
}

fn wire_pointermove(pointer: Rc<RefCell<PointerTracker>>, scheduler: Scheduler) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
        pointer.borrow_mut().record_move(pos);
        scheduler.request();
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerleave(
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerTracker>>,
    scheduler: Scheduler,
) {
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        pointer.borrow_mut().leave();
        scheduler.request();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
