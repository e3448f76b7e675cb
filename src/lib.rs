#![cfg(target_arch = "wasm32")]
use crate::constants::IMAGE_URL;
use crate::core::trail::{PointerTracker, TrailField};
use glam::DVec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("mosaic-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::create_layer_canvas(&document)?;
    let ctx = dom::context_2d(&canvas)?;

    let image = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    image.set_src(IMAGE_URL);

    let enabled = Rc::new(Cell::new(true));
    let pointer = Rc::new(RefCell::new(PointerTracker::default()));

    // Cursor rests at the viewport center until a pointer shows up.
    let (vw, vh) = dom::logical_viewport_size();
    let trail = TrailField::new(rand::random(), DVec2::new(vw * 0.5, vh * 0.5));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas: canvas.clone(),
        ctx,
        image: image.clone(),
        enabled: enabled.clone(),
        pointer: pointer.clone(),
        trail,
        started_at: Instant::now(),
    }));
    let scheduler = frame::Scheduler::new(frame_ctx);

    // First frame once the source image arrives; until then every
    // frame is a no-op.
    {
        let scheduler = scheduler.clone();
        let onload = Closure::wrap(Box::new(move || scheduler.request()) as Box<dyn FnMut()>);
        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
    }

    events::pointer::wire_pointer(&canvas, pointer, scheduler.clone());
    events::wire_resize(scheduler.clone());
    events::toggle::wire_toggle(enabled, scheduler.clone());

    scheduler.request();
    Ok(())
}
