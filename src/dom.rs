use crate::constants::{CONTAINER_ID, DPR_MAX};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Create the layer canvas inside the host container element.
pub fn create_layer_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let container = document
        .get_element_by_id(CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CONTAINER_ID))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(canvas)
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Logical viewport size in CSS pixels; (0, 0) if unavailable.
pub fn logical_viewport_size() -> (f64, f64) {
    match web::window() {
        Some(w) => (
            w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
            w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
        ),
        None => (0.0, 0.0),
    }
}

/// Keep the canvas backing store at logical size × devicePixelRatio
/// (capped at 2) and scale the context transform to match. Runs at the
/// top of every frame, so a resize only needs to request a redraw.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) {
    let Some(window) = web::window() else { return };
    let raw_dpr = window.device_pixel_ratio();
    let dpr = if raw_dpr > 0.0 { raw_dpr.min(DPR_MAX) } else { 1.0 };
    let (vw, vh) = logical_viewport_size();
    let style = canvas.style();
    _ = style.set_property("width", &format!("{vw}px"));
    _ = style.set_property("height", &format!("{vh}px"));
    canvas.set_width((vw * dpr).floor().max(1.0) as u32);
    canvas.set_height((vh * dpr).floor().max(1.0) as u32);
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}
