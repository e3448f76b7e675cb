use crate::constants::*;
use crate::core::lattice::{Cell, Lattice};
use crate::core::sampling::SampleWindow;
use crate::core::trail::{beat_pulse, TrailField};
use crate::core::wedges::{TOL, WEDGES};
use glam::DVec2;
use web_sys as web;

/// Flat background fill plus the desaturated, slightly transparent
/// compositing state for the base mosaic pass.
pub fn begin_mosaic_pass(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_image_smoothing_enabled(true);
    ctx.set_image_smoothing_quality(web::ImageSmoothingQuality::High);
    ctx.set_fill_style_str(BACKGROUND_FILL);
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.set_global_alpha(MOSAIC_ALPHA);
    ctx.set_filter(MOSAIC_FILTER);
}

pub fn end_mosaic_pass(ctx: &web::CanvasRenderingContext2d) {
    ctx.set_global_alpha(1.0);
    ctx.set_filter("none");
}

/// Draw one lattice cell as the p6m rosette: twelve clipped, rigidly
/// transformed copies of the same sampled source rectangle. The
/// presets live in `core::wedges`; this only replays them against the
/// canvas. Canvas failures are ignored, the next frame redraws anyway.
pub fn draw_cell(
    ctx: &web::CanvasRenderingContext2d,
    image: &web::HtmlImageElement,
    cell: &Cell,
    lattice: &Lattice,
    win: &SampleWindow,
) {
    let w = lattice.cell_width;
    let h = lattice.cell_height;
    let ox = cell.offset + cell.x;
    let oy = cell.y;

    for wedge in &WEDGES {
        ctx.save();
        ctx.begin_path();
        let pts = wedge.clip_path(w, h, TOL);
        ctx.move_to(ox + pts[0][0], oy + pts[0][1]);
        ctx.line_to(ox + pts[1][0], oy + pts[1][1]);
        ctx.line_to(ox + pts[2][0], oy + pts[2][1]);
        ctx.close_path();
        ctx.clip();

        let (tx, ty) = wedge.translation(w, h);
        _ = ctx.translate(ox + tx, oy + ty);
        if wedge.rotation != 0.0 {
            _ = ctx.rotate(wedge.rotation);
        }
        if wedge.flip != (1.0, 1.0) {
            _ = ctx.scale(wedge.flip.0, wedge.flip.1);
        }
        _ = ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
            image,
            win.x,
            win.y,
            win.w,
            win.h,
            -TOL,
            -TOL,
            w + TOL * 2.0,
            h * 0.75 + TOL * 2.0,
        );
        ctx.restore();
    }
}

/// Trail overlay: a hue-preserving colorized pass followed by an
/// additive highlight pass, drawn oldest to newest so fresher
/// particles composite on top in both.
pub fn draw_trail(
    ctx: &web::CanvasRenderingContext2d,
    lattice: &Lattice,
    trail: &TrailField,
    now: f64,
) {
    if trail.is_empty() {
        return;
    }

    _ = ctx.set_global_composite_operation("color");
    for p in trail.iter() {
        let edge = lattice.edge_proximity(p.pos);
        let pulse = if p.is_hovering(now) { beat_pulse(now) } else { 0.0 };
        let radius = p.radius
            * p.shrink(now)
            * (1.0 + GLOW_EDGE_RADIUS_BOOST * edge + GLOW_PULSE_RADIUS_BOOST * pulse);
        let alpha = p.energy * (GLOW_ALPHA_BASE + GLOW_ALPHA_EDGE_SPAN * edge);
        fill_glow(
            ctx,
            p.pos,
            radius,
            p.hue(now),
            GLOW_SATURATION,
            GLOW_LIGHTNESS,
            alpha,
        );
    }

    _ = ctx.set_global_composite_operation("screen");
    for p in trail.iter() {
        let radius = p.radius * p.shrink(now) * HIGHLIGHT_RADIUS_FRAC;
        let alpha = (p.energy * HIGHLIGHT_ALPHA_FRAC).min(HIGHLIGHT_MAX_ALPHA);
        fill_glow(
            ctx,
            p.pos,
            radius,
            p.hue(now),
            HIGHLIGHT_SATURATION,
            HIGHLIGHT_LIGHTNESS,
            alpha,
        );
    }

    _ = ctx.set_global_composite_operation("source-over");
}

/// Translucent veil over the whole frame to soften contrast.
pub fn draw_veil(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64, trail_live: bool) {
    let alpha = if trail_live { VEIL_ALPHA_ACTIVE } else { VEIL_ALPHA_IDLE };
    ctx.set_fill_style_str(&format!("rgba(249, 249, 251, {alpha})"));
    ctx.fill_rect(0.0, 0.0, width, height);
}

fn fill_glow(
    ctx: &web::CanvasRenderingContext2d,
    pos: DVec2,
    radius: f64,
    hue: f64,
    saturation: f64,
    lightness: f64,
    alpha: f64,
) {
    if radius <= 0.0 || alpha <= 0.0 {
        return;
    }
    let Ok(gradient) = ctx.create_radial_gradient(pos.x, pos.y, 0.0, pos.x, pos.y, radius) else {
        return;
    };
    _ = gradient.add_color_stop(
        0.0,
        &format!("hsla({hue:.1}, {saturation}%, {lightness}%, {alpha:.3})"),
    );
    _ = gradient.add_color_stop(
        1.0,
        &format!("hsla({hue:.1}, {saturation}%, {lightness}%, 0)"),
    );
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.begin_path();
    _ = ctx.arc(pos.x, pos.y, radius, 0.0, std::f64::consts::TAU);
    ctx.fill();
}
