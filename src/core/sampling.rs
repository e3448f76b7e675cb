use glam::DVec2;

// Sampling-window tuning.

// Traveling radial wave outward from the viewport center
pub const PHASE_DIST_COEFF: f64 = 0.02;
pub const PHASE_TIME_COEFF: f64 = 0.8;

// Cells breathe ±5% around 94% of native scale
pub const SCALE_BASE: f64 = 0.94;
pub const SCALE_PULSE_SPAN: f64 = 0.05;

// Elliptical drift of the crop window, phase-locked to the wave
pub const WOBBLE_FRAC: f64 = 0.01;
pub const WOBBLE_Y_PHASE: f64 = 0.9;

// Cursor ripple riding on top of the radial wave
pub const RIPPLE_DIST_COEFF: f64 = 0.1;
pub const RIPPLE_TIME_COEFF: f64 = 3.5;
pub const RIPPLE_FALLOFF: f64 = 0.01;
pub const RIPPLE_WEIGHT: f64 = 0.9;

// Safety margin kept between the crop window and the image edges
pub const SAFE_MARGIN_PX: f64 = 2.0;
pub const SAFE_MARGIN_FRAC: f64 = 0.02;

/// Source-image crop rectangle for one cell, always inside the image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleWindow {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Pure per-cell sampling function: breathing scale plus a small
/// wobble of the crop window, driven by a radial wave from the
/// viewport center and (optionally) a ripple around the cursor.
/// With `animate` false the pulse freezes at 0 and the window is
/// fully determined by the image dimensions.
pub fn sample_window(
    center: DVec2,
    viewport_center: DVec2,
    cursor: Option<DVec2>,
    t: f64,
    img_w: f64,
    img_h: f64,
    animate: bool,
) -> SampleWindow {
    let dist = center.distance(viewport_center);
    let phase = dist * PHASE_DIST_COEFF - t * PHASE_TIME_COEFF;

    let pulse = if animate {
        let ripple = match cursor {
            Some(c) => {
                let md = center.distance(c);
                (md * RIPPLE_DIST_COEFF - t * RIPPLE_TIME_COEFF).sin() * (-md * RIPPLE_FALLOFF).exp()
            }
            None => 0.0,
        };
        // Keep the combined pulse within the plain wave's range so the
        // crop window stays strictly inside the source image.
        (phase.sin() + ripple * RIPPLE_WEIGHT).clamp(-1.0, 1.0)
    } else {
        0.0
    };

    let scale = SCALE_BASE + pulse * SCALE_PULSE_SPAN;
    let w = img_w * scale;
    let h = img_h * scale;
    let wobble_x = if animate { phase.cos() * img_w * WOBBLE_FRAC } else { 0.0 };
    let wobble_y = if animate {
        (phase * WOBBLE_Y_PHASE).sin() * img_h * WOBBLE_FRAC
    } else {
        0.0
    };

    let mut x = (img_w - w) / 2.0 + wobble_x;
    let mut y = (img_h - h) / 2.0 + wobble_y;

    // Safety margin first, hard image bounds second: the window never
    // samples outside the source even under extreme wobble.
    let safe_x = SAFE_MARGIN_PX.max(img_w * SAFE_MARGIN_FRAC);
    let safe_y = SAFE_MARGIN_PX.max(img_h * SAFE_MARGIN_FRAC);
    x = x.min(img_w - w - safe_x).max(safe_x);
    y = y.min(img_h - h - safe_y).max(safe_y);
    x = x.min(img_w - w).max(0.0);
    y = y.min(img_h - h).max(0.0);

    SampleWindow { x, y, w, h }
}
