// Surface and compositing tuning constants for the web frontend.
// Core geometry/trail tuning lives with the pure modules under
// `core/`; everything here only affects how frames are composed.

// Host page integration
pub const CONTAINER_ID: &str = "mosaic-layer";
pub const IMAGE_URL: &str = "mosaic-bg.png";
pub const TOGGLE_EVENT: &str = "mosaic-toggle";

// Device pixel ratio cap for the backing store
pub const DPR_MAX: f64 = 2.0;

// Base mosaic pass
pub const BACKGROUND_FILL: &str = "#f9f9fb";
pub const MOSAIC_ALPHA: f64 = 0.86;
pub const MOSAIC_FILTER: &str = "saturate(0.7)";

// Translucent veil; lighter touch while the trail is live
pub const VEIL_ALPHA_ACTIVE: f64 = 0.32;
pub const VEIL_ALPHA_IDLE: f64 = 0.45;

// Colorized glow pass
pub const GLOW_SATURATION: f64 = 85.0;
pub const GLOW_LIGHTNESS: f64 = 60.0;
pub const GLOW_EDGE_RADIUS_BOOST: f64 = 0.35;
pub const GLOW_PULSE_RADIUS_BOOST: f64 = 0.3;
pub const GLOW_ALPHA_BASE: f64 = 0.55;
pub const GLOW_ALPHA_EDGE_SPAN: f64 = 0.45;

// Additive highlight pass
pub const HIGHLIGHT_RADIUS_FRAC: f64 = 0.45;
pub const HIGHLIGHT_SATURATION: f64 = 90.0;
pub const HIGHLIGHT_LIGHTNESS: f64 = 75.0;
pub const HIGHLIGHT_ALPHA_FRAC: f64 = 0.5;
pub const HIGHLIGHT_MAX_ALPHA: f64 = 0.35;
