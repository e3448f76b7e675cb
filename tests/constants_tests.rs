// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn surface_constants_are_within_reasonable_bounds() {
    // DPR cap keeps the backing store from exploding on retina displays
    assert!(DPR_MAX >= 1.0);

    // Compositing alphas live in [0,1]
    assert!(MOSAIC_ALPHA > 0.0 && MOSAIC_ALPHA <= 1.0);
    assert!(VEIL_ALPHA_ACTIVE > 0.0 && VEIL_ALPHA_ACTIVE < 1.0);
    assert!(VEIL_ALPHA_IDLE > 0.0 && VEIL_ALPHA_IDLE < 1.0);
    assert!(GLOW_ALPHA_BASE > 0.0 && GLOW_ALPHA_BASE <= 1.0);
    assert!(HIGHLIGHT_MAX_ALPHA > 0.0 && HIGHLIGHT_MAX_ALPHA <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glow_constants_have_logical_relationships() {
    // Edge boost never pushes the glow alpha past full opacity
    assert!(GLOW_ALPHA_BASE + GLOW_ALPHA_EDGE_SPAN <= 1.0);

    // The idle veil is heavier than the live one
    assert!(VEIL_ALPHA_IDLE > VEIL_ALPHA_ACTIVE);

    // The additive highlight is smaller and brighter than the color pass
    assert!(HIGHLIGHT_RADIUS_FRAC < 1.0);
    assert!(HIGHLIGHT_LIGHTNESS > GLOW_LIGHTNESS);
    assert!(HIGHLIGHT_ALPHA_FRAC > 0.0 && HIGHLIGHT_ALPHA_FRAC <= 1.0);

    // HSL components stay in percentage range
    assert!(GLOW_SATURATION > 0.0 && GLOW_SATURATION <= 100.0);
    assert!(GLOW_LIGHTNESS > 0.0 && GLOW_LIGHTNESS <= 100.0);
    assert!(HIGHLIGHT_SATURATION > 0.0 && HIGHLIGHT_SATURATION <= 100.0);
    assert!(HIGHLIGHT_LIGHTNESS > 0.0 && HIGHLIGHT_LIGHTNESS <= 100.0);
}

#[test]
fn host_integration_names_are_stable() {
    assert_eq!(CONTAINER_ID, "mosaic-layer");
    assert_eq!(TOGGLE_EVENT, "mosaic-toggle");
    assert!(IMAGE_URL.ends_with(".png"));
    assert!(BACKGROUND_FILL.starts_with('#'));
}
