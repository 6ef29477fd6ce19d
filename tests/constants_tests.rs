// Host-side tests for page integration constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_match_the_page() {
    assert_eq!(CANVAS_ID, "heroCanvas");
    assert_eq!(CTA_ID, "exploreBtn");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(PRELOADER_DELAY_MS > 0);
    // the entrance must begin within a few seconds of load
    assert!(PRELOADER_DELAY_MS < 5000);
}
