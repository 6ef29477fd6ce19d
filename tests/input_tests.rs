// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn dpr_is_capped_at_two() {
    assert_eq!(capped_dpr(1.0), 1.0);
    assert_eq!(capped_dpr(1.5), 1.5);
    assert_eq!(capped_dpr(3.0), 2.0);
}

#[test]
fn junk_dpr_reads_as_one() {
    assert_eq!(capped_dpr(0.0), 1.0);
    assert_eq!(capped_dpr(-2.0), 1.0);
    assert_eq!(capped_dpr(f64::NAN), 1.0);
    assert_eq!(capped_dpr(f64::INFINITY), 1.0);
}

#[test]
fn backing_size_scales_css_box() {
    assert_eq!(backing_size(1920.0, 1080.0, 1.0), (1920, 1080));
    assert_eq!(backing_size(375.0, 812.0, 3.0), (750, 1624));
    assert_eq!(backing_size(640.5, 480.25, 2.0), (1281, 961));
}

#[test]
fn backing_size_never_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(-10.0, 300.0, 1.0), (1, 300));
}

#[test]
fn client_maps_into_backing_pixels() {
    let rect = CssRect {
        left: 10.0,
        top: 20.0,
        width: 400.0,
        height: 200.0,
    };
    assert_eq!(client_to_backing(10.0, 20.0, rect, 800, 400), (0.0, 0.0));
    assert_eq!(client_to_backing(210.0, 120.0, rect, 800, 400), (400.0, 200.0));
    assert_eq!(client_to_backing(410.0, 220.0, rect, 800, 400), (800.0, 400.0));
}

#[test]
fn client_outside_canvas_is_not_clamped() {
    let rect = CssRect {
        left: 0.0,
        top: 0.0,
        width: 100.0,
        height: 100.0,
    };
    let (x, y) = client_to_backing(150.0, -50.0, rect, 100, 100);
    assert_eq!((x, y), (150.0, -50.0));
}

#[test]
fn collapsed_rect_maps_to_centre() {
    let (x, y) = client_to_backing(5.0, 5.0, CssRect::default(), 640, 480);
    assert_eq!((x, y), (320.0, 240.0));
}
