use crate::constants::MAX_DEVICE_PIXEL_RATIO;

/// A DOMRect reduced to the fields pointer mapping needs, in CSS pixels.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct CssRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// devicePixelRatio clamped to the backing-store cap; junk reads as 1.
#[inline]
pub fn capped_dpr(dpr: f64) -> f64 {
    if !dpr.is_finite() || dpr <= 0.0 {
        return 1.0;
    }
    dpr.min(MAX_DEVICE_PIXEL_RATIO)
}

/// Physical canvas size for a CSS box, never zero in either dimension.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = capped_dpr(dpr);
    let w = (css_width.max(0.0) * dpr).round() as u32;
    let h = (css_height.max(0.0) * dpr).round() as u32;
    (w.max(1), h.max(1))
}

/// Map a pointer's client position into canvas backing pixels.
///
/// Positions outside the canvas are not clamped here; normalisation clamps
/// them later. A collapsed rect maps everything to the centre.
#[inline]
pub fn client_to_backing(
    client_x: f64,
    client_y: f64,
    rect: CssRect,
    backing_width: u32,
    backing_height: u32,
) -> (f32, f32) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return (backing_width as f32 * 0.5, backing_height as f32 * 0.5);
    }
    let u = (client_x - rect.left) / rect.width;
    let v = (client_y - rect.top) / rect.height;
    (
        (u * backing_width as f64) as f32,
        (v * backing_height as f64) as f32,
    )
}
