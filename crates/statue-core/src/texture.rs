//! Procedural marble surface map.
//!
//! A pale base tone crossed by faint random-walk veins and a few soft
//! mineral flecks. Every plot wraps modulo the image size so the result tiles
//! seamlessly on both axes.

use crate::constants::{
    FLECK_ALPHA, FLECK_COUNT, FLECK_MAX_RADIUS, TEXTURE_SIZE, VEIN_ALPHA, VEIN_COUNT,
    VEIN_SEGMENTS, VEIN_STEP,
};
use image::{Rgba, RgbaImage};
use rand::Rng;

pub const BASE_TONE: [u8; 3] = [0xf0, 0xeb, 0xe3];
pub const VEIN_TONE: [u8; 3] = [0xd4, 0xa5, 0x74];

/// Generate the marble map. Deterministic for a given generator state.
pub fn marble<R: Rng + ?Sized>(rng: &mut R) -> RgbaImage {
    let size = TEXTURE_SIZE;
    let extent = size as f32;
    let mut img = RgbaImage::from_pixel(
        size,
        size,
        Rgba([BASE_TONE[0], BASE_TONE[1], BASE_TONE[2], 255]),
    );

    for _ in 0..VEIN_COUNT {
        let mut x = rng.gen::<f32>() * extent;
        let mut y = rng.gen::<f32>() * extent;
        for seg in 0..VEIN_SEGMENTS {
            let nx = x + (rng.gen::<f32>() - 0.5) * VEIN_STEP;
            let ny = y + (rng.gen::<f32>() - 0.5) * VEIN_STEP;
            let last = seg + 1 == VEIN_SEGMENTS;
            stroke(&mut img, (x, y), (nx, ny), VEIN_TONE, VEIN_ALPHA, last);
            x = nx;
            y = ny;
        }
    }

    for _ in 0..FLECK_COUNT {
        let cx = rng.gen::<f32>() * extent;
        let cy = rng.gen::<f32>() * extent;
        let r = rng.gen::<f32>() * FLECK_MAX_RADIUS;
        fill_circle(&mut img, (cx, cy), r, VEIN_TONE, FLECK_ALPHA);
    }
    img
}

/// Plot a one-pixel line. A polyline passes `include_end` only on its final
/// segment so every joint is composited once.
fn stroke(
    img: &mut RgbaImage,
    from: (f32, f32),
    to: (f32, f32),
    tone: [u8; 3],
    alpha: f32,
    include_end: bool,
) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;
    let last = if include_end { steps } else { steps - 1 };
    for i in 0..=last {
        let t = i as f32 / steps as f32;
        blend_wrapped(img, from.0 + dx * t, from.1 + dy * t, tone, alpha);
    }
}

fn fill_circle(img: &mut RgbaImage, center: (f32, f32), radius: f32, tone: [u8; 3], alpha: f32) {
    let r = radius.ceil() as i32;
    let r2 = radius * radius;
    for oy in -r..=r {
        for ox in -r..=r {
            if (ox * ox + oy * oy) as f32 <= r2 {
                blend_wrapped(img, center.0 + ox as f32, center.1 + oy as f32, tone, alpha);
            }
        }
    }
}

fn blend_wrapped(img: &mut RgbaImage, x: f32, y: f32, tone: [u8; 3], alpha: f32) {
    let w = img.width() as i64;
    let h = img.height() as i64;
    let px = (x.floor() as i64).rem_euclid(w) as u32;
    let py = (y.floor() as i64).rem_euclid(h) as u32;
    let dst = img.get_pixel_mut(px, py);
    for c in 0..3 {
        let d = dst.0[c] as f32;
        let s = tone[c] as f32;
        dst.0[c] = (d + (s - d) * alpha).round().clamp(0.0, 255.0) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> RgbaImage {
        RgbaImage::from_pixel(
            TEXTURE_SIZE,
            TEXTURE_SIZE,
            Rgba([BASE_TONE[0], BASE_TONE[1], BASE_TONE[2], 255]),
        )
    }

    // base red 240 blended once toward 212 at 0.12
    const ONCE: u8 = 237;

    #[test]
    fn stroke_wraps_across_the_right_edge() {
        let mut img = blank();
        stroke(&mut img, (509.5, 3.5), (514.5, 3.5), VEIN_TONE, VEIN_ALPHA, true);
        for x in [509, 510, 511, 0, 1, 2] {
            assert_eq!(img.get_pixel(x, 3).0[0], ONCE, "x = {x}");
        }
        assert_eq!(img.get_pixel(3, 3).0[0], BASE_TONE[0]);
        assert_eq!(img.get_pixel(508, 3).0[0], BASE_TONE[0]);
    }

    #[test]
    fn stroke_wraps_across_the_top_edge() {
        let mut img = blank();
        stroke(&mut img, (7.5, 1.5), (7.5, -2.5), VEIN_TONE, VEIN_ALPHA, true);
        for y in [1, 0, 511, 510] {
            assert_eq!(img.get_pixel(7, y).0[0], ONCE, "y = {y}");
        }
    }

    #[test]
    fn polyline_joints_are_blended_once() {
        let mut img = blank();
        stroke(&mut img, (10.5, 10.5), (20.5, 10.5), VEIN_TONE, VEIN_ALPHA, false);
        stroke(&mut img, (20.5, 10.5), (30.5, 10.5), VEIN_TONE, VEIN_ALPHA, true);
        for x in 10..=30 {
            assert_eq!(img.get_pixel(x, 10).0[0], ONCE, "x = {x}");
        }
        assert_eq!(img.get_pixel(31, 10).0[0], BASE_TONE[0]);
    }

    #[test]
    fn flecks_wrap_around_corners() {
        let mut img = blank();
        fill_circle(&mut img, (0.0, 0.0), 2.0, VEIN_TONE, FLECK_ALPHA);
        assert_ne!(img.get_pixel(0, 0).0, blank().get_pixel(0, 0).0);
        assert_ne!(img.get_pixel(511, 511).0, blank().get_pixel(511, 511).0);
        assert_ne!(img.get_pixel(510, 0).0, blank().get_pixel(510, 0).0);
    }
}
