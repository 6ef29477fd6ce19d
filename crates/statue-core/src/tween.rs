//! Time-based interpolation: easing curves, one-shot tweens, exponential
//! smoothing and the skin highlight transition.

use crate::constants::{
    HIGHLIGHT_COLOR, HIGHLIGHT_DURATION_SEC, HIGHLIGHT_METALNESS, HIGHLIGHT_ROUGHNESS,
};
use crate::scene::Material;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power2InOut,
    Power3Out,
}

impl Ease {
    /// Map normalized progress in [0, 1] to eased progress in [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * 0.5
                }
            }
            Ease::Power3Out => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
        }
    }
}

pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec3 {
    fn lerp(self, to: Self, t: f32) -> Self {
        Vec3::lerp(self, to, t)
    }
}

/// Move `current` a fixed fraction of the way to `target`.
///
/// For `factor` in [0, 1] the result never overshoots and the distance to
/// `target` shrinks monotonically over repeated calls.
#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// A one-shot interpolation between two values over wall-clock seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    start: f32,
    duration: f32,
    ease: Ease,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, start: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            ease,
        }
    }

    /// Same as `new` but holding `from` for `delay` seconds first.
    pub fn delayed(from: T, to: T, now: f32, delay: f32, duration: f32, ease: Ease) -> Self {
        Self::new(from, to, now + delay, duration, ease)
    }

    pub fn progress(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return if now >= self.start { 1.0 } else { 0.0 };
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: f32) -> T {
        self.from.lerp(self.to, self.ease.apply(self.progress(now)))
    }

    pub fn finished(&self, now: f32) -> bool {
        self.progress(now) >= 1.0
    }
}

/// The tweened subset of a surface material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceParams {
    pub color: Vec3,
    pub metalness: f32,
    pub roughness: f32,
}

impl SurfaceParams {
    pub fn of(material: &Material) -> Self {
        Self {
            color: material.color,
            metalness: material.metalness,
            roughness: material.roughness,
        }
    }

    pub fn highlight() -> Self {
        Self {
            color: Vec3::from(HIGHLIGHT_COLOR),
            metalness: HIGHLIGHT_METALNESS,
            roughness: HIGHLIGHT_ROUGHNESS,
        }
    }

    pub fn write_to(&self, material: &mut Material) {
        material.color = self.color;
        material.metalness = self.metalness;
        material.roughness = self.roughness;
    }
}

impl Lerp for SurfaceParams {
    fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            color: self.color.lerp(to.color, t),
            metalness: Lerp::lerp(self.metalness, to.metalness, t),
            roughness: Lerp::lerp(self.roughness, to.roughness, t),
        }
    }
}

/// Hover-driven blend of the skin between its rest look and liquid gold.
///
/// A new request always starts from the value on screen at that instant and
/// replaces whatever was in flight.
#[derive(Clone, Debug)]
pub struct MaterialTransition {
    rest: SurfaceParams,
    highlight: SurfaceParams,
    current: SurfaceParams,
    tween: Option<Tween<SurfaceParams>>,
    engaged: bool,
}

impl MaterialTransition {
    pub fn new(rest: SurfaceParams) -> Self {
        Self {
            rest,
            highlight: SurfaceParams::highlight(),
            current: rest,
            tween: None,
            engaged: false,
        }
    }

    pub fn set_hovered(&mut self, hovered: bool, now: f32) {
        if let Some(tween) = &self.tween {
            self.current = tween.value_at(now);
        }
        let target = if hovered { self.highlight } else { self.rest };
        self.tween = Some(Tween::new(
            self.current,
            target,
            now,
            HIGHLIGHT_DURATION_SEC,
            Ease::Power2InOut,
        ));
        self.engaged = hovered;
    }

    /// Advance to `now`. Returns the value to write while a tween is running.
    pub fn update(&mut self, now: f32) -> Option<SurfaceParams> {
        let tween = self.tween?;
        self.current = tween.value_at(now);
        if tween.finished(now) {
            self.tween = None;
        }
        Some(self.current)
    }

    pub fn current(&self) -> SurfaceParams {
        self.current
    }

    pub fn rest(&self) -> SurfaceParams {
        self.rest
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// The idle emissive pulse yields while the highlight is engaged or moving.
    pub fn suppresses_pulse(&self) -> bool {
        self.engaged || self.tween.is_some()
    }
}
