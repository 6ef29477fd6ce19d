//! Fixed studio lighting plus the pointer-following spotlight.

use crate::constants::{SPOT_AIM_FACTOR, SPOT_AIM_LIFT, SPOT_FOLLOW_FACTOR, SPOT_RANGE_X, SPOT_RANGE_Y};
use crate::scene::hex_to_linear;
use crate::tween::approach;
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

/// Light arriving from `position` towards the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    /// Unit vector from the surface towards the light.
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub distance: f32,
    pub angle: f32,
    pub penumbra: f32,
    pub decay: f32,
}

impl SpotLight {
    /// Drift a little towards the pointer, mapped onto the stage.
    pub fn follow(&mut self, pointer: Vec2) {
        self.position.x = approach(self.position.x, pointer.x * SPOT_RANGE_X, SPOT_FOLLOW_FACTOR);
        self.position.y = approach(self.position.y, pointer.y * SPOT_RANGE_Y, SPOT_FOLLOW_FACTOR);
    }

    /// Ease the aim point towards just above `anchor`.
    pub fn aim_at(&mut self, anchor: Vec3) {
        let aim = anchor + Vec3::new(0.0, SPOT_AIM_LIFT, 0.0);
        self.target = self.target.lerp(aim, SPOT_AIM_FACTOR);
    }

    /// Cosines of the inner (full intensity) and outer cone edges.
    pub fn cone_cosines(&self) -> (f32, f32) {
        let inner = self.angle * (1.0 - self.penumbra);
        (inner.cos(), self.angle.cos())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightRig {
    pub ambient: AmbientLight,
    pub key: DirectionalLight,
    pub fill: DirectionalLight,
    pub rim: DirectionalLight,
    pub spot: SpotLight,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: hex_to_linear(0x403040),
                intensity: 0.8,
            },
            key: DirectionalLight {
                color: hex_to_linear(0xffe0b0),
                intensity: 1.6,
                position: Vec3::new(4.0, 5.0, 5.0),
            },
            fill: DirectionalLight {
                color: hex_to_linear(0xb0c0ff),
                intensity: 0.6,
                position: Vec3::new(-5.0, 2.0, 4.0),
            },
            rim: DirectionalLight {
                color: hex_to_linear(0xffd0a0),
                intensity: 0.8,
                position: Vec3::new(0.0, 4.0, -4.0),
            },
            spot: SpotLight {
                color: hex_to_linear(0xffe0b0),
                intensity: 1.5,
                position: Vec3::new(2.0, 2.0, 5.0),
                target: Vec3::ZERO,
                distance: 15.0,
                angle: PI * 0.15,
                penumbra: 0.5,
                decay: 1.0,
            },
        }
    }
}

impl LightRig {
    pub fn directionals(&self) -> [&DirectionalLight; 3] {
        [&self.key, &self.fill, &self.rim]
    }
}
