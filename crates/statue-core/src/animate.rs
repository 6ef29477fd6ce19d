//! Per-frame scene animation.
//!
//! Every effect looks its target up through the scene and quietly does nothing
//! when the handle no longer resolves, so a partially built scene still
//! animates whatever it has.

use crate::constants::{
    BOB_RATE, BOB_REFERENCE_HZ, BOB_STEP, DRESS_BREATH_AMPLITUDE, DRESS_BREATH_RATE,
    DRESS_SWAY_AMPLITUDE, DRESS_SWAY_RATE, DUST_SPIN_RATE, FOLLOW_FACTOR, FOLLOW_PITCH_GAIN,
    FOLLOW_YAW_GAIN, HALO_PRECESS_PER_TICK, HALO_SPIN_PER_TICK, HEAD_PITCH_GAIN, HEAD_YAW_GAIN,
    PULSE_BASE, PULSE_RATE, PULSE_SWING, SPARKLE_OPACITY_BASE, SPARKLE_OPACITY_SWING,
    SPARKLE_SPIN_PER_TICK, TRAIL_CAPACITY, TRAIL_OPACITY_BASE, TRAIL_OPACITY_RATE,
    TRAIL_OPACITY_SWING,
};
use crate::layout::Placement;
use crate::lights::LightRig;
use crate::scene::Scene;
use crate::statue::StatueHandles;
use crate::trail::TrailBuffer;
use crate::tween::approach;
use glam::Vec2;

/// Everything the animation needs to know about the outside world this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the session started.
    pub elapsed: f32,
    /// Pointer in [-1, 1], +y up.
    pub pointer: Vec2,
    /// Extra x offset of the statue root (entrance slide).
    pub slide_x: f32,
    /// Hold the skin emissive where it is instead of pulsing.
    pub pulse_suppressed: bool,
}

/// Vertical drift of the statue root at time `t`.
///
/// Closed form of summing `BOB_STEP * sin(BOB_RATE * t)` once per frame at
/// the reference refresh rate, so the motion matches the classic per-frame
/// bob without accumulating drift at other rates.
pub fn bob_offset(t: f32) -> f32 {
    BOB_STEP * BOB_REFERENCE_HZ / BOB_RATE * (1.0 - (BOB_RATE * t).cos())
}

/// Per-tick (spin about z, precession about x) for halo ring `i`.
pub fn halo_ring_rates(i: usize) -> (f32, f32) {
    let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
    (
        HALO_SPIN_PER_TICK * (i + 1) as f32,
        HALO_PRECESS_PER_TICK * sign,
    )
}

pub fn pulse_intensity(t: f32) -> f32 {
    PULSE_BASE + (t * PULSE_RATE).sin() * PULSE_SWING
}

#[derive(Clone, Debug)]
pub struct Animator {
    trail: TrailBuffer,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    pub fn new() -> Self {
        Self {
            trail: TrailBuffer::new(TRAIL_CAPACITY),
        }
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    /// Advance every idle effect by one frame.
    pub fn tick(
        &mut self,
        scene: &mut Scene,
        handles: &StatueHandles,
        lights: &mut LightRig,
        placement: &Placement,
        input: &FrameInput,
    ) {
        let t = input.elapsed;
        let (px, py) = (input.pointer.x, input.pointer.y);

        if let Some(root) = scene.node_mut(handles.root) {
            let tf = &mut root.transform;
            tf.position.x = placement.position.x + input.slide_x;
            tf.position.y = placement.position.y + bob_offset(t);
            tf.position.z = placement.position.z;
            let target_yaw = placement.yaw + px * FOLLOW_YAW_GAIN;
            tf.rotation.y = approach(tf.rotation.y, target_yaw, FOLLOW_FACTOR);
            tf.rotation.x = approach(tf.rotation.x, -py * FOLLOW_PITCH_GAIN, FOLLOW_FACTOR);
        }

        if let Some(head) = scene.node_mut(handles.head) {
            head.transform.rotation.y = px * HEAD_YAW_GAIN;
            head.transform.rotation.x = -py * HEAD_PITCH_GAIN;
        }

        if let Some(sparkles) = scene.node_mut(handles.sparkles) {
            sparkles.transform.rotation.y -= SPARKLE_SPIN_PER_TICK;
        }
        if let Some(field) = scene.point_field_mut(handles.sparkle_field) {
            field.opacity = SPARKLE_OPACITY_BASE + (t * 2.0).sin() * SPARKLE_OPACITY_SWING;
        }

        if !input.pulse_suppressed {
            if let Some(skin) = scene.material_mut(handles.materials.skin) {
                skin.emissive_intensity = pulse_intensity(t);
            }
        }

        for (i, ring) in handles.halo_rings.iter().enumerate() {
            let (spin, precess) = halo_ring_rates(i);
            if let Some(node) = scene.node_mut(*ring) {
                node.transform.rotation.z += spin;
                node.transform.rotation.x += precess;
            }
        }

        if let Some(dress) = scene.node_mut(handles.dress) {
            dress.transform.rotation.z = (t * DRESS_SWAY_RATE).sin() * DRESS_SWAY_AMPLITUDE;
            dress.transform.scale.x = 1.0 + (t * DRESS_BREATH_RATE).sin() * DRESS_BREATH_AMPLITUDE;
        }

        // transforms above must be final before sampling the tip in world space
        if let Some(tip) = scene.world_position(handles.brush_tip) {
            self.trail.push(tip);
            if let Some(field) = scene.point_field_mut(handles.trail_field) {
                field.visible = self.trail.copy_into(&mut field.positions);
                field.opacity = TRAIL_OPACITY_BASE + (t * TRAIL_OPACITY_RATE).sin() * TRAIL_OPACITY_SWING;
            }
        }

        if let Some(dust) = scene.node_mut(handles.dust) {
            dust.transform.rotation.y = t * DUST_SPIN_RATE;
        }

        lights.spot.follow(input.pointer);
        if let Some(root) = scene.node(handles.root) {
            lights.spot.aim_at(root.transform.position);
        }
    }
}
