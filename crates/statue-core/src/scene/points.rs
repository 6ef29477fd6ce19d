use super::material::hex_to_linear;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    Alpha,
    Additive,
}

/// A cloud of camera-facing point sprites in the owning node's local space.
#[derive(Clone, Debug, PartialEq)]
pub struct PointField {
    pub positions: Vec<Vec3>,
    /// How many leading positions are drawn.
    pub visible: usize,
    pub color: Vec3,
    pub size: f32,
    pub opacity: f32,
    pub blend: Blend,
}

impl PointField {
    pub fn new(positions: Vec<Vec3>, hex: u32, size: f32, opacity: f32) -> Self {
        Self {
            visible: positions.len(),
            positions,
            color: hex_to_linear(hex),
            size,
            opacity,
            blend: Blend::Alpha,
        }
    }

    /// Fixed-capacity field with every point at the origin and none drawn yet.
    pub fn zeroed(capacity: usize, hex: u32, size: f32, opacity: f32) -> Self {
        let mut field = Self::new(vec![Vec3::ZERO; capacity], hex, size, opacity);
        field.visible = 0;
        field
    }

    pub fn drawn(&self) -> &[Vec3] {
        &self.positions[..self.visible.min(self.positions.len())]
    }

    pub fn additive(mut self) -> Self {
        self.blend = Blend::Additive;
        self
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
