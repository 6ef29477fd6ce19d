use super::{GeometryId, MaterialId, NodeId, PointFieldId};
use glam::{Mat4, Quat, Vec3};
use smallvec::SmallVec;

/// Local transform: translation, Euler XYZ rotation (radians) and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Rotation applied X first in the parent frame, i.e. `Rx * Ry * Rz`.
    pub fn quat(&self) -> Quat {
        Quat::from_rotation_x(self.rotation.x)
            * Quat::from_rotation_y(self.rotation.y)
            * Quat::from_rotation_z(self.rotation.z)
    }

    /// Translation * Rotation * Scale.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }
}

/// What a node draws, if anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Drawable {
    Mesh {
        geometry: GeometryId,
        material: MaterialId,
    },
    Points(PointFieldId),
}

/// A node in the scene tree hierarchy.
#[derive(Clone, Debug, Default)]
pub struct Node {
    pub name: Option<String>,
    pub transform: Transform,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    drawable: Option<Drawable>,
}

impl Node {
    pub fn group(name: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            ..Default::default()
        }
    }

    pub fn mesh(geometry: GeometryId, material: MaterialId) -> Self {
        Self {
            drawable: Some(Drawable::Mesh { geometry, material }),
            ..Default::default()
        }
    }

    pub fn points(field: PointFieldId) -> Self {
        Self {
            drawable: Some(Drawable::Points(field)),
            ..Default::default()
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.position = Vec3::new(x, y, z);
        self
    }

    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.rotation = Vec3::new(x, y, z);
        self
    }

    pub fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.scale = Vec3::new(x, y, z);
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn drawable(&self) -> Option<Drawable> {
        self.drawable
    }

    // Hierarchy links are only written by `Scene::add_node` so the tree stays consistent.
    pub(super) fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }

    pub(super) fn add_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}
