//! Arena-backed scene tree.
//!
//! The `Scene` owns every node, material, geometry, point field and texture.
//! Everything else refers to them through small copyable ids, so handles
//! never own anything and their lifetime is the scene's. Nodes can only be
//! attached to an already existing parent when they are created, which keeps
//! the graph a single-rooted tree and guarantees that every parent has a
//! lower index than its children.

use crate::geometry::Primitive;
use fnv::FnvHashMap;
use glam::{Mat4, Vec3};
use image::RgbaImage;
use thiserror::Error;

mod material;
mod node;
mod points;

pub use material::{hex_to_linear, srgb_to_linear, Material};
pub use node::{Drawable, Node, Transform};
pub use points::{Blend, PointField};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialId(u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GeometryId(u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointFieldId(u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(u32);

macro_rules! impl_index {
    ($($id:ty),*) => {$(
        impl $id {
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    )*};
}
impl_index!(NodeId, MaterialId, GeometryId, PointFieldId, TextureId);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("unknown parent node {0:?}")]
    UnknownParent(NodeId),
    #[error("node name {0:?} is already taken")]
    DuplicateName(String),
}

#[derive(Clone, Debug)]
pub struct Scene {
    nodes: Vec<Node>,
    materials: Vec<Material>,
    geometries: Vec<Primitive>,
    point_fields: Vec<PointField>,
    textures: Vec<RgbaImage>,
    names: FnvHashMap<String, NodeId>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create a scene holding only its root node.
    pub fn new() -> Self {
        let root = Node::group("scene");
        let mut names = FnvHashMap::default();
        names.insert("scene".to_owned(), NodeId(0));
        Self {
            nodes: vec![root],
            materials: Vec::new(),
            geometries: Vec::new(),
            point_fields: Vec::new(),
            textures: Vec::new(),
            names,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Attach `node` as the last child of `parent`.
    pub fn add_node(&mut self, parent: NodeId, mut node: Node) -> Result<NodeId, SceneError> {
        if parent.index() >= self.nodes.len() {
            return Err(SceneError::UnknownParent(parent));
        }
        let id = NodeId(self.nodes.len() as u32);
        if let Some(name) = &node.name {
            if self.names.contains_key(name) {
                return Err(SceneError::DuplicateName(name.clone()));
            }
            self.names.insert(name.clone(), id);
        }
        node.set_parent(parent);
        self.nodes.push(node);
        self.nodes[parent.index()].add_child(id);
        Ok(id)
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() as u32 - 1)
    }

    pub fn add_geometry(&mut self, primitive: Primitive) -> GeometryId {
        self.geometries.push(primitive);
        GeometryId(self.geometries.len() as u32 - 1)
    }

    pub fn add_point_field(&mut self, field: PointField) -> PointFieldId {
        self.point_fields.push(field);
        PointFieldId(self.point_fields.len() as u32 - 1)
    }

    pub fn add_texture(&mut self, image: RgbaImage) -> TextureId {
        self.textures.push(image);
        TextureId(self.textures.len() as u32 - 1)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.index())
    }

    pub fn material_mut(&mut self, id: MaterialId) -> Option<&mut Material> {
        self.materials.get_mut(id.index())
    }

    pub fn point_field(&self, id: PointFieldId) -> Option<&PointField> {
        self.point_fields.get(id.index())
    }

    pub fn point_field_mut(&mut self, id: PointFieldId) -> Option<&mut PointField> {
        self.point_fields.get_mut(id.index())
    }

    pub fn point_fields(&self) -> &[PointField] {
        &self.point_fields
    }

    pub fn geometries(&self) -> &[Primitive] {
        &self.geometries
    }

    pub fn textures(&self) -> &[RgbaImage] {
        &self.textures
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    /// World matrix of every node, indexed by `NodeId::index`.
    pub fn world_matrices(&self) -> Vec<Mat4> {
        let mut out: Vec<Mat4> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let local = node.transform.matrix();
            let world = match node.parent() {
                Some(p) => out[p.index()] * local,
                None => local,
            };
            out.push(world);
        }
        out
    }

    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        let mut node = self.node(id)?;
        let mut world = node.transform.matrix();
        while let Some(parent) = node.parent() {
            node = self.node(parent)?;
            world = node.transform.matrix() * world;
        }
        Some(world)
    }

    pub fn world_position(&self, id: NodeId) -> Option<Vec3> {
        self.world_matrix(id)
            .map(|m| m.transform_point3(Vec3::ZERO))
    }

    /// True when `id` is `ancestor` or lies somewhere below it.
    pub fn is_descendant(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut cursor = Some(id);
        // a parent chain can be at most node_count long in a tree
        for _ in 0..=self.nodes.len() {
            match cursor {
                Some(c) if c == ancestor => return true,
                Some(c) => cursor = self.node(c).and_then(Node::parent),
                None => return false,
            }
        }
        false
    }

    /// Depth-first pre-order list of `start` and everything below it.
    pub fn descendants(&self, start: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };
            out.push(id);
            stack.extend(node.children().iter().rev().copied());
        }
        out
    }
}
