//! Procedural construction of the statue and its surroundings.
//!
//! `build` is purely constructive: it consumes randomness only for the marble
//! map, the halo ring tilts and the particle scatter, and returns the handles
//! the animation loop later addresses by name.

use crate::constants::{
    DUST_COUNT, DUST_EXTENT, HALF_PI, HALO_RING_COUNT, SKIN_METALNESS, SKIN_ROUGHNESS,
    SPARKLE_COUNT, TRAIL_CAPACITY,
};
use crate::geometry::{CatmullRom, Primitive};
use crate::scene::{
    GeometryId, Material, MaterialId, Node, NodeId, PointField, PointFieldId, Scene, SceneError,
};
use crate::texture;
use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::{PI, TAU};

pub const SKIN_HEX: u32 = 0xffdfc4;
pub const GOLD_HEX: u32 = 0xffd700;
const PALETTE_DABS: [u32; 4] = [0xff0000, 0xffd700, 0x00ff00, 0x0000ff];

/// Materials the animation loop and hover transition mutate.
#[derive(Clone, Copy, Debug)]
pub struct StatueMaterials {
    pub skin: MaterialId,
    pub dress: MaterialId,
    pub hair: MaterialId,
    pub gold: MaterialId,
    pub stone: MaterialId,
    pub halo: MaterialId,
}

/// Non-owning references into the scene for per-frame updates.
#[derive(Clone, Debug)]
pub struct StatueHandles {
    pub root: NodeId,
    pub head: NodeId,
    pub body: NodeId,
    pub dress: NodeId,
    pub left_arm: NodeId,
    pub right_arm: NodeId,
    pub brush: NodeId,
    pub brush_tip: NodeId,
    pub pedestal: NodeId,
    pub halo_rings: Vec<NodeId>,
    pub sparkles: NodeId,
    pub dust: NodeId,
    pub trail: NodeId,
    pub sparkle_field: PointFieldId,
    pub dust_field: PointFieldId,
    pub trail_field: PointFieldId,
    pub materials: StatueMaterials,
}

impl StatueHandles {
    /// Every node handle, for integrity checks.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut out = vec![
            self.root,
            self.head,
            self.body,
            self.dress,
            self.left_arm,
            self.right_arm,
            self.brush,
            self.brush_tip,
            self.pedestal,
            self.sparkles,
            self.dust,
            self.trail,
        ];
        out.extend_from_slice(&self.halo_rings);
        out
    }
}

struct Builder<'a> {
    scene: &'a mut Scene,
}

impl Builder<'_> {
    fn mesh(
        &mut self,
        parent: NodeId,
        geometry: GeometryId,
        material: MaterialId,
        place: impl FnOnce(Node) -> Node,
    ) -> Result<NodeId, SceneError> {
        self.scene
            .add_node(parent, place(Node::mesh(geometry, material)))
    }

    fn shape(
        &mut self,
        parent: NodeId,
        primitive: Primitive,
        material: MaterialId,
        place: impl FnOnce(Node) -> Node,
    ) -> Result<NodeId, SceneError> {
        let geometry = self.scene.add_geometry(primitive);
        self.mesh(parent, geometry, material, place)
    }
}

/// Build the statue, ground, dust and trail fields into `scene`.
pub fn build<R: Rng + ?Sized>(scene: &mut Scene, rng: &mut R) -> Result<StatueHandles, SceneError> {
    let marble = scene.add_texture(texture::marble(rng));

    let skin = scene.add_material(
        Material::standard(SKIN_HEX)
            .with_map(marble)
            .with_roughness(SKIN_ROUGHNESS)
            .with_metalness(SKIN_METALNESS)
            .with_emissive(0xc9a84c, 0.0),
    );
    let dress_mat = scene.add_material(
        Material::standard(0x1e5e6e)
            .with_roughness(0.4)
            .with_metalness(0.3),
    );
    let hair = scene.add_material(Material::standard(0x110b0b).with_roughness(0.6));
    let gold = scene.add_material(
        Material::standard(GOLD_HEX)
            .with_roughness(0.1)
            .with_metalness(0.9),
    );
    let stone = scene.add_material(
        Material::standard(0x1a1a1e)
            .with_map(marble)
            .with_roughness(0.8)
            .with_metalness(0.1),
    );
    let paint_red = scene.add_material(Material::standard(0xd32f2f));
    let white = scene.add_material(Material::standard(0xffffff));
    let iris = scene.add_material(Material::standard(0x3e2723));
    let lips = scene.add_material(Material::standard(0xc97b7b).with_roughness(0.4));
    let halo = scene.add_material(
        Material::standard(GOLD_HEX)
            .with_opacity(0.4)
            .with_emissive(0xc9a84c, 0.5),
    );
    let palette_wood = scene.add_material(Material::standard(0x8d6e63));
    let ground = scene.add_material(Material::standard(0x08080c).with_roughness(0.9));

    let materials = StatueMaterials {
        skin,
        dress: dress_mat,
        hair,
        gold,
        stone,
        halo,
    };

    let scene_root = scene.root();
    let mut b = Builder { scene };
    let root = b.scene.add_node(scene_root, Node::group("statue"))?;

    // ---------------- Head ----------------
    let head = b
        .scene
        .add_node(root, Node::group("head").at(0.0, 1.45, 0.0))?;
    b.shape(head, Primitive::sphere(0.35, 32, 32), skin, |n| {
        n.scaled(0.9, 1.08, 0.95)
    })?;
    b.shape(head, Primitive::cylinder(0.12, 0.14, 0.35, 24), skin, |n| {
        n.at(0.0, -0.48, -0.02)
    })?;
    b.shape(head, Primitive::cone(0.035, 0.18, 16), skin, |n| {
        n.at(0.0, -0.05, 0.32)
            .rotated(-0.1, 0.0, 0.0)
            .scaled(1.0, 1.0, 0.6)
    })?;

    let eye = b.scene.add_geometry(Primitive::sphere(0.06, 24, 24));
    let iris_geo = b.scene.add_geometry(Primitive::sphere(0.028, 16, 16));
    let liner = b
        .scene
        .add_geometry(Primitive::torus_arc(0.06, 0.004, 4, 16, 2.0));
    for (side, roll, liner_roll) in [(-1.0f32, 0.1f32, -1.9f32), (1.0, -0.1, -1.25)] {
        let x = 0.13 * side;
        b.mesh(head, eye, white, |n| {
            n.at(x, 0.03, 0.27)
                .rotated(0.0, 0.0, roll)
                .scaled(1.0, 0.6, 0.4)
        })?;
        b.mesh(head, iris_geo, iris, |n| {
            n.at(x, 0.03, 0.305).scaled(1.0, 1.0, 0.2)
        })?;
        b.mesh(head, liner, hair, |n| {
            n.at(x, 0.035, 0.27).rotated(0.6, 0.0, liner_roll)
        })?;
    }
    b.shape(head, Primitive::torus_arc(0.06, 0.015, 8, 24, 2.2), lips, |n| {
        n.at(0.0, -0.25, 0.31)
            .rotated(0.6, 0.0, -2.6)
            .scaled(1.0, 0.8, 1.0)
    })?;

    b.shape(head, Primitive::sphere(0.38, 24, 24), hair, |n| {
        n.at(0.0, 0.15, -0.2)
    })?;
    b.shape(head, Primitive::dome(0.36, 24, 24, PI * 0.48), hair, |n| {
        n.at(0.0, 0.02, 0.0)
    })?;
    let earring = b.scene.add_geometry(Primitive::sphere(0.035, 32, 16));
    b.mesh(head, earring, gold, |n| n.at(-0.35, -0.15, 0.0))?;
    b.mesh(head, earring, gold, |n| n.at(0.35, -0.15, 0.0))?;

    let mut halo_rings = Vec::with_capacity(HALO_RING_COUNT);
    for i in 0..HALO_RING_COUNT {
        let tilt_x = HALF_PI + (rng.gen::<f32>() - 0.5);
        let tilt_y = rng.gen::<f32>() - 0.5;
        let ring = b.shape(
            head,
            Primitive::torus(0.55 + i as f32 * 0.1, 0.005, 8, 50),
            halo,
            |n| n.rotated(tilt_x, tilt_y, 0.0),
        )?;
        halo_rings.push(ring);
    }

    // ---------------- Body ----------------
    let body = b.scene.add_node(root, Node::group("body"))?;
    b.shape(body, Primitive::cylinder(0.14, 0.42, 0.35, 24), skin, |n| {
        n.at(0.0, 1.05, 0.0).scaled(1.3, 1.0, 0.75)
    })?;
    let dress = b.shape(body, Primitive::lathe(dress_profile(), 32), dress_mat, |n| {
        n.named("dress").at(0.0, 0.1, 0.0)
    })?;
    b.shape(body, Primitive::torus(0.28, 0.035, 8, 32), gold, |n| {
        n.at(0.0, 0.32, 0.0).rotated(HALF_PI, 0.0, 0.0)
    })?;

    // ---------------- Arms ----------------
    let right_arm = b
        .scene
        .add_node(root, Node::group("right_arm").at(0.28, 1.0, 0.0))?;
    b.shape(
        right_arm,
        arm_tube([
            Vec3::ZERO,
            Vec3::new(0.22, -0.35, 0.15),
            Vec3::new(0.08, -0.55, 0.35),
        ]),
        skin,
        |n| n,
    )?;
    b.shape(right_arm, Primitive::sphere(0.07, 32, 16), skin, |n| {
        n.at(0.08, -0.55, 0.35)
    })?;
    let brush = b.scene.add_node(
        right_arm,
        Node::group("brush")
            .at(0.08, -0.5, 0.35)
            .rotated(0.3, 0.0, -0.4),
    )?;
    b.shape(brush, Primitive::cylinder(0.008, 0.006, 0.5, 8), gold, |n| n)?;
    let brush_tip = b.shape(brush, Primitive::cone(0.015, 0.1, 8), paint_red, |n| {
        n.named("brush_tip").at(0.0, 0.3, 0.0)
    })?;

    let left_arm = b
        .scene
        .add_node(root, Node::group("left_arm").at(-0.28, 1.0, 0.0))?;
    b.shape(
        left_arm,
        arm_tube([
            Vec3::ZERO,
            Vec3::new(-0.22, -0.35, 0.1),
            Vec3::new(-0.15, -0.55, 0.3),
        ]),
        skin,
        |n| n,
    )?;
    let palette = b.shape(
        left_arm,
        Primitive::cylinder(0.26, 0.26, 0.015, 16),
        palette_wood,
        |n| n.at(-0.15, -0.58, 0.35).rotated(0.4, 0.0, 0.25),
    )?;
    let dab = b.scene.add_geometry(Primitive::sphere(0.038, 32, 16));
    for (i, hex) in PALETTE_DABS.iter().enumerate() {
        let paint = b.scene.add_material(Material::standard(*hex));
        let angle = i as f32;
        b.mesh(palette, dab, paint, |n| {
            n.at(angle.cos() * 0.13, 0.02, angle.sin() * 0.13)
        })?;
    }

    // ---------------- Halo sparkles ----------------
    let sparkle_positions = (0..SPARKLE_COUNT)
        .map(|_| {
            let r = 0.55 + rng.gen::<f32>() * 0.7;
            let th = rng.gen::<f32>() * TAU;
            Vec3::new(r * th.cos(), rng.gen::<f32>() * 2.2 - 1.0, r * th.sin())
        })
        .collect();
    let sparkle_field = b
        .scene
        .add_point_field(PointField::new(sparkle_positions, GOLD_HEX, 0.045, 0.9).additive());
    let sparkles = b
        .scene
        .add_node(root, Node::points(sparkle_field).named("sparkles"))?;

    // ---------------- Pedestal ----------------
    let pedestal = b.scene.add_node(root, Node::group("pedestal"))?;
    b.shape(pedestal, Primitive::cylinder(0.7, 0.65, 0.15, 32), stone, |n| {
        n.at(0.0, -0.925, 0.0)
    })?;
    b.shape(pedestal, Primitive::cylinder(0.55, 0.6, 0.8, 24), stone, |n| {
        n.at(0.0, -1.4, 0.0)
    })?;
    b.shape(pedestal, Primitive::cylinder(0.8, 0.9, 0.3, 32), stone, |n| {
        n.at(0.0, -1.95, 0.0)
    })?;
    b.shape(pedestal, Primitive::torus(0.67, 0.025, 8, 48), gold, |n| {
        n.at(0.0, -0.925, 0.0).rotated(HALF_PI, 0.0, 0.0)
    })?;
    b.shape(pedestal, Primitive::torus(0.6, 0.02, 8, 48), gold, |n| {
        n.at(0.0, -1.8, 0.0).rotated(HALF_PI, 0.0, 0.0)
    })?;

    // ---------------- Surroundings ----------------
    let dust_positions = (0..DUST_COUNT)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * DUST_EXTENT,
                (rng.gen::<f32>() - 0.5) * DUST_EXTENT,
                (rng.gen::<f32>() - 0.5) * DUST_EXTENT,
            )
        })
        .collect();
    let dust_field = b
        .scene
        .add_point_field(PointField::new(dust_positions, 0xffffff, 0.015, 0.2));
    let dust = b
        .scene
        .add_node(scene_root, Node::points(dust_field).named("dust"))?;

    b.shape(scene_root, Primitive::plane(40.0, 40.0), ground, |n| {
        n.named("ground")
            .at(0.0, -2.1, 0.0)
            .rotated(-HALF_PI, 0.0, 0.0)
    })?;

    // world-space trail, filled every frame by the animation loop
    let trail_field = b
        .scene
        .add_point_field(PointField::zeroed(TRAIL_CAPACITY, GOLD_HEX, 0.04, 0.8).additive());
    let trail = b
        .scene
        .add_node(scene_root, Node::points(trail_field).named("trail"))?;

    log::info!(
        "[statue] built {} nodes, {} geometries",
        b.scene.node_count(),
        b.scene.geometries().len()
    );

    Ok(StatueHandles {
        root,
        head,
        body,
        dress,
        left_arm,
        right_arm,
        brush,
        brush_tip,
        pedestal,
        halo_rings,
        sparkles,
        dust,
        trail,
        sparkle_field,
        dust_field,
        trail_field,
        materials,
    })
}

/// A-line dress silhouette: 13 (radius, height) samples from hem to neckline.
pub fn dress_profile() -> Vec<Vec2> {
    (0..=12)
        .map(|i| {
            let t = i as f32 / 12.0;
            let y = (t - 0.5) * 2.1;
            let w = if t > 0.9 {
                0.16
            } else if t > 0.8 {
                0.36
            } else {
                0.2 + (1.0 - t) * 0.4
            };
            Vec2::new(w, y)
        })
        .collect()
}

fn arm_tube(points: [Vec3; 3]) -> Primitive {
    Primitive::tube(CatmullRom::new(points.to_vec()), 12, 0.07, 8)
}
