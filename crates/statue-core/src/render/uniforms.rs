use crate::constants::{EXPOSURE, FOG_COLOR, FOG_DENSITY};
use crate::lights::LightRig;
use crate::scene::{hex_to_linear, Blend, Drawable, GeometryId, Material, Scene};
use crate::state::Camera;
use glam::{Mat4, Vec3};
use std::ops::Range;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    pub ambient: [f32; 4],
    pub dir_dirs: [[f32; 4]; 3],
    pub dir_colors: [[f32; 4]; 3],
    pub spot_pos: [f32; 4],
    pub spot_dir: [f32; 4],
    pub spot_color: [f32; 4],
    pub spot_cone: [f32; 4],
    pub fog: [f32; 4],
    pub output: [f32; 4],
    pub camera_right: [f32; 4],
    pub camera_up: [f32; 4],
}

fn rgb_w(v: Vec3, w: f32) -> [f32; 4] {
    [v.x, v.y, v.z, w]
}

impl FrameUniforms {
    pub fn new(camera: &Camera, lights: &LightRig, encode_srgb: bool) -> Self {
        let view = camera.view_matrix();
        let view_proj = camera.projection_matrix() * view;
        // rows of the view rotation are the camera axes in world space
        let right = Vec3::new(view.x_axis.x, view.y_axis.x, view.z_axis.x);
        let up = Vec3::new(view.x_axis.y, view.y_axis.y, view.z_axis.y);
        let sprite_scale = (camera.fovy_radians * 0.5).tan();

        let dirs = lights.directionals();
        let spot = &lights.spot;
        let (cos_inner, cos_outer) = spot.cone_cosines();
        let spot_dir = (spot.target - spot.position).normalize_or_zero();

        Self {
            view_proj: view_proj.to_cols_array_2d(),
            camera_pos: rgb_w(camera.eye, sprite_scale),
            ambient: rgb_w(lights.ambient.color * lights.ambient.intensity, 0.0),
            dir_dirs: dirs.map(|d| rgb_w(d.direction(), 0.0)),
            dir_colors: dirs.map(|d| rgb_w(d.color * d.intensity, 0.0)),
            spot_pos: rgb_w(spot.position, spot.distance),
            spot_dir: rgb_w(spot_dir, spot.decay),
            spot_color: rgb_w(spot.color * spot.intensity, 0.0),
            spot_cone: [cos_inner, cos_outer, 0.0, 0.0],
            fog: rgb_w(hex_to_linear(FOG_COLOR), FOG_DENSITY),
            output: [EXPOSURE, if encode_srgb { 1.0 } else { 0.0 }, 0.0, 0.0],
            camera_right: rgb_w(right, 0.0),
            camera_up: rgb_w(up, 0.0),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniforms {
    pub model: [[f32; 4]; 4],
    pub normal_mat: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub emissive: [f32; 4],
    pub surface: [f32; 4],
}

impl ObjectUniforms {
    pub fn new(model: Mat4, material: &Material) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal_mat: model.inverse().transpose().to_cols_array_2d(),
            color: rgb_w(material.color, material.opacity),
            emissive: rgb_w(material.emissive * material.emissive_intensity, 0.0),
            surface: [
                material.roughness,
                material.metalness,
                if material.map.is_some() { 1.0 } else { 0.0 },
                0.0,
            ],
        }
    }
}

/// One mesh draw, resolved from the scene for this frame.
#[derive(Clone, Debug)]
pub struct MeshDraw {
    pub geometry: GeometryId,
    pub texture: Option<usize>,
    pub transparent: bool,
    pub uniforms: ObjectUniforms,
}

/// Every mesh node whose geometry and material resolve, opaque ones first.
pub fn mesh_draws(scene: &Scene, world: &[Mat4]) -> Vec<MeshDraw> {
    let mut draws: Vec<MeshDraw> = scene
        .nodes()
        .filter_map(|(id, node)| {
            let Some(Drawable::Mesh { geometry, material }) = node.drawable() else {
                return None;
            };
            scene.geometries().get(geometry.index())?;
            let material = scene.material(material)?;
            let model = *world.get(id.index())?;
            Some(MeshDraw {
                geometry,
                texture: material.map.map(|t| t.index()),
                transparent: material.is_transparent(),
                uniforms: ObjectUniforms::new(model, material),
            })
        })
        .collect();
    // stable, so scene order is kept within each group
    draws.sort_by_key(|d| d.transparent);
    draws
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub pos_size: [f32; 4],
    pub color: [f32; 4],
}

/// All visible sprites in world space, alpha-blended ones first.
#[derive(Clone, Debug, Default)]
pub struct PointBatches {
    pub instances: Vec<PointInstance>,
    pub alpha: Range<u32>,
    pub additive: Range<u32>,
}

pub fn point_batches(scene: &Scene, world: &[Mat4]) -> PointBatches {
    let mut alpha = Vec::new();
    let mut additive = Vec::new();
    for (id, node) in scene.nodes() {
        let Some(Drawable::Points(field_id)) = node.drawable() else {
            continue;
        };
        let (Some(field), Some(model)) = (scene.point_field(field_id), world.get(id.index()))
        else {
            continue;
        };
        let out = match field.blend {
            Blend::Alpha => &mut alpha,
            Blend::Additive => &mut additive,
        };
        out.extend(field.drawn().iter().map(|p| {
            let w = model.transform_point3(*p);
            PointInstance {
                pos_size: [w.x, w.y, w.z, field.size],
                color: rgb_w(field.color, field.opacity),
            }
        }));
    }
    let split = alpha.len() as u32;
    let total = split + additive.len() as u32;
    alpha.extend(additive);
    PointBatches {
        instances: alpha,
        alpha: 0..split,
        additive: split..total,
    }
}
