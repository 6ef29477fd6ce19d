//! Parametric primitive solids and their triangle tessellation.
//!
//! Conventions follow the usual web 3D toolkits so the statue dimensions can
//! be read straight off the design: cylinders and cones stand along +Y and are
//! centred on the origin, tori lie in the XY plane, lathes revolve a profile
//! around Y and planes face +Z.

use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

mod curve;
mod shapes;

pub use curve::CatmullRom;

/// Interleaved vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub(crate) fn push(&mut self, position: Vec3, normal: Vec3, uv: Vec2) {
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
        });
    }
}

/// Immutable shape description. Generated once at build time.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
        phi_start: f32,
        phi_length: f32,
        theta_start: f32,
        theta_length: f32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
        arc: f32,
    },
    Lathe {
        profile: Vec<Vec2>,
        segments: u32,
    },
    Tube {
        path: CatmullRom,
        tubular_segments: u32,
        radius: f32,
        radial_segments: u32,
    },
    Plane {
        width: f32,
        height: f32,
    },
}

impl Primitive {
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Primitive::Sphere {
            radius,
            width_segments,
            height_segments,
            phi_start: 0.0,
            phi_length: TAU,
            theta_start: 0.0,
            theta_length: PI,
        }
    }

    /// Upper cap of a sphere down to `theta_length` from the pole.
    pub fn dome(radius: f32, width_segments: u32, height_segments: u32, theta_length: f32) -> Self {
        Primitive::Sphere {
            radius,
            width_segments,
            height_segments,
            phi_start: 0.0,
            phi_length: TAU,
            theta_start: 0.0,
            theta_length,
        }
    }

    pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Self {
        Primitive::Cylinder {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
        }
    }

    pub fn cone(radius: f32, height: f32, radial_segments: u32) -> Self {
        Self::cylinder(0.0, radius, height, radial_segments)
    }

    pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Self {
        Self::torus_arc(radius, tube, radial_segments, tubular_segments, TAU)
    }

    pub fn torus_arc(
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
        arc: f32,
    ) -> Self {
        Primitive::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
            arc,
        }
    }

    pub fn lathe(profile: Vec<Vec2>, segments: u32) -> Self {
        Primitive::Lathe { profile, segments }
    }

    pub fn tube(path: CatmullRom, tubular_segments: u32, radius: f32, radial_segments: u32) -> Self {
        Primitive::Tube {
            path,
            tubular_segments,
            radius,
            radial_segments,
        }
    }

    pub fn plane(width: f32, height: f32) -> Self {
        Primitive::Plane { width, height }
    }

    /// Triangulate into an indexed mesh with normals and UVs.
    pub fn tessellate(&self) -> MeshData {
        match self {
            Primitive::Sphere {
                radius,
                width_segments,
                height_segments,
                phi_start,
                phi_length,
                theta_start,
                theta_length,
            } => shapes::sphere(
                *radius,
                (*width_segments).max(3),
                (*height_segments).max(2),
                (*phi_start, *phi_length),
                (*theta_start, *theta_length),
            ),
            Primitive::Cylinder {
                radius_top,
                radius_bottom,
                height,
                radial_segments,
            } => shapes::cylinder(*radius_top, *radius_bottom, *height, (*radial_segments).max(3)),
            Primitive::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
                arc,
            } => shapes::torus(
                *radius,
                *tube,
                (*radial_segments).max(2),
                (*tubular_segments).max(3),
                *arc,
            ),
            Primitive::Lathe { profile, segments } => shapes::lathe(profile, (*segments).max(3)),
            Primitive::Tube {
                path,
                tubular_segments,
                radius,
                radial_segments,
            } => shapes::tube(
                path,
                (*tubular_segments).max(1),
                *radius,
                (*radial_segments).max(3),
            ),
            Primitive::Plane { width, height } => shapes::plane(*width, *height),
        }
    }
}
