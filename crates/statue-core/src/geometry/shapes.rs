use super::{CatmullRom, MeshData};
use glam::{Quat, Vec2, Vec3};
use std::f32::consts::{PI, TAU};

pub(super) fn sphere(
    radius: f32,
    width_segments: u32,
    height_segments: u32,
    (phi_start, phi_length): (f32, f32),
    (theta_start, theta_length): (f32, f32),
) -> MeshData {
    let mut mesh = MeshData::default();
    let theta_end = (theta_start + theta_length).min(PI);
    let row = width_segments + 1;

    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let theta = theta_start + v * theta_length;
        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let phi = phi_start + u * phi_length;
            let dir = Vec3::new(-phi.cos() * theta.sin(), theta.cos(), phi.sin() * theta.sin());
            mesh.push(dir * radius, dir, Vec2::new(u, 1.0 - v));
        }
    }

    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // skip the degenerate triangles that collapse onto a pole
            if iy != 0 || theta_start > 0.0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 || theta_end < PI {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

pub(super) fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height * 0.5;
    let slope = if height.abs() > f32::EPSILON {
        (radius_bottom - radius_top) / height
    } else {
        0.0
    };

    for y in 0..=1u32 {
        let v = y as f32;
        let radius = v * (radius_bottom - radius_top) + radius_top;
        for x in 0..=radial {
            let u = x as f32 / radial as f32;
            let (sin, cos) = (u * TAU).sin_cos();
            let normal = Vec3::new(sin, slope, cos).normalize();
            mesh.push(
                Vec3::new(radius * sin, -v * height + half, radius * cos),
                normal,
                Vec2::new(u, 1.0 - v),
            );
        }
    }
    let row = radial + 1;
    for x in 0..radial {
        let a = x;
        let b = row + x;
        let c = row + x + 1;
        let d = x + 1;
        mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }

    if radius_top > 0.0 {
        cap(&mut mesh, radius_top, half, radial);
    }
    if radius_bottom > 0.0 {
        cap(&mut mesh, radius_bottom, -half, radial);
    }
    mesh
}

fn cap(mesh: &mut MeshData, radius: f32, y: f32, radial: u32) {
    let normal = Vec3::new(0.0, y.signum(), 0.0);
    let center = mesh.vertices.len() as u32;
    mesh.push(Vec3::new(0.0, y, 0.0), normal, Vec2::splat(0.5));
    for x in 0..=radial {
        let (sin, cos) = (x as f32 / radial as f32 * TAU).sin_cos();
        mesh.push(
            Vec3::new(radius * sin, y, radius * cos),
            normal,
            Vec2::new(cos * 0.5 + 0.5, sin * 0.5 + 0.5),
        );
    }
    for x in 0..radial {
        let i = center + 1 + x;
        if y > 0.0 {
            mesh.indices.extend_from_slice(&[i, i + 1, center]);
        } else {
            mesh.indices.extend_from_slice(&[i + 1, i, center]);
        }
    }
}

pub(super) fn torus(radius: f32, tube: f32, radial: u32, tubular: u32, arc: f32) -> MeshData {
    let mut mesh = MeshData::default();
    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * arc;
            let ring = radius + tube * v.cos();
            let position = Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let normal = (position - center).try_normalize().unwrap_or(Vec3::Z);
            mesh.push(
                position,
                normal,
                Vec2::new(i as f32 / tubular as f32, j as f32 / radial as f32),
            );
        }
    }
    let row = tubular + 1;
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

pub(super) fn lathe(profile: &[Vec2], segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let n = profile.len();
    if n < 2 {
        return mesh;
    }

    // 2D outward normal per profile sample from its neighbouring tangent
    let profile_normals: Vec<Vec2> = (0..n)
        .map(|j| {
            let prev = profile[j.saturating_sub(1)];
            let next = profile[(j + 1).min(n - 1)];
            let t = next - prev;
            Vec2::new(t.y, -t.x).try_normalize().unwrap_or(Vec2::X)
        })
        .collect();

    for i in 0..=segments {
        let u = i as f32 / segments as f32;
        let (sin, cos) = (u * TAU).sin_cos();
        for (j, (p, pn)) in profile.iter().zip(&profile_normals).enumerate() {
            mesh.push(
                Vec3::new(p.x * sin, p.y, p.x * cos),
                Vec3::new(pn.x * sin, pn.y, pn.x * cos),
                Vec2::new(u, j as f32 / (n - 1) as f32),
            );
        }
    }

    let n = n as u32;
    for i in 0..segments {
        for j in 0..n - 1 {
            let base = j + i * n;
            let a = base;
            let b = base + n;
            let c = base + n + 1;
            let d = base + 1;
            mesh.indices.extend_from_slice(&[a, b, d, c, d, b]);
        }
    }
    mesh
}

pub(super) fn tube(path: &CatmullRom, tubular: u32, radius: f32, radial: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let (normals, binormals) = transport_frames(path, tubular);

    for i in 0..=tubular {
        let t = i as f32 / tubular as f32;
        let p = path.point_at(t);
        let (n, b) = (normals[i as usize], binormals[i as usize]);
        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            let normal = (n * -v.cos() + b * v.sin()).normalize();
            mesh.push(p + normal * radius, normal, Vec2::new(t, j as f32 / radial as f32));
        }
    }

    let row = radial + 1;
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = row * (i - 1) + (j - 1);
            let b = row * i + (j - 1);
            let c = row * i + j;
            let d = row * (i - 1) + j;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

// Parallel-transport frames: no twisting along a gently bending path.
fn transport_frames(path: &CatmullRom, segments: u32) -> (Vec<Vec3>, Vec<Vec3>) {
    let tangents: Vec<Vec3> = (0..=segments)
        .map(|i| path.tangent_at(i as f32 / segments as f32))
        .collect();

    let t0 = tangents[0];
    let axis = if t0.x.abs() <= t0.y.abs() && t0.x.abs() <= t0.z.abs() {
        Vec3::X
    } else if t0.y.abs() <= t0.z.abs() {
        Vec3::Y
    } else {
        Vec3::Z
    };
    let side = t0.cross(axis).normalize();
    let mut normals = vec![t0.cross(side)];
    let mut binormals = vec![t0.cross(normals[0])];

    for i in 1..tangents.len() {
        let mut n = normals[i - 1];
        let axis = tangents[i - 1].cross(tangents[i]);
        if axis.length() > f32::EPSILON {
            let angle = tangents[i - 1].dot(tangents[i]).clamp(-1.0, 1.0).acos();
            n = Quat::from_axis_angle(axis.normalize(), angle) * n;
        }
        binormals.push(tangents[i].cross(n));
        normals.push(n);
    }
    (normals, binormals)
}

pub(super) fn plane(width: f32, height: f32) -> MeshData {
    let mut mesh = MeshData::default();
    let (hw, hh) = (width * 0.5, height * 0.5);
    mesh.push(Vec3::new(-hw, hh, 0.0), Vec3::Z, Vec2::new(0.0, 1.0));
    mesh.push(Vec3::new(hw, hh, 0.0), Vec3::Z, Vec2::new(1.0, 1.0));
    mesh.push(Vec3::new(-hw, -hh, 0.0), Vec3::Z, Vec2::new(0.0, 0.0));
    mesh.push(Vec3::new(hw, -hh, 0.0), Vec3::Z, Vec2::new(1.0, 0.0));
    mesh.indices.extend_from_slice(&[0, 2, 1, 2, 3, 1]);
    mesh
}
