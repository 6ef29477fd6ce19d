// Integration tests for primitive tessellation.

use glam::{Vec2, Vec3};
use statue_core::geometry::{CatmullRom, MeshData, Primitive};
use std::f32::consts::PI;

fn assert_well_formed(mesh: &MeshData) {
    assert!(!mesh.vertices.is_empty());
    assert_eq!(mesh.indices.len() % 3, 0);
    let n = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|i| *i < n), "index out of range");
    for v in &mesh.vertices {
        let normal = Vec3::from(v.normal);
        assert!(normal.is_finite());
        assert!((normal.length() - 1.0).abs() < 1e-3, "normal {normal}");
    }
}

fn max_radius_xz(mesh: &MeshData) -> f32 {
    mesh.vertices
        .iter()
        .map(|v| Vec2::new(v.position[0], v.position[2]).length())
        .fold(0.0, f32::max)
}

#[test]
fn sphere_vertices_sit_on_radius() {
    let mesh = Primitive::sphere(0.35, 32, 32).tessellate();
    assert_well_formed(&mesh);
    assert_eq!(mesh.vertices.len(), 33 * 33);
    for v in &mesh.vertices {
        assert!((Vec3::from(v.position).length() - 0.35).abs() < 1e-5);
    }
    // pole rows contribute one triangle per quad
    assert_eq!(mesh.triangle_count(), 32 * 32 * 2 - 2 * 32);
}

#[test]
fn dome_stops_above_the_equator() {
    let mesh = Primitive::dome(0.36, 24, 24, PI * 0.48).tessellate();
    assert_well_formed(&mesh);
    let min_y = mesh
        .vertices
        .iter()
        .map(|v| v.position[1])
        .fold(f32::MAX, f32::min);
    assert!(min_y > 0.0, "dome reaches y = {min_y}");
}

#[test]
fn cylinder_spans_height_along_y() {
    let mesh = Primitive::cylinder(0.12, 0.14, 0.35, 24).tessellate();
    assert_well_formed(&mesh);
    let ys: Vec<f32> = mesh.vertices.iter().map(|v| v.position[1]).collect();
    let max = ys.iter().copied().fold(f32::MIN, f32::max);
    let min = ys.iter().copied().fold(f32::MAX, f32::min);
    assert!((max - 0.175).abs() < 1e-6);
    assert!((min + 0.175).abs() < 1e-6);
    assert!((max_radius_xz(&mesh) - 0.14).abs() < 1e-5);
}

#[test]
fn cone_has_no_top_cap() {
    let cone = Primitive::cone(0.035, 0.18, 16).tessellate();
    let capped = Primitive::cylinder(0.035, 0.035, 0.18, 16).tessellate();
    assert_well_formed(&cone);
    assert!(cone.vertices.len() < capped.vertices.len());
}

#[test]
fn torus_lies_in_xy_plane() {
    let mesh = Primitive::torus(0.55, 0.005, 8, 50).tessellate();
    assert_well_formed(&mesh);
    for v in &mesh.vertices {
        assert!(v.position[2].abs() <= 0.005 + 1e-6);
        let r = Vec2::new(v.position[0], v.position[1]).length();
        assert!((r - 0.55).abs() <= 0.005 + 1e-5);
    }
}

#[test]
fn partial_torus_covers_only_its_arc() {
    let mesh = Primitive::torus_arc(0.06, 0.004, 4, 16, 2.0).tessellate();
    assert_well_formed(&mesh);
    for v in &mesh.vertices {
        let angle = v.position[1].atan2(v.position[0]);
        assert!((-1e-3..=2.0 + 1e-3).contains(&angle), "angle {angle}");
    }
}

#[test]
fn lathe_revolves_profile() {
    let profile = vec![Vec2::new(0.6, -1.0), Vec2::new(0.3, 0.0), Vec2::new(0.2, 1.0)];
    let mesh = Primitive::lathe(profile, 32).tessellate();
    assert_well_formed(&mesh);
    assert_eq!(mesh.vertices.len(), 33 * 3);
    assert_eq!(mesh.triangle_count(), 32 * 2 * 2);
    assert!((max_radius_xz(&mesh) - 0.6).abs() < 1e-5);
}

#[test]
fn lathe_with_short_profile_is_empty() {
    let mesh = Primitive::lathe(vec![Vec2::new(1.0, 0.0)], 8).tessellate();
    assert!(mesh.vertices.is_empty());
    assert!(mesh.indices.is_empty());
}

#[test]
fn curve_passes_through_endpoints() {
    let pts = vec![
        Vec3::ZERO,
        Vec3::new(0.22, -0.35, 0.15),
        Vec3::new(0.08, -0.55, 0.35),
    ];
    let curve = CatmullRom::new(pts.clone());
    assert!((curve.point_at(0.0) - pts[0]).length() < 1e-5);
    assert!((curve.point_at(0.5) - pts[1]).length() < 1e-5);
    assert!((curve.point_at(1.0) - pts[2]).length() < 1e-5);
    assert!((curve.tangent_at(0.3).length() - 1.0).abs() < 1e-4);
}

#[test]
fn tube_surrounds_its_path() {
    let curve = CatmullRom::new(vec![
        Vec3::ZERO,
        Vec3::new(-0.22, -0.35, 0.1),
        Vec3::new(-0.15, -0.55, 0.3),
    ]);
    let mesh = Primitive::tube(curve.clone(), 12, 0.07, 8).tessellate();
    assert_well_formed(&mesh);
    assert_eq!(mesh.vertices.len(), 13 * 9);
    for (i, ring) in mesh.vertices.chunks(9).enumerate() {
        let center = curve.point_at(i as f32 / 12.0);
        for v in ring {
            let d = (Vec3::from(v.position) - center).length();
            assert!((d - 0.07).abs() < 1e-4, "ring {i} offset {d}");
        }
    }
}

#[test]
fn plane_faces_z() {
    let mesh = Primitive::plane(40.0, 40.0).tessellate();
    assert_well_formed(&mesh);
    assert_eq!(mesh.triangle_count(), 2);
    assert!(mesh.vertices.iter().all(|v| v.normal == [0.0, 0.0, 1.0]));
}

#[test]
fn degenerate_segment_counts_are_clamped() {
    let mesh = Primitive::sphere(1.0, 0, 0).tessellate();
    assert_well_formed(&mesh);
    let mesh = Primitive::torus(1.0, 0.1, 0, 0).tessellate();
    assert_well_formed(&mesh);
}
