// CPU-side tests for draw lists and uniform packing; no GPU required.

use glam::{Mat4, Vec2, Vec3};
use rand::{rngs::StdRng, SeedableRng};
use statue_core::lights::LightRig;
use statue_core::render::{mesh_draws, point_batches, FrameUniforms, ObjectUniforms};
use statue_core::scene::{Drawable, Material, Scene};
use statue_core::state::{normalize_pointer, Camera};
use statue_core::statue::build;
use statue_core::{Session, SessionParams};

#[test]
fn opaque_meshes_draw_before_transparent() {
    let mut scene = Scene::new();
    build(&mut scene, &mut StdRng::seed_from_u64(1)).expect("build");
    let world = scene.world_matrices();
    let draws = mesh_draws(&scene, &world);
    assert!(!draws.is_empty());
    let first_transparent = draws
        .iter()
        .position(|d| d.transparent)
        .expect("halo rings are transparent");
    assert!(draws[first_transparent..].iter().all(|d| d.transparent));
    // two halo rings
    assert_eq!(draws.len() - first_transparent, 2);
    assert!(draws.iter().any(|d| d.texture == Some(0)));
}

#[test]
fn open_dress_draws_as_an_opaque_mesh() {
    let mut scene = Scene::new();
    let handles = build(&mut scene, &mut StdRng::seed_from_u64(3)).expect("build");
    let Some(Drawable::Mesh { geometry, .. }) = scene.node(handles.dress).and_then(|n| n.drawable())
    else {
        panic!("dress is not a mesh");
    };
    let world = scene.world_matrices();
    let draws = mesh_draws(&scene, &world);
    let dress: Vec<_> = draws.iter().filter(|d| d.geometry == geometry).collect();
    assert_eq!(dress.len(), 1);
    assert!(!dress[0].transparent);
}

#[test]
fn point_batches_split_by_blend() {
    let mut scene = Scene::new();
    build(&mut scene, &mut StdRng::seed_from_u64(2)).expect("build");
    let world = scene.world_matrices();
    let batches = point_batches(&scene, &world);
    // dust is alpha blended; sparkles add; the trail is still empty
    assert_eq!(batches.alpha, 0..200);
    assert_eq!(batches.additive, 200..280);
    assert_eq!(batches.instances.len(), 280);
    assert!(batches.instances[..200]
        .iter()
        .all(|p| p.pos_size[3] == 0.015 && p.color[3] == 0.2));
}

#[test]
fn trail_sprites_appear_after_ticks() {
    let mut s = Session::new(SessionParams::default()).expect("session");
    for i in 0..10 {
        s.tick(i as f32 / 60.0);
    }
    let world = s.scene.world_matrices();
    let batches = point_batches(&s.scene, &world);
    assert_eq!(batches.additive.len(), 80 + 10);
}

#[test]
fn frame_uniforms_pack_camera_and_output() {
    let camera = Camera::default();
    let u = FrameUniforms::new(&camera, &LightRig::default(), true);
    assert!((u.camera_pos[3] - 20f32.to_radians().tan()).abs() < 1e-5);
    assert_eq!(u.camera_pos[..3], [0.0, 0.5, 7.0]);
    assert_eq!(u.output[0], 1.25);
    assert_eq!(u.output[1], 1.0);
    assert_eq!(u.fog[3], 0.04);
    let right = Vec3::from_slice(&u.camera_right[..3]);
    let up = Vec3::from_slice(&u.camera_up[..3]);
    assert!((right - Vec3::X).length() < 1e-5);
    assert!(right.dot(up).abs() < 1e-5);
    let linear = FrameUniforms::new(&camera, &LightRig::default(), false);
    assert_eq!(linear.output[1], 0.0);
}

#[test]
fn spot_cone_is_ordered() {
    let u = FrameUniforms::new(&Camera::default(), &LightRig::default(), false);
    let [inner, outer, ..] = u.spot_cone;
    assert!(inner > outer);
    assert!(outer > 0.0);
}

#[test]
fn object_uniforms_carry_material() {
    let material = Material::standard(0xffffff)
        .with_roughness(0.3)
        .with_metalness(0.6)
        .with_opacity(0.5);
    let u = ObjectUniforms::new(Mat4::from_translation(Vec3::X), &material);
    assert_eq!(u.color[3], 0.5);
    assert_eq!(u.surface[..3], [0.3, 0.6, 0.0]);
    assert_eq!(u.model[3][..3], [1.0, 0.0, 0.0]);
}

#[test]
fn pointer_normalization() {
    assert_eq!(normalize_pointer(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(normalize_pointer(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
    assert_eq!(normalize_pointer(-50.0, 900.0, 800.0, 600.0), Vec2::new(-1.0, -1.0));
    assert_eq!(normalize_pointer(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
}
