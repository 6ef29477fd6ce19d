// Integration tests for the responsive layout resolver.

use statue_core::constants::{CAMERA_FOV_DEG, STATUE_DEPTH};
use statue_core::layout::{apply, breakpoint, resolve, visible_height, Breakpoint};
use statue_core::scene::{Node, Scene};

#[test]
fn breakpoints_follow_aspect_thresholds() {
    assert_eq!(breakpoint(0.46), Breakpoint::Portrait);
    assert_eq!(breakpoint(0.999), Breakpoint::Portrait);
    assert_eq!(breakpoint(1.0), Breakpoint::NearSquare);
    assert_eq!(breakpoint(1.3), Breakpoint::NearSquare);
    assert_eq!(breakpoint(1.4), Breakpoint::Landscape);
    assert_eq!(breakpoint(2.4), Breakpoint::Landscape);
}

#[test]
fn scales_per_breakpoint() {
    assert_eq!(resolve(500, 1000, CAMERA_FOV_DEG, STATUE_DEPTH).scale, 0.45);
    assert_eq!(resolve(1000, 1000, CAMERA_FOV_DEG, STATUE_DEPTH).scale, 0.8);
    assert_eq!(resolve(1300, 1000, CAMERA_FOV_DEG, STATUE_DEPTH).scale, 0.8);
    assert_eq!(resolve(1400, 1000, CAMERA_FOV_DEG, STATUE_DEPTH).scale, 1.0);
}

#[test]
fn desktop_full_hd_is_offset_right() {
    let p = resolve(1920, 1080, 40.0, 7.0);
    assert_eq!(p.breakpoint, Breakpoint::Landscape);
    assert_eq!(p.scale, 1.0);
    assert!((p.yaw - -0.6).abs() < 1e-6);
    let expected_x = 2.0 * 7.0 * 20f32.to_radians().tan() * (1920.0 / 1080.0) * 0.32;
    assert!((p.position.x - expected_x).abs() < 1e-4, "x = {}", p.position.x);
    assert!((p.position.y - -0.6).abs() < 1e-6);
    assert_eq!(p.position.z, 0.0);
}

#[test]
fn phone_portrait_is_low_and_back() {
    let p = resolve(375, 812, 40.0, 7.0);
    assert_eq!(p.breakpoint, Breakpoint::Portrait);
    assert_eq!(p.scale, 0.45);
    assert_eq!(p.position.to_array(), [0.0, -1.8, -1.0]);
    assert!((p.yaw - -0.2).abs() < 1e-6);
}

#[test]
fn square_viewport_scales_near_square_but_stays_centred() {
    let p = resolve(1000, 1000, 40.0, 7.0);
    assert_eq!(p.breakpoint, Breakpoint::NearSquare);
    assert_eq!(p.scale, 0.8);
    assert_eq!(p.position.to_array(), [0.0, -1.8, -1.0]);
    assert!((p.yaw - -0.2).abs() < 1e-6);

    let wider = resolve(1001, 1000, 40.0, 7.0);
    assert!(wider.position.x > 0.0);
    assert!((wider.yaw - -0.6).abs() < 1e-6);
}

#[test]
fn resolve_is_idempotent() {
    let a = resolve(1280, 720, 40.0, 7.0);
    let b = resolve(1280, 720, 40.0, 7.0);
    assert_eq!(a, b);
}

#[test]
fn zero_height_does_not_panic() {
    let p = resolve(800, 0, 40.0, 7.0);
    assert!(p.position.is_finite());
}

#[test]
fn visible_height_at_statue_depth() {
    let h = visible_height(40.0, 7.0);
    assert!((h - 5.0956).abs() < 1e-3, "h = {h}");
}

#[test]
fn apply_writes_root_transform() {
    let mut scene = Scene::new();
    let root = scene
        .add_node(scene.root(), Node::group("statue"))
        .expect("attach");
    let p = resolve(375, 812, 40.0, 7.0);
    apply(&mut scene, root, &p);
    let tf = scene.node(root).expect("node").transform;
    assert_eq!(tf.scale.to_array(), [0.45, 0.45, 0.45]);
    assert_eq!(tf.position, p.position);
    assert_eq!(tf.rotation.y, p.yaw);
}
