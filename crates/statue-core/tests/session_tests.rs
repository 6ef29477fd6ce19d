// End-to-end tests driving a whole session without a GPU.

use glam::Vec2;
use statue_core::constants::ENTRANCE_FROM_X;
use statue_core::tween::SurfaceParams;
use statue_core::{Breakpoint, Session, SessionParams};

fn session(width: u32, height: u32) -> Session {
    Session::new(SessionParams {
        seed: 7,
        width,
        height,
    })
    .expect("session")
}

fn root_pos(s: &Session) -> glam::Vec3 {
    s.scene.node(s.statue.root).expect("root").transform.position
}

fn skin(s: &Session) -> SurfaceParams {
    SurfaceParams::of(s.scene.material(s.statue.materials.skin).expect("skin"))
}

#[test]
fn default_params() {
    let p = SessionParams::default();
    assert_eq!(p.seed, 42);
    assert_eq!((p.width, p.height), (1280, 720));
}

#[test]
fn desktop_session_places_statue_right() {
    let s = session(1920, 1080);
    assert_eq!(s.placement().breakpoint, Breakpoint::Landscape);
    let root = s.scene.node(s.statue.root).expect("root");
    assert_eq!(root.transform.scale.x, 1.0);
    assert!((root.transform.rotation.y - -0.6).abs() < 1e-6);
    let expected_x = 2.0 * 7.0 * 20f32.to_radians().tan() * (1920.0 / 1080.0) * 0.32;
    assert!((root.transform.position.x - expected_x).abs() < 1e-4);
    assert!((s.camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
}

#[test]
fn phone_session_places_statue_low() {
    let s = session(375, 812);
    let root = s.scene.node(s.statue.root).expect("root");
    assert_eq!(root.transform.scale.x, 0.45);
    assert_eq!(root.transform.position.to_array(), [0.0, -1.8, -1.0]);
    assert!((root.transform.rotation.y - -0.2).abs() < 1e-6);
}

#[test]
fn resize_switches_breakpoint() {
    let mut s = session(1920, 1080);
    s.resize(375, 812);
    assert_eq!(s.placement().breakpoint, Breakpoint::Portrait);
    assert_eq!(s.viewport.width, 375);
    assert_eq!(root_pos(&s).to_array(), [0.0, -1.8, -1.0]);
    s.resize(1100, 1000);
    assert_eq!(s.placement().breakpoint, Breakpoint::NearSquare);
    let scale = s.scene.node(s.statue.root).expect("root").transform.scale.x;
    assert_eq!(scale, 0.8);
}

#[test]
fn pointer_is_normalized_against_viewport() {
    let mut s = session(1000, 500);
    s.pointer_moved(1000.0, 0.0);
    assert_eq!(s.pointer.normalized, Vec2::new(1.0, 1.0));
    s.pointer_moved(500.0, 250.0);
    assert_eq!(s.pointer.normalized, Vec2::ZERO);
    s.pointer_moved(0.0, 500.0);
    assert_eq!(s.pointer.normalized, Vec2::new(-1.0, -1.0));
}

#[test]
fn hover_turns_skin_gold_and_back() {
    let mut s = session(1280, 720);
    let rest = skin(&s);
    s.tick(0.0);
    s.set_cta_hovered(true, 0.0);
    s.tick(1.5);
    let gold = skin(&s);
    assert!((gold.metalness - 1.0).abs() < 1e-5);
    assert!((gold.roughness - 0.1).abs() < 1e-5);
    assert!((gold.color.y - 0.84).abs() < 1e-5);

    s.set_cta_hovered(false, 2.0);
    s.tick(3.5);
    let back = skin(&s);
    assert!((back.metalness - rest.metalness).abs() < 1e-5);
    assert!((back.roughness - rest.roughness).abs() < 1e-5);
    assert!((back.color - rest.color).abs().max_element() < 1e-5);
}

#[test]
fn pulse_pauses_while_gold() {
    let mut s = session(1280, 720);
    s.set_cta_hovered(true, 0.0);
    s.tick(0.5);
    let emissive = |s: &Session| {
        s.scene
            .material(s.statue.materials.skin)
            .expect("skin")
            .emissive_intensity
    };
    let held = emissive(&s);
    s.tick(1.0);
    s.tick(2.0);
    assert_eq!(emissive(&s), held);
    s.set_cta_hovered(false, 2.0);
    s.tick(4.0);
    let resumed = statue_core::animate::pulse_intensity(4.0);
    assert!((emissive(&s) - resumed).abs() < 1e-6);
}

#[test]
fn entrance_slides_in_from_the_right() {
    let mut s = session(1920, 1080);
    let home = s.placement().position.x;
    s.begin_entrance(1.0);
    assert!(s.entrance_active());
    assert_eq!(s.scene.node(s.statue.root).expect("root").transform.rotation.y, 0.0);

    s.tick(1.05);
    assert!((root_pos(&s).x - ENTRANCE_FROM_X).abs() < 1e-5);

    s.tick(2.0);
    let mid = root_pos(&s).x;
    assert!(mid < ENTRANCE_FROM_X && mid > home);

    s.tick(3.0);
    assert!(!s.entrance_active());
    assert!((root_pos(&s).x - home).abs() < 1e-6);
}

#[test]
fn long_run_keeps_invariants() {
    let mut s = session(1280, 720);
    s.begin_entrance(0.0);
    for i in 0..400 {
        let t = i as f32 / 60.0;
        s.pointer_moved((i * 7 % 1280) as f32, (i * 3 % 720) as f32);
        if i == 100 {
            s.set_cta_hovered(true, t);
        }
        if i == 110 {
            s.set_cta_hovered(false, t);
        }
        s.tick(t);
        assert!(s.animator().trail().len() <= 100);
    }
    assert!(s.animator().trail().len() == 100);
    let p = root_pos(&s);
    assert!(p.is_finite());
    // bob never drifts away from the placement
    assert!((p.y - s.placement().position.y).abs() <= 0.14);
}
