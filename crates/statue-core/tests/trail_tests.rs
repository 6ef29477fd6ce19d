// Integration tests for the bounded brush trail.

use glam::Vec3;
use statue_core::trail::TrailBuffer;

#[test]
fn starts_empty() {
    let trail = TrailBuffer::new(100);
    assert!(trail.is_empty());
    assert_eq!(trail.front(), None);
}

#[test]
fn most_recent_first() {
    let mut trail = TrailBuffer::new(100);
    for i in 0..5 {
        trail.push(Vec3::splat(i as f32));
    }
    let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![4.0, 3.0, 2.0, 1.0, 0.0]);
}

#[test]
fn never_exceeds_capacity() {
    let mut trail = TrailBuffer::new(100);
    for i in 0..250 {
        trail.push(Vec3::new(i as f32, 0.0, 0.0));
        assert!(trail.len() <= 100);
    }
    assert_eq!(trail.len(), 100);
    assert_eq!(trail.front(), Some(Vec3::new(249.0, 0.0, 0.0)));
    // oldest surviving sample is the 150th push
    assert_eq!(trail.iter().last(), Some(Vec3::new(150.0, 0.0, 0.0)));
}

#[test]
fn copy_into_fills_leading_slots_only() {
    let mut trail = TrailBuffer::new(4);
    trail.push(Vec3::X);
    trail.push(Vec3::Y);
    let mut out = [Vec3::splat(-1.0); 4];
    let n = trail.copy_into(&mut out);
    assert_eq!(n, 2);
    assert_eq!(out[0], Vec3::Y);
    assert_eq!(out[1], Vec3::X);
    assert_eq!(out[2], Vec3::splat(-1.0));
}

#[test]
fn zero_capacity_ignores_pushes() {
    let mut trail = TrailBuffer::new(0);
    trail.push(Vec3::ONE);
    assert!(trail.is_empty());
}
