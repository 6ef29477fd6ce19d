// Integration tests for the procedural marble map.

use rand::{rngs::StdRng, SeedableRng};
use statue_core::texture::{marble, BASE_TONE, VEIN_TONE};

#[test]
fn always_512_square() {
    for seed in 0..4 {
        let img = marble(&mut StdRng::seed_from_u64(seed));
        assert_eq!(img.dimensions(), (512, 512));
    }
}

#[test]
fn deterministic_per_seed() {
    let a = marble(&mut StdRng::seed_from_u64(11));
    let b = marble(&mut StdRng::seed_from_u64(11));
    let c = marble(&mut StdRng::seed_from_u64(12));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn mostly_base_tone_with_faint_veins() {
    let img = marble(&mut StdRng::seed_from_u64(3));
    let base = [BASE_TONE[0], BASE_TONE[1], BASE_TONE[2], 255];
    let untouched = img.pixels().filter(|p| p.0 == base).count();
    let total = (img.width() * img.height()) as usize;
    assert!(untouched > total / 2, "only {untouched} base pixels");
    assert!(untouched < total, "no veins drawn");
}

#[test]
fn pixels_stay_between_base_and_vein_tones() {
    let img = marble(&mut StdRng::seed_from_u64(5));
    for p in img.pixels() {
        assert_eq!(p.0[3], 255);
        for c in 0..3 {
            let lo = BASE_TONE[c].min(VEIN_TONE[c]);
            let hi = BASE_TONE[c].max(VEIN_TONE[c]);
            assert!((lo..=hi).contains(&p.0[c]));
        }
    }
}
