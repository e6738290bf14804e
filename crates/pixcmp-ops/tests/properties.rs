//! Integration tests for comparator properties.

use pixcmp_core::{Bounds, DecodedImage, Rgba64Buffer, RgbaBuffer};
use pixcmp_ops::{
    compare_fast, compare_precise, compare_precise_with, normalize, CompareOptions, OpsError,
};

/// Deterministic pseudo-random canonical image.
fn noise(bounds: Bounds, seed: u64) -> RgbaBuffer {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    let data = (0..bounds.area() * 4)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 56) as u8
        })
        .collect();
    RgbaBuffer::from_raw(bounds, data).unwrap()
}

#[test]
fn identical_images_score_zero() {
    let img = noise(Bounds::new(10, 20, 13, 9), 1);
    assert_eq!(compare_precise(&img, &img), Ok(0));
    assert_eq!(compare_fast(&img, &img), Ok(0));
    assert_eq!(compare_precise(&img, &img.clone()), Ok(0));
}

#[test]
fn identity_at_the_i32_edge_scores_zero() {
    // Rightmost column sits exactly on i32::MAX.
    let img = noise(Bounds::new(i32::MAX - 1, i32::MIN, 2, 3), 10);
    assert_eq!(compare_precise(&img, &img), Ok(0));
    assert_eq!(compare_fast(&img, &img), Ok(0));

    // One column further can no longer be represented as a buffer.
    let past_edge = Bounds::new(i32::MAX, 0, 2, 1);
    assert!(RgbaBuffer::from_raw(past_edge, vec![0; 8]).is_err());
    assert!(Bounds::checked_new(i32::MAX, 0, 2, 1).is_none());
}

#[test]
fn comparators_are_symmetric() {
    let bounds = Bounds::from_size(19, 7);
    let a = noise(bounds, 2);
    let b = noise(bounds, 3);
    assert_eq!(compare_precise(&a, &b), compare_precise(&b, &a));
    assert_eq!(compare_fast(&a, &b), compare_fast(&b, &a));
}

#[test]
fn different_extent_is_rejected() {
    let a = RgbaBuffer::new(2, 2);
    let b = RgbaBuffer::new(3, 3);
    match compare_precise(&a, &b) {
        Err(OpsError::BoundsMismatch { a: ba, b: bb }) => {
            assert_eq!(ba, Bounds::from_size(2, 2));
            assert_eq!(bb, Bounds::from_size(3, 3));
        }
        other => panic!("expected BoundsMismatch, got {other:?}"),
    }
    assert!(compare_fast(&a, &b).is_err());
}

#[test]
fn different_origin_is_rejected() {
    let a = RgbaBuffer::with_bounds(Bounds::new(0, 0, 4, 4));
    let b = RgbaBuffer::with_bounds(Bounds::new(0, 1, 4, 4));
    assert!(matches!(compare_precise(&a, &b), Err(OpsError::BoundsMismatch { .. })));
    assert!(matches!(compare_fast(&a, &b), Err(OpsError::BoundsMismatch { .. })));
}

#[test]
fn normalize_is_idempotent() {
    let mut deep = Rgba64Buffer::new(6, 5);
    deep.set_pixel(5, 4, [0x1234, 0x5678, 0x9abc, 0xdef0]);
    let once = normalize(&deep);
    let twice = normalize(&*once);
    assert_eq!(once.as_bytes(), twice.as_bytes());
    assert_eq!(once.bounds(), twice.bounds());
}

#[test]
fn normalize_preserves_precise_score_of_byte_data() {
    // Deep buffers whose channels are exact byte expansions survive the
    // round trip through normalize unchanged.
    let bounds = Bounds::from_size(4, 4);
    let a = noise(bounds, 4);
    let b = noise(bounds, 5);
    let deep_a = Rgba64Buffer::from_raw(
        bounds,
        a.as_bytes().iter().map(|&v| v as u16 * 257).collect(),
    )
    .unwrap();
    let deep_b = Rgba64Buffer::from_raw(
        bounds,
        b.as_bytes().iter().map(|&v| v as u16 * 257).collect(),
    )
    .unwrap();

    let direct = compare_precise(&deep_a, &deep_b).unwrap();
    let via_canonical = compare_precise(&*normalize(&deep_a), &*normalize(&deep_b)).unwrap();
    assert_eq!(direct, via_canonical);
}

#[test]
fn larger_difference_never_scores_lower() {
    let bounds = Bounds::from_size(8, 8);
    let base = RgbaBuffer::filled(bounds, [0, 0, 0, 255]);
    let mut prev = (0, 0);
    for v in (0..=255u8).step_by(15) {
        let mut other = base.clone();
        other.set_pixel(4, 4, [v, 0, 0, 255]);
        let scores = (
            compare_precise(&base, &other).unwrap(),
            compare_fast(&base, &other).unwrap(),
        );
        assert!(scores.0 >= prev.0 && scores.1 >= prev.1);
        prev = scores;
    }
}

#[test]
fn black_vs_white_golden_scores() {
    let bounds = Bounds::from_size(2, 2);
    let black = RgbaBuffer::filled(bounds, [0, 0, 0, 255]);
    let white = RgbaBuffer::filled(bounds, [255, 255, 255, 255]);
    assert_eq!(compare_precise(&black, &white), Ok(113_509));
    assert_eq!(compare_fast(&black, &white), Ok(883));
}

#[test]
fn precise_and_fast_use_different_scales() {
    let bounds = Bounds::from_size(16, 16);
    let a = noise(bounds, 6);
    let b = noise(bounds, 7);
    let precise = compare_precise(&a, &b).unwrap();
    let fast = compare_fast(&a, &b).unwrap();
    // Roughly 257/2 apart; only the ordering of magnitudes is asserted.
    assert!(precise > fast * 100);
    assert!(precise < fast * 150);
}

#[test]
fn alpha_option_only_affects_precise() {
    let bounds = Bounds::from_size(3, 3);
    let a = RgbaBuffer::filled(bounds, [0, 0, 0, 0]);
    let b = RgbaBuffer::filled(bounds, [0, 0, 0, 255]);
    let no_alpha = CompareOptions::new().with_alpha(false);
    assert_eq!(compare_precise_with(&a, &b, &no_alpha), Ok(0));
    assert!(compare_precise(&a, &b).unwrap() > 0);
    // The byte scan has no notion of channels and always counts alpha.
    assert_eq!(compare_fast(&a, &b), Ok(765));
}

#[test]
fn trait_objects_are_accepted() {
    let bounds = Bounds::from_size(2, 2);
    let a: Box<dyn DecodedImage> = Box::new(RgbaBuffer::filled(bounds, [1, 2, 3, 255]));
    let b: Box<dyn DecodedImage> = Box::new(Rgba64Buffer::filled(bounds, [257, 514, 771, 65535]));
    assert_eq!(compare_precise(&*a, &*b), Ok(0));
    assert_eq!(compare_fast(&normalize(&*a), &normalize(&*b)), Ok(0));
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_matches_sequential() {
    use pixcmp_ops::{compare_fast_par, compare_precise_par};

    let bounds = Bounds::new(-7, 3, 101, 57);
    let a = noise(bounds, 8);
    let b = noise(bounds, 9);
    assert_eq!(compare_fast_par(&a, &b), compare_fast(&a, &b));
    assert_eq!(compare_precise_par(&a, &b), compare_precise(&a, &b));
}
