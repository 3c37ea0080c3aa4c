//! Tests for stamp construction and generation.

use heatmap_core::{linear_falloff, HeatmapError, Stamp};

// ============================================================================
// Explicit-data construction
// ============================================================================

#[test]
fn test_from_data_round_trip() {
    let data = vec![0.0, 0.5, 0.0, 0.5, 1.0, 0.5, 0.0, 0.5, 0.0];
    let stamp = Stamp::from_data(3, 3, data.clone()).unwrap();

    assert_eq!(stamp.width(), 3);
    assert_eq!(stamp.height(), 3);
    assert_eq!(stamp.data(), data.as_slice());
}

#[test]
fn test_from_data_rejects_zero_dimensions() {
    let err = Stamp::from_data(0, 3, vec![]).unwrap_err();
    assert!(matches!(err, HeatmapError::InvalidDimension(_)));

    let err = Stamp::from_data(3, 0, vec![]).unwrap_err();
    assert!(matches!(err, HeatmapError::InvalidDimension(_)));
}

#[test]
fn test_from_data_rejects_length_mismatch() {
    let err = Stamp::from_data(3, 3, vec![1.0; 8]).unwrap_err();
    assert!(matches!(err, HeatmapError::InvalidArgument(_)));

    let err = Stamp::from_data(3, 3, vec![1.0; 10]).unwrap_err();
    assert!(matches!(err, HeatmapError::InvalidArgument(_)));
}

#[test]
fn test_non_square_explicit_stamp_is_allowed() {
    let stamp = Stamp::from_data(5, 3, vec![1.0; 15]).unwrap();
    assert_eq!(stamp.width(), 5);
    assert_eq!(stamp.height(), 3);
}

// ============================================================================
// Generated stamps
// ============================================================================

#[test]
fn test_generate_rejects_negative_radius() {
    let err = Stamp::generate(-1).unwrap_err();
    assert!(matches!(err, HeatmapError::InvalidDimension(_)));

    let err = Stamp::generate_with(-3, |d| d).unwrap_err();
    assert!(matches!(err, HeatmapError::InvalidDimension(_)));
}

#[test]
fn test_generate_radius_zero() {
    // A 1x1 stamp whose single weight is the falloff at distance 0.
    let stamp = Stamp::generate(0).unwrap();
    assert_eq!(stamp.width(), 1);
    assert_eq!(stamp.height(), 1);
    assert_eq!(stamp.data(), &[1.0]);
}

#[test]
fn test_generate_radius_one_default_falloff() {
    // Corners sit at distance sqrt(2): 1 - sqrt(2)/2 = 0.2928932...
    let expected = Stamp::from_data(
        3,
        3,
        vec![
            0.292_893_2, 0.5, 0.292_893_2, //
            0.5, 1.0, 0.5, //
            0.292_893_2, 0.5, 0.292_893_2,
        ],
    )
    .unwrap();

    let stamp = Stamp::generate(1).unwrap();
    assert_eq!(stamp.width(), 3);
    assert_eq!(stamp.height(), 3);
    assert!(stamp.almost_eq(&expected), "radius-1 stamp data is correct");
}

#[test]
fn test_generate_with_constant_falloff() {
    let halves = Stamp::from_data(3, 3, vec![0.5; 9]).unwrap();
    let stamp = Stamp::generate_with(1, |_| 0.5).unwrap();

    assert_eq!(stamp, halves, "constant falloff fills every cell");
}

#[test]
fn test_generate_with_does_not_clamp() {
    // The falloff output is taken verbatim: negative and >1 weights
    // survive generation.
    let negatives = Stamp::generate_with(1, |_| -1.0).unwrap();
    assert_eq!(negatives.data(), &[-1.0; 9]);

    let tens = Stamp::generate_with(1, |_| 10.0).unwrap();
    assert_eq!(tens.data(), &[10.0; 9]);
}

#[test]
fn test_generate_with_receives_euclidean_distance() {
    let stamp = Stamp::generate_with(1, |d| d).unwrap();

    assert_eq!(stamp.data()[4], 0.0, "center cell is at distance 0");
    assert_eq!(stamp.data()[1], 1.0, "edge cell is at distance 1");
    assert!(
        (stamp.data()[0] - std::f64::consts::SQRT_2).abs() < 1e-12,
        "corner cell is at distance sqrt(2)"
    );
}

#[test]
fn test_generate_matches_named_linear_falloff() {
    // The default generation is the named falloff through the same
    // interface.
    let via_default = Stamp::generate(2).unwrap();
    let via_named = Stamp::generate_with(2, linear_falloff(2)).unwrap();
    assert_eq!(via_default, via_named);
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn test_exact_vs_almost_equality() {
    let a = Stamp::from_data(1, 1, vec![0.5]).unwrap();
    let b = Stamp::from_data(1, 1, vec![0.5 + 1e-8]).unwrap();

    assert_ne!(a, b, "exact equality sees the difference");
    assert!(a.almost_eq(&b), "almost_eq tolerates it");
}

#[test]
fn test_almost_eq_requires_matching_dimensions() {
    let a = Stamp::from_data(1, 3, vec![0.0; 3]).unwrap();
    let b = Stamp::from_data(3, 1, vec![0.0; 3]).unwrap();
    assert!(!a.almost_eq(&b));
}
