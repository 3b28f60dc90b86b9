//! Classification Verification Tests
//!
//! End-to-end checks of the classification core through the public API:
//! band membership across the whole domain, boundary exactness, display
//! ratios, and rejection of invalid input.

use aqimon_dashboard::classify::{advisory_text, classify, health_effects};
use aqimon_dashboard::gauge::display_ratio;
use aqimon_dashboard::model::{AqiError, AqiLabel, SeverityTier};

/// Expected (label, tier) for every band, with a representative sample and
/// both edges of each range.
const EXPECTED_BANDS: &[(f64, f64, AqiLabel, SeverityTier)] = &[
    (0.0, 50.0, AqiLabel::Good, SeverityTier::Low),
    (51.0, 100.0, AqiLabel::Moderate, SeverityTier::Moderate),
    (101.0, 150.0, AqiLabel::Poor, SeverityTier::High),
    (151.0, 200.0, AqiLabel::Unhealthy, SeverityTier::High),
    (201.0, 300.0, AqiLabel::Severe, SeverityTier::Severe),
];

#[test]
fn test_every_band_classifies_to_expected_label_and_tier() {
    for &(low, high, label, tier) in EXPECTED_BANDS {
        for value in [low, (low + high) / 2.0, high] {
            let category = classify(value)
                .unwrap_or_else(|e| panic!("value {} failed to classify: {}", value, e));
            assert_eq!(
                category.label, label,
                "value {} should carry label {}",
                value, label
            );
            assert_eq!(
                category.tier, tier,
                "value {} should carry tier {}",
                value, tier
            );
        }
    }
}

#[test]
fn test_values_above_300_are_hazardous_and_severe() {
    for value in [301.0, 302.0, 450.0, 500.0, 1_000.0, 1e9] {
        let category = classify(value).expect("open-ended values classify");
        assert_eq!(category.label, AqiLabel::Hazardous);
        assert_eq!(category.tier, SeverityTier::Severe);
    }
}

#[test]
fn test_boundary_exactness_across_all_band_edges() {
    let edges = [
        (50.0, AqiLabel::Good),
        (51.0, AqiLabel::Moderate),
        (100.0, AqiLabel::Moderate),
        (101.0, AqiLabel::Poor),
        (150.0, AqiLabel::Poor),
        (151.0, AqiLabel::Unhealthy),
        (200.0, AqiLabel::Unhealthy),
        (201.0, AqiLabel::Severe),
        (300.0, AqiLabel::Severe),
        (301.0, AqiLabel::Hazardous),
    ];
    for (value, label) in edges {
        assert_eq!(
            classify(value).expect("boundary values classify").label,
            label,
            "boundary value {} misclassified",
            value
        );
    }
}

#[test]
fn test_totality_via_boundary_sampling() {
    // Every non-negative finite value maps to exactly one label and one
    // tier. Sample each boundary ±1 and make sure nothing falls through.
    for boundary in [50.0, 100.0, 150.0, 200.0, 300.0] {
        for value in [boundary - 1.0, boundary, boundary + 1.0] {
            classify(value)
                .unwrap_or_else(|e| panic!("value {} fell through the ladder: {}", value, e));
        }
    }
}

#[test]
fn test_advisory_copy_keys_off_tier_not_label() {
    // Poor (120) and Unhealthy (180) are distinct labels in the same tier,
    // so they must share advisory copy.
    let poor = classify(120.0).expect("valid");
    let unhealthy = classify(180.0).expect("valid");
    assert_ne!(poor.label, unhealthy.label);
    assert_eq!(poor.tier, unhealthy.tier);
    assert_eq!(poor.advisory, unhealthy.advisory);
    assert_eq!(poor.advisory, advisory_text(SeverityTier::High));
    assert_eq!(health_effects(poor.tier), health_effects(unhealthy.tier));
}

#[test]
fn test_classification_is_pure() {
    let first = classify(98.0).expect("98 is valid");
    assert_eq!(first.label, AqiLabel::Moderate);
    assert_eq!(first.tier, SeverityTier::Moderate);
    for _ in 0..10 {
        assert_eq!(classify(98.0), Ok(first), "repeated calls must agree");
    }
}

#[test]
fn test_invalid_readings_are_rejected_not_defaulted() {
    assert_eq!(classify(-7.5), Err(AqiError::NegativeReading(-7.5)));
    assert_eq!(classify(f64::NAN), Err(AqiError::NonFiniteReading));
    assert_eq!(classify(f64::INFINITY), Err(AqiError::NonFiniteReading));
}

#[test]
fn test_display_ratio_known_values() {
    assert_eq!(display_ratio(96.0, 200.0), Ok(48.0));
    assert_eq!(display_ratio(34.0, 100.0), Ok(34.0));
    assert_eq!(display_ratio(500.0, 100.0), Ok(100.0));
    assert_eq!(display_ratio(0.0, 100.0), Ok(0.0));
}

#[test]
fn test_display_ratio_rejects_zero_ceiling_for_any_concentration() {
    for concentration in [0.0, 1.0, 96.0, 500.0, -3.0] {
        assert_eq!(
            display_ratio(concentration, 0.0),
            Err(AqiError::NonPositiveCeiling(0.0)),
            "ceiling 0 must be rejected for concentration {}",
            concentration
        );
    }
}
