/// AQI band ladders.
///
/// Two independent mappings over the non-negative axis, both total and
/// non-overlapping: a six-band display-label ladder and a four-band
/// severity-tier ladder. The 101–150 and 151–200 label bands share the
/// High tier; the tier is what advisory copy keys off.
///
/// Each ladder is evaluated low-to-high with inclusive upper bounds, first
/// match wins, and an open-ended catch-all band at the top.

use crate::classify::guidance::advisory_text;
use crate::model::{AqiCategory, AqiError, AqiLabel, SeverityTier};

// ---------------------------------------------------------------------------
// Band tables
// ---------------------------------------------------------------------------

/// Display-label bands: (inclusive upper bound, label).
/// Values above the last bound are `Hazardous`.
const LABEL_BANDS: &[(f64, AqiLabel)] = &[
    (50.0, AqiLabel::Good),
    (100.0, AqiLabel::Moderate),
    (150.0, AqiLabel::Poor),
    (200.0, AqiLabel::Unhealthy),
    (300.0, AqiLabel::Severe),
];

const LABEL_OVERFLOW: AqiLabel = AqiLabel::Hazardous;

/// Severity-tier bands: (inclusive upper bound, tier).
/// Values above the last bound are `Severe`.
const TIER_BANDS: &[(f64, SeverityTier)] = &[
    (50.0, SeverityTier::Low),
    (100.0, SeverityTier::Moderate),
    (200.0, SeverityTier::High),
];

const TIER_OVERFLOW: SeverityTier = SeverityTier::Severe;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classifies a numeric AQI reading into its display label, severity tier,
/// and advisory copy.
///
/// Rejects negative and non-finite input rather than clamping — the caller
/// decides how to handle bad readings. For every accepted value the result
/// is deterministic and side-effect free.
pub fn classify(value: f64) -> Result<AqiCategory, AqiError> {
    if !value.is_finite() {
        return Err(AqiError::NonFiniteReading);
    }
    if value < 0.0 {
        return Err(AqiError::NegativeReading(value));
    }

    let label = label_for(value);
    let tier = tier_for(value);
    Ok(AqiCategory {
        label,
        tier,
        advisory: advisory_text(tier),
    })
}

fn label_for(value: f64) -> AqiLabel {
    for &(upper, label) in LABEL_BANDS {
        if value <= upper {
            return label;
        }
    }
    LABEL_OVERFLOW
}

fn tier_for(value: f64) -> SeverityTier {
    for &(upper, tier) in TIER_BANDS {
        if value <= upper {
            return tier;
        }
    }
    TIER_OVERFLOW
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
