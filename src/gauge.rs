/// Bar and gauge presentation mapping.
///
/// Pollutant concentrations are displayed as horizontal fill bars scaled
/// against a fixed per-pollutant reference ceiling, and the AQI index bar
/// is drawn as six fixed-width colored segments. The numeric work lives
/// here; actual drawing is up to the presentation layer.

use crate::model::{AqiError, AqiLabel, PM10_CEILING, PM25_CEILING};

// ---------------------------------------------------------------------------
// Fill ratios
// ---------------------------------------------------------------------------

/// Converts a pollutant concentration into a bar-fill percentage against a
/// reference ceiling, clamped to the closed interval [0, 100].
///
/// The ceiling must be positive and finite; there is no sensible fill for a
/// zero or negative ceiling, so the error is surfaced rather than guessed
/// around. Concentration is clamped, not rejected — a reading above the
/// ceiling simply renders as a full bar.
pub fn display_ratio(concentration: f64, ceiling: f64) -> Result<f64, AqiError> {
    if !ceiling.is_finite() || ceiling <= 0.0 {
        return Err(AqiError::NonPositiveCeiling(ceiling));
    }
    if !concentration.is_finite() {
        return Err(AqiError::NonFiniteReading);
    }
    // Multiply before dividing so integral inputs produce exact percentages.
    Ok((concentration * 100.0 / ceiling).clamp(0.0, 100.0))
}

/// Fill percentage for a PM10 reading against the fixed 200 µg/m³ ceiling.
pub fn pm10_fill(concentration: f64) -> Result<f64, AqiError> {
    display_ratio(concentration, PM10_CEILING)
}

/// Fill percentage for a PM2.5 reading against the fixed 100 µg/m³ ceiling.
pub fn pm25_fill(concentration: f64) -> Result<f64, AqiError> {
    display_ratio(concentration, PM25_CEILING)
}

// ---------------------------------------------------------------------------
// Band colors
// ---------------------------------------------------------------------------

/// Display color for an AQI band, one per label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandColor {
    Green,
    Amber,
    Orange,
    Red,
    Purple,
    Pink,
}

impl BandColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BandColor::Green => "green",
            BandColor::Amber => "amber",
            BandColor::Orange => "orange",
            BandColor::Red => "red",
            BandColor::Purple => "purple",
            BandColor::Pink => "pink",
        }
    }
}

/// Maps a display label to its band color.
pub fn band_color(label: AqiLabel) -> BandColor {
    match label {
        AqiLabel::Good => BandColor::Green,
        AqiLabel::Moderate => BandColor::Amber,
        AqiLabel::Poor => BandColor::Orange,
        AqiLabel::Unhealthy => BandColor::Red,
        AqiLabel::Severe => BandColor::Purple,
        AqiLabel::Hazardous => BandColor::Pink,
    }
}

// ---------------------------------------------------------------------------
// Index scale
// ---------------------------------------------------------------------------

/// One segment of the AQI index bar drawn under the metrics card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleSegment {
    pub label: AqiLabel,
    /// Relative width of the segment in the rendered bar, in percent.
    pub width_pct: u8,
}

/// The six segments of the index bar. Widths are display proportions, not
/// proportional to the numeric band widths (the two top bands are wider
/// numerically but drawn narrower).
pub static INDEX_SCALE: &[ScaleSegment] = &[
    ScaleSegment { label: AqiLabel::Good, width_pct: 20 },
    ScaleSegment { label: AqiLabel::Moderate, width_pct: 20 },
    ScaleSegment { label: AqiLabel::Poor, width_pct: 20 },
    ScaleSegment { label: AqiLabel::Unhealthy, width_pct: 20 },
    ScaleSegment { label: AqiLabel::Severe, width_pct: 10 },
    ScaleSegment { label: AqiLabel::Hazardous, width_pct: 10 },
];

/// Axis marks printed under the index bar, one more than there are segments.
pub static SCALE_MARKS: &[&str] = &["0", "50", "100", "150", "200", "300", "301+"];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- display_ratio ------------------------------------------------------

    #[test]
    fn test_display_ratio_exact_values() {
        // The dashboard's hardcoded readings must render at exact widths.
        assert_eq!(display_ratio(96.0, 200.0), Ok(48.0));
        assert_eq!(display_ratio(34.0, 100.0), Ok(34.0));
        assert_eq!(display_ratio(0.0, 100.0), Ok(0.0));
    }

    #[test]
    fn test_display_ratio_clamps_above_ceiling() {
        assert_eq!(display_ratio(500.0, 100.0), Ok(100.0));
        assert_eq!(display_ratio(200.0, 200.0), Ok(100.0));
        assert_eq!(display_ratio(201.0, 200.0), Ok(100.0));
    }

    #[test]
    fn test_display_ratio_clamps_negative_concentration_to_zero() {
        assert_eq!(display_ratio(-5.0, 100.0), Ok(0.0));
    }

    #[test]
    fn test_display_ratio_rejects_non_positive_ceiling() {
        for c in [0.0, -1.0, -200.0] {
            assert_eq!(
                display_ratio(42.0, c),
                Err(AqiError::NonPositiveCeiling(c)),
                "ceiling {} must be rejected",
                c
            );
        }
    }

    #[test]
    fn test_display_ratio_rejects_non_finite_arguments() {
        // NaN payloads don't compare equal, so match on the variant.
        assert!(matches!(
            display_ratio(1.0, f64::NAN),
            Err(AqiError::NonPositiveCeiling(_))
        ));
        assert!(matches!(
            display_ratio(1.0, f64::INFINITY),
            Err(AqiError::NonPositiveCeiling(_))
        ));
        assert_eq!(display_ratio(f64::NAN, 100.0), Err(AqiError::NonFiniteReading));
        assert_eq!(
            display_ratio(f64::INFINITY, 100.0),
            Err(AqiError::NonFiniteReading)
        );
    }

    #[test]
    fn test_fixed_ceiling_wrappers_use_dashboard_ceilings() {
        assert_eq!(pm10_fill(96.0), Ok(48.0));
        assert_eq!(pm25_fill(34.0), Ok(34.0));
        assert_eq!(pm10_fill(400.0), Ok(100.0));
    }

    // --- colors and scale ---------------------------------------------------

    #[test]
    fn test_every_label_has_a_distinct_color() {
        let labels = [
            AqiLabel::Good,
            AqiLabel::Moderate,
            AqiLabel::Poor,
            AqiLabel::Unhealthy,
            AqiLabel::Severe,
            AqiLabel::Hazardous,
        ];
        let mut seen = std::collections::HashSet::new();
        for label in labels {
            assert!(
                seen.insert(band_color(label)),
                "color for '{}' duplicates another band",
                label
            );
        }
    }

    #[test]
    fn test_index_scale_widths_sum_to_full_bar() {
        let total: u32 = INDEX_SCALE.iter().map(|s| u32::from(s.width_pct)).sum();
        assert_eq!(total, 100, "segment widths must fill the bar exactly");
    }

    #[test]
    fn test_index_scale_covers_all_bands_in_order() {
        let labels: Vec<_> = INDEX_SCALE.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec![
                AqiLabel::Good,
                AqiLabel::Moderate,
                AqiLabel::Poor,
                AqiLabel::Unhealthy,
                AqiLabel::Severe,
                AqiLabel::Hazardous,
            ]
        );
    }

    #[test]
    fn test_scale_has_one_more_mark_than_segments() {
        assert_eq!(SCALE_MARKS.len(), INDEX_SCALE.len() + 1);
    }
}
