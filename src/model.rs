/// Core data types for the air quality dashboard.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic, no I/O, and no external dependencies — only types.

// ---------------------------------------------------------------------------
// Reference ceilings
// ---------------------------------------------------------------------------

/// Display ceiling for PM10 concentration bars, in µg/m³.
/// A reading at or above this value renders as a full bar.
pub const PM10_CEILING: f64 = 200.0;

/// Display ceiling for PM2.5 concentration bars, in µg/m³.
pub const PM25_CEILING: f64 = 100.0;

// ---------------------------------------------------------------------------
// Reading types
// ---------------------------------------------------------------------------

/// A single air quality observation, constructed by the caller.
///
/// `value` is the unitless AQI index, expected to be non-negative with no
/// declared upper bound (values beyond 300 are open-ended "Hazardous").
/// The optional particulate readings feed bar-fill rendering only and play
/// no part in category classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AqiReading {
    pub value: f64,
    /// PM10 concentration in µg/m³, if measured.
    pub pm10: Option<f64>,
    /// PM2.5 concentration in µg/m³, if measured.
    pub pm25: Option<f64>,
}

// ---------------------------------------------------------------------------
// Category types
// ---------------------------------------------------------------------------

/// Fine-grained AQI display label. Six bands over the non-negative axis,
/// upper bound inclusive on each band:
///   Good ≤ 50 < Moderate ≤ 100 < Poor ≤ 150 < Unhealthy ≤ 200
///   < Severe ≤ 300 < Hazardous
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiLabel {
    Good,
    Moderate,
    Poor,
    Unhealthy,
    Severe,
    Hazardous,
}

impl AqiLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AqiLabel::Good => "Good",
            AqiLabel::Moderate => "Moderate",
            AqiLabel::Poor => "Poor",
            AqiLabel::Unhealthy => "Unhealthy",
            AqiLabel::Severe => "Severe",
            AqiLabel::Hazardous => "Hazardous",
        }
    }
}

impl std::fmt::Display for AqiLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse severity grouping used to select advisory copy and health-effect
/// listings. Four bands, independent of the six-band label ladder:
///   Low ≤ 50 < Moderate ≤ 100 < High ≤ 200 < Severe
///
/// Callers needing health-advice copy should key off this tier, not the
/// display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTier {
    Low,
    Moderate,
    High,
    Severe,
}

impl SeverityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Low => "low",
            SeverityTier::Moderate => "moderate",
            SeverityTier::High => "high",
            SeverityTier::Severe => "severe",
        }
    }
}

impl std::fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full classification descriptor for one AQI reading.
///
/// Derived data with no independent identity — recomputed on every call,
/// never stored between renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AqiCategory {
    pub label: AqiLabel,
    pub tier: SeverityTier,
    /// General-population guidance sentence for `tier`.
    pub advisory: &'static str,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Invalid-argument conditions raised by the classification core.
///
/// There is no fallback or default category: callers must handle these
/// explicitly (by clamping or discarding the reading) rather than having
/// the classifier guess. Rejecting rather than clamping surfaces upstream
/// data-quality bugs early.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AqiError {
    /// `classify` received a value below zero.
    NegativeReading(f64),
    /// `classify` or `display_ratio` received NaN or an infinity.
    NonFiniteReading,
    /// `display_ratio` received a reference ceiling that is zero, negative,
    /// or non-finite.
    NonPositiveCeiling(f64),
}

impl std::fmt::Display for AqiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AqiError::NegativeReading(v) => {
                write!(f, "AQI reading must be non-negative, got {}", v)
            }
            AqiError::NonFiniteReading => write!(f, "AQI reading must be finite"),
            AqiError::NonPositiveCeiling(c) => {
                write!(f, "reference ceiling must be positive and finite, got {}", c)
            }
        }
    }
}

impl std::error::Error for AqiError {}
