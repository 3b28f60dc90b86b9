/// Fixed health-guidance copy, keyed by severity tier.
///
/// All strings here are static display copy. The advisory sentences are the
/// general-population guidance shown under the "Air Quality" heading; the
/// health-effect entries are the three detail cards rendered alongside it.
/// Both key off `SeverityTier`, never the six-band display label.

use crate::model::SeverityTier;

// ---------------------------------------------------------------------------
// Advisory copy
// ---------------------------------------------------------------------------

/// Returns the general-population guidance sentence for a severity tier.
///
/// Total over the tier enum: one fixed sentence per tier, no failure modes.
pub fn advisory_text(tier: SeverityTier) -> &'static str {
    match tier {
        SeverityTier::Low => {
            "Air quality is considered satisfactory, and air pollution poses \
             little or no risk."
        }
        SeverityTier::Moderate => {
            "Air quality is acceptable; however, some pollutants may be a \
             moderate health concern for a small number of individuals who \
             are unusually sensitive to air pollution."
        }
        SeverityTier::High => {
            "Everyone may begin to experience health effects; members of \
             sensitive groups may experience more serious health effects."
        }
        SeverityTier::Severe => {
            "Everyone may experience more serious health effects. Emergency \
             conditions may be triggered."
        }
    }
}

// ---------------------------------------------------------------------------
// Health-effect listings
// ---------------------------------------------------------------------------

/// One titled health-effect description, rendered as a detail card in the
/// health panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthEffect {
    pub title: &'static str,
    pub description: &'static str,
}

/// Returns the detailed health-effect entries for a severity tier.
///
/// Three entries per tier. Total and pure, like `advisory_text`.
pub fn health_effects(tier: SeverityTier) -> &'static [HealthEffect] {
    match tier {
        SeverityTier::Low => &[
            HealthEffect {
                title: "General Health",
                description: "Air quality is considered satisfactory, and air \
                              pollution poses little or no risk.",
            },
            HealthEffect {
                title: "Respiratory",
                description: "No respiratory discomfort expected.",
            },
            HealthEffect {
                title: "Cardiovascular",
                description: "No cardiovascular effects expected.",
            },
        ],
        SeverityTier::Moderate => &[
            HealthEffect {
                title: "Sensitive Groups",
                description: "Active children and adults, and people with \
                              respiratory disease, such as asthma, should limit \
                              prolonged outdoor exertion.",
            },
            HealthEffect {
                title: "Respiratory",
                description: "May cause minor breathing discomfort for sensitive \
                              individuals.",
            },
            HealthEffect {
                title: "Air Pollutants",
                description: "Moderate levels of pollutants in the air, primarily \
                              from PM2.5 and PM10 particles.",
            },
        ],
        SeverityTier::High => &[
            HealthEffect {
                title: "General Health",
                description: "Everyone may begin to experience health effects; \
                              members of sensitive groups may experience more \
                              serious effects.",
            },
            HealthEffect {
                title: "Respiratory",
                description: "Increased likelihood of respiratory symptoms in \
                              sensitive individuals, aggravation of heart or lung \
                              disease.",
            },
            HealthEffect {
                title: "Cardiovascular",
                description: "Increased aggravation of heart or lung disease and \
                              premature mortality in persons with cardiopulmonary \
                              disease and the elderly.",
            },
        ],
        SeverityTier::Severe => &[
            HealthEffect {
                title: "General Population",
                description: "Everyone may experience more serious health effects. \
                              Emergency conditions may be triggered.",
            },
            HealthEffect {
                title: "Respiratory",
                description: "Serious aggravation of heart or lung disease and \
                              premature mortality in persons with cardiopulmonary \
                              disease and the elderly.",
            },
            HealthEffect {
                title: "Physical Activity",
                description: "Avoid all physical activity outdoors. Sensitive \
                              groups should remain indoors and keep activity \
                              levels low.",
            },
        ],
    }
}

// ---------------------------------------------------------------------------
// Pollutant source descriptions
// ---------------------------------------------------------------------------

/// Informational copy about a pollutant's typical sources, rendered in the
/// "Air Quality Sources" section of the health panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollutantSource {
    pub name: &'static str,
    pub description: &'static str,
}

pub static POLLUTANT_SOURCES: &[PollutantSource] = &[
    PollutantSource {
        name: "PM2.5 (Fine Particulate Matter)",
        description: "Sources include combustion activities (motor vehicles, \
                      power plants), industrial processes, and natural sources \
                      like wildfires. These tiny particles can penetrate deep \
                      into the lungs and even enter the bloodstream.",
    },
    PollutantSource {
        name: "PM10 (Coarse Particulate Matter)",
        description: "Sources include road dust, construction sites, industrial \
                      processes, and natural sources like pollen and mold. These \
                      particles can enter the respiratory system and cause \
                      irritation.",
    },
    PollutantSource {
        name: "Ozone (O₃)",
        description: "Formed by chemical reactions between NOx and VOCs in the \
                      presence of sunlight. Sources include vehicle exhaust, \
                      industrial emissions, and chemical solvents. Ozone can \
                      trigger respiratory problems and exacerbate asthma.",
    },
    PollutantSource {
        name: "Nitrogen Dioxide (NO₂)",
        description: "Sources include vehicle emissions, power plants, and \
                      industrial operations. NO₂ can cause respiratory irritation \
                      and contribute to the formation of ozone and particulate \
                      matter.",
    },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
