/// Site registry for the air quality dashboard.
///
/// Defines the canonical list of monitored sites along with their metadata
/// and the snapshot readings the dashboard renders. This is the single
/// source of truth for site data — the presentation layer looks sites up
/// here rather than hardcoding readings inline.
///
/// The dashboard is static by design: each snapshot is a literal constant,
/// not the result of a fetch. A live deployment would replace this registry
/// with an external feed without touching the classification core.

use crate::model::AqiReading;

// ---------------------------------------------------------------------------
// Site metadata
// ---------------------------------------------------------------------------

/// Metadata and current readings for one monitored site.
pub struct Site {
    /// Short stable identifier used in configuration and CLI arguments.
    pub slug: &'static str,
    /// Human-readable location name shown in the dashboard header.
    pub name: &'static str,
    /// WGS84 latitude of the map center.
    pub latitude: f64,
    /// WGS84 longitude of the map center.
    pub longitude: f64,
    /// The snapshot rendered for this site.
    pub snapshot: SiteSnapshot,
}

/// The literal readings displayed for a site.
///
/// Pollutant concentrations are in µg/m³. The AQI value is the unitless
/// index the classifier consumes.
pub struct SiteSnapshot {
    pub aqi: f64,
    pub pm10: f64,
    pub pm25: f64,
    pub temperature_c: f64,
    /// Weather condition caption shown next to the temperature tile.
    pub condition: &'static str,
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
    pub uv_index: f64,
    /// Global pollution ranking among monitored cities.
    pub city_rank: u32,
    /// Regional comparison caption shown under the rank tile.
    pub comparison: &'static str,
    /// Relative freshness caption, e.g. "15 minutes ago".
    pub last_updated: &'static str,
}

impl SiteSnapshot {
    /// The classifier-facing view of this snapshot.
    pub fn reading(&self) -> AqiReading {
        AqiReading {
            value: self.aqi,
            pm10: Some(self.pm10),
            pm25: Some(self.pm25),
        }
    }
}

/// All sites the dashboard can render.
pub static SITE_REGISTRY: &[Site] = &[Site {
    slug: "surat",
    name: "Surat, Gujarat, India",
    latitude: 21.1702,
    longitude: 72.8311,
    snapshot: SiteSnapshot {
        aqi: 98.0,
        pm10: 96.0,
        pm25: 34.0,
        temperature_c: 33.0,
        condition: "Sunny",
        humidity_pct: 33.0,
        wind_speed_kmh: 10.0,
        uv_index: 9.0,
        city_rank: 397,
        comparison: "AQI in Surat is 1.57 times Below than in Gujarat",
        last_updated: "15 minutes ago",
    },
}];

/// The site rendered when configuration does not name one.
pub const DEFAULT_SITE_SLUG: &str = "surat";

// ---------------------------------------------------------------------------
// Lookup helpers
// ---------------------------------------------------------------------------

/// Returns the slugs of all registered sites.
pub fn all_slugs() -> Vec<&'static str> {
    SITE_REGISTRY.iter().map(|s| s.slug).collect()
}

/// Looks up a site by slug. Returns `None` if not found.
pub fn find_site(slug: &str) -> Option<&'static Site> {
    SITE_REGISTRY.iter().find(|s| s.slug == slug)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
