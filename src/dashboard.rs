//! Dashboard composition and rendering.
//!
//! The presentation shell: assembles a serializable report from a site's
//! snapshot by calling the classification core once, then renders the three
//! dashboard panels (hero map, metrics card, health panel) as text. All
//! displayed values come straight from the report — rendering performs no
//! classification of its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::{classify, health_effects};
use crate::classify::guidance::POLLUTANT_SOURCES;
use crate::gauge::{band_color, pm10_fill, pm25_fill, INDEX_SCALE, SCALE_MARKS};
use crate::model::AqiError;
use crate::sites::Site;

// ============================================================================
// Report
// ============================================================================

/// Everything the dashboard displays for one site, fully derived.
///
/// Built once per render; holds no state and references nothing mutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub timestamp: String,
    pub site_slug: String,
    pub site_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub aqi: f64,
    pub label: String,
    pub severity_tier: String,
    pub color: String,
    pub advisory: String,
    /// Concentration and bar fill are absent together when the site does
    /// not report the pollutant.
    pub pm10: Option<f64>,
    pub pm10_fill_pct: Option<f64>,
    pub pm25: Option<f64>,
    pub pm25_fill_pct: Option<f64>,
    pub temperature_c: f64,
    pub condition: String,
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
    pub uv_index: f64,
    pub city_rank: u32,
    pub comparison: String,
    pub last_updated: String,
    pub health_effects: Vec<ReportHealthEffect>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportHealthEffect {
    pub title: String,
    pub description: String,
}

/// Assembles the report for a site at an explicit timestamp.
///
/// `now` is injected rather than read internally so report assembly stays
/// deterministic in tests. Fails only if the site's snapshot readings are
/// invalid — a registry entry the classifier rejects is a data bug worth
/// surfacing, not papering over.
pub fn build_report_at(site: &Site, now: DateTime<Utc>) -> Result<DashboardReport, AqiError> {
    let snapshot = &site.snapshot;
    let reading = snapshot.reading();
    let category = classify(reading.value)?;

    Ok(DashboardReport {
        timestamp: now.to_rfc3339(),
        site_slug: site.slug.to_string(),
        site_name: site.name.to_string(),
        latitude: site.latitude,
        longitude: site.longitude,
        aqi: reading.value,
        label: category.label.as_str().to_string(),
        severity_tier: category.tier.as_str().to_string(),
        color: band_color(category.label).as_str().to_string(),
        advisory: category.advisory.to_string(),
        pm10: reading.pm10,
        pm10_fill_pct: reading.pm10.map(pm10_fill).transpose()?,
        pm25: reading.pm25,
        pm25_fill_pct: reading.pm25.map(pm25_fill).transpose()?,
        temperature_c: snapshot.temperature_c,
        condition: snapshot.condition.to_string(),
        humidity_pct: snapshot.humidity_pct,
        wind_speed_kmh: snapshot.wind_speed_kmh,
        uv_index: snapshot.uv_index,
        city_rank: snapshot.city_rank,
        comparison: snapshot.comparison.to_string(),
        last_updated: snapshot.last_updated.to_string(),
        health_effects: health_effects(category.tier)
            .iter()
            .map(|e| ReportHealthEffect {
                title: e.title.to_string(),
                description: e.description.to_string(),
            })
            .collect(),
    })
}

/// Convenience wrapper that stamps the report with the current time.
/// Use `build_report_at` in tests to keep them deterministic.
pub fn build_report(site: &Site) -> Result<DashboardReport, AqiError> {
    build_report_at(site, Utc::now())
}

// ============================================================================
// Rendering
// ============================================================================

const RULE: &str =
    "═══════════════════════════════════════════════════════════";

/// Renders a fill bar like `[█████████░░░░░░░░░░░] 48%`.
fn fill_bar(pct: f64, width: usize) -> String {
    let filled = ((pct / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "[{}{}] {:.0}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        pct
    )
}

/// The hero map section. No map tiles are fetched — the section shows the
/// coordinates the real map would center on and the AQI marker drawn over it.
pub fn render_map_section(report: &DashboardReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", RULE));
    out.push_str(&format!("  🗺  {}\n", report.site_name));
    out.push_str(&format!(
        "      map center {:.4}, {:.4}   marker ({}) {}\n",
        report.latitude, report.longitude, report.aqi, report.label
    ));
    out.push_str(&format!("{}\n", RULE));
    out
}

/// The primary AQI metrics card: live index, category, pollutant bars,
/// the band scale, and the weather tiles.
pub fn render_metrics_card(report: &DashboardReport) -> String {
    let mut out = String::new();
    out.push_str("Real-time Air Quality Index (AQI)\n");
    out.push_str(&format!("  📍 {}\n", report.site_name));
    out.push_str(&format!("  🕒 Last Updated: {}\n", report.last_updated));
    out.push('\n');
    out.push_str(&format!(
        "  Live AQI: {}  —  {} ({})\n",
        report.aqi, report.label, report.color
    ));
    out.push('\n');
    out.push_str(&pollutant_line("PM10", report.pm10, report.pm10_fill_pct));
    out.push_str(&pollutant_line("PM2.5", report.pm25, report.pm25_fill_pct));
    out.push('\n');
    out.push_str(&format!("  Scale  {}\n", render_scale_bar()));
    out.push('\n');
    out.push_str(&format!(
        "  Temperature: {} °C ({})   Humidity: {} %   Wind: {} km/h   UV: {}\n",
        report.temperature_c,
        report.condition,
        report.humidity_pct,
        report.wind_speed_kmh,
        report.uv_index
    ));
    out.push('\n');
    out.push_str(&format!(
        "  ⚠ Rank {}: currently ranks {}th among the most polluted cities globally.\n",
        report.city_rank, report.city_rank
    ));
    out.push_str(&format!("  {}\n", report.comparison));
    out
}

fn pollutant_line(name: &str, concentration: Option<f64>, fill_pct: Option<f64>) -> String {
    match (concentration, fill_pct) {
        (Some(c), Some(f)) => format!("  {:<6} {:>5} μg/m³  {}\n", name, c, fill_bar(f, 20)),
        _ => format!("  {:<6}   not reported\n", name),
    }
}

/// The six-segment index scale with its axis marks.
fn render_scale_bar() -> String {
    let mut bar = String::from("|");
    for segment in INDEX_SCALE {
        // Two characters of bar per 10% of display width.
        let chars = usize::from(segment.width_pct) / 5;
        bar.push_str(&"■".repeat(chars));
        bar.push('|');
    }
    let labels: Vec<&str> = INDEX_SCALE.iter().map(|s| s.label.as_str()).collect();
    format!("{}  {}  ({})", bar, labels.join(" · "), SCALE_MARKS.join("/"))
}

/// The health-effects advisory panel.
pub fn render_health_panel(report: &DashboardReport) -> String {
    let mut out = String::new();
    out.push_str("Health Effects & Recommendations\n");
    out.push_str(&format!("{}\n", RULE));
    out.push_str(&format!(
        "  Air Quality: {} [{}]\n",
        report.label, report.severity_tier
    ));
    out.push_str(&format!("  {}\n", report.advisory));
    out.push('\n');
    for effect in &report.health_effects {
        out.push_str(&format!("  • {}\n", effect.title));
        out.push_str(&format!("    {}\n", effect.description));
    }
    out.push('\n');
    out.push_str("  Air Quality Sources\n");
    for source in POLLUTANT_SOURCES {
        out.push_str(&format!("  • {}\n", source.name));
        out.push_str(&format!("    {}\n", source.description));
    }
    out
}

/// The full dashboard: hero map, metrics card, health panel, footer.
pub fn render_dashboard(report: &DashboardReport) -> String {
    let mut out = String::new();
    out.push_str(&render_map_section(report));
    out.push('\n');
    out.push_str(&render_metrics_card(report));
    out.push('\n');
    out.push_str(&render_health_panel(report));
    out.push_str(&format!("{}\n", RULE));
    out.push_str(
        "Air Quality data is provided for informational purposes only. \
         Always check with local authorities for the most accurate information.\n",
    );
    out
}

// ============================================================================
// Tests
// ============================================================================
