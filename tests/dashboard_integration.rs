//! Dashboard Integration Tests
//!
//! Builds reports over the real site registry and checks the rendered
//! panels and the JSON form agree with the classification core.

use aqimon_dashboard::dashboard::{
    build_report_at, render_dashboard, DashboardReport,
};
use aqimon_dashboard::sites::{find_site, SITE_REGISTRY};
use chrono::{TimeZone, Utc};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 13, 0, 0).unwrap()
}

#[test]
fn test_every_registered_site_builds_a_report() {
    for site in SITE_REGISTRY {
        let report = build_report_at(site, fixed_now())
            .unwrap_or_else(|e| panic!("site '{}' failed to build: {}", site.slug, e));
        assert_eq!(report.site_slug, site.slug);
        assert!(!report.label.is_empty());
        assert!(!report.advisory.is_empty());
        for fill in [report.pm10_fill_pct, report.pm25_fill_pct].into_iter().flatten() {
            assert!(
                (0.0..=100.0).contains(&fill),
                "pollutant fill for '{}' out of range: {}",
                site.slug,
                fill
            );
        }
        assert_eq!(report.health_effects.len(), 3);
    }
}

#[test]
fn test_surat_snapshot_renders_the_expected_dashboard() {
    let site = find_site("surat").expect("surat should be registered");
    let report = build_report_at(site, fixed_now()).expect("surat should build");

    // The hardcoded snapshot pins the derived values exactly.
    assert_eq!(report.aqi, 98.0);
    assert_eq!(report.label, "Moderate");
    assert_eq!(report.severity_tier, "moderate");
    assert_eq!(report.pm10_fill_pct, Some(48.0));
    assert_eq!(report.pm25_fill_pct, Some(34.0));
    assert_eq!(report.city_rank, 397);

    let page = render_dashboard(&report);
    assert!(page.contains("Surat, Gujarat, India"));
    assert!(page.contains("Live AQI: 98"));
    assert!(page.contains("Moderate"));
    assert!(page.contains("Last Updated: 15 minutes ago"));
    assert!(page.contains("Health Effects & Recommendations"));
    assert!(page.contains("Air Quality Sources"));
}

#[test]
fn test_report_survives_a_json_round_trip() {
    let site = find_site("surat").expect("surat should be registered");
    let report = build_report_at(site, fixed_now()).expect("surat should build");

    let json = serde_json::to_string_pretty(&report).expect("report serializes");
    let back: DashboardReport = serde_json::from_str(&json).expect("report deserializes");

    assert_eq!(back.timestamp, report.timestamp);
    assert_eq!(back.label, report.label);
    assert_eq!(back.severity_tier, report.severity_tier);
    assert_eq!(back.health_effects.len(), report.health_effects.len());
}

#[test]
fn test_report_assembly_is_deterministic_for_a_fixed_clock() {
    let site = find_site("surat").expect("surat should be registered");
    let a = build_report_at(site, fixed_now()).expect("builds");
    let b = build_report_at(site, fixed_now()).expect("builds");
    assert_eq!(render_dashboard(&a), render_dashboard(&b));
}
