//! Static air quality dashboard.
//!
//! Renders a single-page dashboard — hero map section, AQI metrics card,
//! and health-effects panel — from a hardcoded site snapshot. The only
//! non-trivial logic is the classification core in `classify` and `gauge`:
//! pure threshold-to-descriptor mappings the presentation shell calls once
//! per render. There is no network, no persistence, and no shared mutable
//! state beyond the global logger.

pub mod classify;
pub mod config;
pub mod dashboard;
pub mod gauge;
pub mod logging;
pub mod model;
pub mod sites;
