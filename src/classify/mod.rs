/// AQI classification core.
///
/// One canonical, table-driven set of threshold ladders consumed by every
/// caller. The label, coloring, and health-effect paths all read the same
/// tables, so the bands cannot drift apart between panels.
///
/// Submodules:
/// - `bands` — the label and severity-tier ladders and `classify`.
/// - `guidance` — fixed advisory copy and health-effect listings per tier.

pub mod bands;
pub mod guidance;

pub use bands::classify;
pub use guidance::{advisory_text, health_effects, HealthEffect};
