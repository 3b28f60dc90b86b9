//! TOML configuration for the dashboard binary.
//!
//! Everything here has a sensible default: a missing configuration file is
//! not an error (the caller logs a warning and renders the default site),
//! but a file that exists and fails to parse, or that names an unregistered
//! site, is surfaced to the user.

use serde::Deserialize;

use crate::logging::LogLevel;
use crate::sites::{find_site, Site, DEFAULT_SITE_SLUG};

/// Default configuration file path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "./aqimon.toml";

// ---------------------------------------------------------------------------
// Configuration types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Slug of the site to render, resolved against the site registry.
    pub site: String,
    /// Output format: "text" or "json".
    pub format: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            site: DEFAULT_SITE_SLUG.to_string(),
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Optional log file path; console-only when absent.
    pub file: Option<String>,
    /// Whether console output carries timestamps.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            timestamps: false,
        }
    }
}

impl LoggingConfig {
    /// Parses the configured level name.
    pub fn parse_level(&self) -> Result<LogLevel, ConfigError> {
        match self.level.as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(ConfigError::Parse(format!(
                "unknown log level '{}' (expected debug, info, warn, or error)",
                other
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io(String),
    /// The file was read but is not valid configuration TOML.
    Parse(String),
    /// The configured site slug is not in the registry.
    UnknownSite(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "could not read configuration: {}", msg),
            ConfigError::Parse(msg) => write!(f, "invalid configuration: {}", msg),
            ConfigError::UnknownSite(slug) => {
                write!(f, "configured site '{}' is not registered", slug)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Loads configuration from a TOML file.
pub fn load_config(path: &str) -> Result<DashboardConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    let config: DashboardConfig =
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
    Ok(config)
}

/// Resolves the configured site against the registry.
pub fn resolve_site(config: &DashboardConfig) -> Result<&'static Site, ConfigError> {
    find_site(&config.display.site)
        .ok_or_else(|| ConfigError::UnknownSite(config.display.site.clone()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
