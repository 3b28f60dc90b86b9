//! Dashboard entry point.
//!
//! Usage:
//!   aqimon_dashboard [--config PATH] [--site SLUG] [--json]
//!
//! Loads configuration (falling back to defaults when the file is absent),
//! initializes logging, resolves the site, and renders the dashboard to
//! stdout as text or JSON.

use std::error::Error;
use std::process;

use aqimon_dashboard::config::{
    load_config, resolve_site, ConfigError, DashboardConfig, OutputFormat, DEFAULT_CONFIG_PATH,
};
use aqimon_dashboard::dashboard::{build_report, render_dashboard};
use aqimon_dashboard::logging::{self, init_logger, Component};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

struct CliArgs {
    config_path: Option<String>,
    site: Option<String>,
    json: bool,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = CliArgs {
        config_path: None,
        site: None,
        json: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                args.config_path =
                    Some(iter.next().ok_or("--config requires a path argument")?);
            }
            "--site" => {
                args.site = Some(iter.next().ok_or("--site requires a slug argument")?);
            }
            "--json" => args.json = true,
            other => return Err(format!("unrecognized argument '{}'", other)),
        }
    }
    Ok(args)
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = parse_args()?;

    // An explicitly-passed config path must exist; the default path is
    // optional and falls back to built-in defaults.
    let config_path = cli.config_path;
    let mut missing_config_note = None;
    let mut config = match load_config(config_path.as_deref().unwrap_or(DEFAULT_CONFIG_PATH)) {
        Ok(config) => config,
        Err(ConfigError::Io(msg)) if config_path.is_none() => {
            missing_config_note = Some(msg);
            DashboardConfig::default()
        }
        Err(e) => return Err(Box::new(e)),
    };

    if let Some(site) = cli.site {
        config.display.site = site;
    }
    if cli.json {
        config.display.format = OutputFormat::Json;
    }

    init_logging(&config)?;
    if let Some(msg) = missing_config_note {
        logging::warn(
            Component::Config,
            None,
            &format!("no configuration file ({}), using defaults", msg),
        );
    }

    let site = resolve_site(&config)?;
    logging::info(
        Component::Dashboard,
        Some(site.slug),
        &format!("rendering dashboard for {}", site.name),
    );

    let report = build_report(site)?;
    match config.display.format {
        OutputFormat::Text => print!("{}", render_dashboard(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn init_logging(config: &DashboardConfig) -> Result<(), ConfigError> {
    let level = config.logging.parse_level()?;
    init_logger(
        level,
        config.logging.file.as_deref(),
        config.logging.timestamps,
    );
    Ok(())
}
