//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Environment variable naming an alternate config file.
pub const CONFIG_PATH_ENV: &str = "KENO_CONFIG";

/// Highest decimal precision worth printing for an `f64`.
const MAX_PRECISION: usize = 17;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)
    .with_context(|| format!("Invalid configuration in {}", path.display()))?;

  info!(
    path = %path.display(),
    total_balls = config.game.total_balls,
    drawn_balls = config.game.drawn_balls,
    max_spots = config.game.max_spots,
    payout_rows = config.payouts.table.rows(),
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Resolve the config source for a run.
///
/// An explicit path (from `KENO_CONFIG`) must exist. The default
/// `config.toml` is optional; without it the standard game is used.
///
/// # Errors
/// Propagates any [`load_config`] failure, and fails when validating the
/// built-in defaults fails.
pub fn load_or_default(explicit: Option<&str>) -> Result<AppConfig> {
  match explicit {
    Some(path) => load_config(path),
    None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH),
    None => {
      let config = AppConfig::default();
      validate_config(&config)?;
      info!("No config.toml found, using standard Keno rules");
      Ok(config)
    }
  }
}

/// Parse and validate configuration from TOML text.
///
/// # Errors
/// Fails on malformed TOML or when [`validate_config`] rejects the values.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig =
    toml::from_str(content).with_context(|| "Failed to parse config.toml")?;

  validate_config(&config)?;

  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Consistent ball counts and spot limit
/// - A payout sheet that fits inside the probability matrix
/// - Sensible output settings
fn validate_config(config: &AppConfig) -> Result<()> {
  // Game validation
  config
    .game
    .validate()
    .context("Invalid [game] section")?;

  // Payout validation (entries are checked while deserializing)
  let payout_rows = config.payouts.table.rows();
  anyhow::ensure!(
    payout_rows <= config.game.max_spots as usize,
    "Payout table has {} rows but max_spots is {}",
    payout_rows,
    config.game.max_spots
  );

  // Output validation
  anyhow::ensure!(
    config.output.csv || config.output.json || config.output.console,
    "At least one output (csv, json, console) must be enabled"
  );
  anyhow::ensure!(
    config.output.precision <= MAX_PRECISION,
    "output.precision must be at most {}, got {}",
    MAX_PRECISION,
    config.output.precision
  );
  anyhow::ensure!(
    !config.output.directory.is_empty(),
    "output.directory must not be empty"
  );
  anyhow::ensure!(
    !config.output.json_file.is_empty(),
    "output.json_file must not be empty"
  );

  Ok(())
}
