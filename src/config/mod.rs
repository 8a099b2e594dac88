//! Configuration Module - TOML-based Report Configuration
//!
//! Loads and validates `config.toml`. Every section is optional: an empty
//! file (or no file at all) describes standard 80-ball Keno with the
//! built-in 1 to 9 spot payout sheet. Ball counts and prizes live here,
//! never hardcoded in the domain layer, so alternate variants can be run.

pub mod loader;

use serde::Deserialize;

use crate::domain::{GameRules, PayoutTable};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
  /// Logging behaviour.
  pub app: AppSection,
  /// Ball pool, draw size and spot limit.
  pub game: GameRules,
  /// Prize sheet used for expected values.
  pub payouts: PayoutConfig,
  /// Where and how tables are rendered.
  pub output: OutputConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSection {
  /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
  pub log_level: String,
  /// Emit JSON log lines instead of the human-readable format.
  pub json_logs: bool,
}

/// Payout sheet configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PayoutConfig {
  /// Rows of prizes, `table[spots - 1][caught - 1]`.
  pub table: PayoutTable,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
  /// Directory receiving CSV and JSON files.
  pub directory: String,
  /// Decimal places written for each probability.
  pub precision: usize,
  /// Write one CSV file per table.
  pub csv: bool,
  /// Write a single JSON report.
  pub json: bool,
  /// File name of the JSON report inside `directory`.
  pub json_file: String,
  /// Print tables to stdout.
  pub console: bool,
}

impl Default for AppSection {
  fn default() -> Self {
    Self {
      log_level: default_log_level(),
      json_logs: false,
    }
  }
}

impl Default for OutputConfig {
  fn default() -> Self {
    Self {
      directory: default_output_dir(),
      precision: default_precision(),
      csv: true,
      json: true,
      json_file: default_json_file(),
      console: true,
    }
  }
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

fn default_output_dir() -> String {
  "data".to_string()
}

const fn default_precision() -> usize {
  10
}

fn default_json_file() -> String {
  "keno.json".to_string()
}
