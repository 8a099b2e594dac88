//! Keno Odds — Entry Point
//!
//! Computes the Keno probability matrix and the expected value of a $1
//! bet, then renders both tables to the configured outputs.
//!
//! Wiring sequence:
//! 1. Load config.toml (or `KENO_CONFIG`) + validate
//! 2. Init tracing (stderr, JSON or human-readable)
//! 3. Compute probability matrix → expected values
//! 4. Build sinks from `[output]` (CSV dir, JSON report, console)
//! 5. Export both tables to every sink

use std::env;

use anyhow::{Context, Result};
use tracing::info;

use keno_odds::adapters::sinks_from_config;
use keno_odds::config::{self, AppConfig};
use keno_odds::usecases::KenoReport;

fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let explicit = env::var(config::loader::CONFIG_PATH_ENV).ok();
    let config = config::loader::load_or_default(explicit.as_deref())
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured logging ────────────────────
    init_tracing(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        total_balls = config.game.total_balls,
        drawn_balls = config.game.drawn_balls,
        max_spots = config.game.max_spots,
        "Starting Keno odds report"
    );

    // ── 3. Compute both artifacts ───────────────────────────
    let report = KenoReport::compute(&config.game, &config.payouts.table)
        .context("Failed to compute Keno tables")?;

    // ── 4. Build output sinks ───────────────────────────────
    let mut sinks = sinks_from_config(&config.output).context("Failed to prepare outputs")?;

    // ── 5. Export ───────────────────────────────────────────
    report.export(&mut sinks)?;

    info!(
        directory = %config.output.directory,
        sinks = sinks.len(),
        "Report complete"
    );
    Ok(())
}

/// Logs go to stderr so console tables on stdout stay clean.
fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.app.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.app.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}
