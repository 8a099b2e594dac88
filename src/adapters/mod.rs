//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies (CSV, JSON, terminal output). Each sub-module
//! groups adapters by infrastructure concern.
//!
//! Adapter categories:
//! - `export`: `TableSink` implementations for files and the console

pub mod export;

use std::path::Path;

use anyhow::Result;

use crate::config::OutputConfig;
use crate::ports::TableSink;
use export::{ConsoleSink, CsvDirectorySink, JsonReportSink};

/// Build the sinks enabled in `[output]`, in CSV, JSON, console order.
///
/// # Errors
/// Fails if an output directory cannot be created.
pub fn sinks_from_config(output: &OutputConfig) -> Result<Vec<Box<dyn TableSink>>> {
    let directory = Path::new(&output.directory);
    let mut sinks: Vec<Box<dyn TableSink>> = Vec::new();

    if output.csv {
        sinks.push(Box::new(CsvDirectorySink::new(directory, output.precision)?));
    }
    if output.json {
        sinks.push(Box::new(JsonReportSink::new(
            directory.join(&output.json_file),
        )?));
    }
    if output.console {
        sinks.push(Box::new(ConsoleSink::stdout(output.precision)));
    }

    Ok(sinks)
}
