//! Export Adapters - File and Terminal Table Sinks
//!
//! Implements the `TableSink` port three ways: a directory of CSV files
//! (one per table), a single JSON report, and aligned text on any
//! `io::Write`. Files are written to a `.tmp` path and renamed into place
//! so a reader never sees a half-written table.

pub mod console_sink;
pub mod csv_sink;
pub mod json_sink;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use console_sink::ConsoleSink;
pub use csv_sink::CsvDirectorySink;
pub use json_sink::JsonReportSink;

/// File-system friendly stem for a table name.
///
/// Lowercases ASCII alphanumerics and collapses every other run of
/// characters into a single `_`: "Expected 'Pay Out' Values" becomes
/// `expected_pay_out_values`.
pub fn file_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            stem.push(ch.to_ascii_lowercase());
        } else if !stem.is_empty() && !stem.ends_with('_') {
            stem.push('_');
        }
    }
    while stem.ends_with('_') {
        stem.pop();
    }
    if stem.is_empty() {
        stem.push_str("table");
    }
    stem
}

/// Temporary sibling of `path` used for atomic writes.
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `bytes` to `path` via tmp file + rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = tmp_path(path);
    fs::write(&tmp, bytes)
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("Failed to rename {} to {}", tmp.display(), path.display()))?;
    Ok(())
}

/// Create `dir` (and parents) if missing.
fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))
}
