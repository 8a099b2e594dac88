//! JSON Sink - Single Pretty-Printed Report
//!
//! Buffers every table and writes them together on `finish`, stamped with
//! the UTC generation time. Values keep full `f64` precision.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::{ensure_dir, write_atomic};
use crate::ports::{Table, TableSink};

/// Document layout of the JSON report.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    tables: &'a [Table],
}

/// Collects tables and writes one JSON report file.
pub struct JsonReportSink {
    /// Destination file.
    path: PathBuf,
    /// Tables received so far.
    tables: Vec<Table>,
}

impl JsonReportSink {
    /// Create a sink writing to `path`, creating its parent directory.
    ///
    /// # Errors
    /// Fails if the parent directory cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir(parent)?;
        }
        Ok(Self {
            path,
            tables: Vec::new(),
        })
    }

    /// Serialize the buffered tables.
    fn render(&self, generated_at: DateTime<Utc>) -> Result<String> {
        let report = JsonReport {
            generated_at,
            tables: &self.tables,
        };
        serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")
    }
}

impl TableSink for JsonReportSink {
    fn name(&self) -> &'static str {
        "json"
    }

    fn write_table(&mut self, table: &Table) -> Result<()> {
        debug!(table = %table.name(), "Buffering table for JSON report");
        self.tables.push(table.clone());
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn finish(&mut self) -> Result<()> {
        let json = self.render(Utc::now())?;
        write_atomic(&self.path, json.as_bytes())?;
        info!(tables = self.tables.len(), "JSON report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_contains_tables_and_timestamp() {
        let mut sink = JsonReportSink {
            path: PathBuf::from("unused.json"),
            tables: Vec::new(),
        };
        let table = Table::new(
            "Expected 'Pay Out' Values",
            "",
            vec!["1 Spot(s) Marked".to_string()],
            vec!["Expected Value".to_string()],
            vec![vec![0.375]],
        )
        .unwrap();
        sink.write_table(&table).unwrap();

        let stamp = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let json: serde_json::Value = serde_json::from_str(&sink.render(stamp).unwrap()).unwrap();

        assert_eq!(json["generated_at"], "2024-01-02T03:04:05Z");
        assert_eq!(json["tables"][0]["name"], "Expected 'Pay Out' Values");
        assert_eq!(json["tables"][0]["values"][0][0], 0.375);
    }
}
