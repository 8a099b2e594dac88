//! CSV Sink - One CSV File per Table
//!
//! Each table becomes `<directory>/<file_stem(name)>.csv`. The first
//! record is the corner label followed by the column headers; each
//! following record is a row header followed by its values at the
//! configured decimal precision.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, instrument};

use super::{ensure_dir, file_stem, write_atomic};
use crate::ports::{Table, TableSink};

/// Writes every table to its own CSV file in a directory.
pub struct CsvDirectorySink {
    /// Output directory.
    directory: PathBuf,
    /// Decimal places per value.
    precision: usize,
}

impl CsvDirectorySink {
    /// Create a sink writing into `directory`, creating it if needed.
    ///
    /// # Errors
    /// Fails if the directory cannot be created.
    pub fn new(directory: impl AsRef<Path>, precision: usize) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        ensure_dir(&directory)?;
        Ok(Self {
            directory,
            precision,
        })
    }

    /// Path the given table name is written to.
    pub fn path_for(&self, table_name: &str) -> PathBuf {
        self.directory.join(format!("{}.csv", file_stem(table_name)))
    }

    /// Encode a table as CSV bytes.
    fn encode(&self, table: &Table) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let header = std::iter::once(table.corner())
            .chain(table.column_headers().iter().map(String::as_str));
        writer
            .write_record(header)
            .context("Failed to write CSV header")?;

        for (label, values) in table.rows() {
            let record = std::iter::once(label.to_string()).chain(
                values
                    .iter()
                    .map(|v| format!("{v:.prec$}", prec = self.precision)),
            );
            writer
                .write_record(record)
                .with_context(|| format!("Failed to write CSV row '{label}'"))?;
        }

        writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV buffer: {}", e.error()))
    }
}

impl TableSink for CsvDirectorySink {
    fn name(&self) -> &'static str {
        "csv"
    }

    #[instrument(skip(self, table), fields(table = %table.name()))]
    fn write_table(&mut self, table: &Table) -> Result<()> {
        let path = self.path_for(table.name());
        let bytes = self.encode(table)?;
        write_atomic(&path, &bytes)?;

        info!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "CSV table written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            "Sample Sheet",
            "",
            vec!["1 Spot(s) Marked".to_string(), "2 Spot(s) Marked".to_string()],
            vec!["0 Ball(s) Caught".to_string(), "1 Ball(s) Caught".to_string()],
            vec![vec![0.75, 0.25], vec![0.5, 0.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_encode_layout() {
        let sink = CsvDirectorySink {
            directory: PathBuf::from("unused"),
            precision: 3,
        };
        let text = String::from_utf8(sink.encode(&sample()).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                ",0 Ball(s) Caught,1 Ball(s) Caught",
                "1 Spot(s) Marked,0.750,0.250",
                "2 Spot(s) Marked,0.500,0.000",
            ]
        );
    }

    #[test]
    fn test_path_for_uses_stem() {
        let sink = CsvDirectorySink {
            directory: PathBuf::from("out"),
            precision: 10,
        };
        assert_eq!(sink.path_for("Sample Sheet"), Path::new("out/sample_sheet.csv"));
    }
}
