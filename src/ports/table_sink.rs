//! Table Sink Port - Tabular Output Interface
//!
//! The numeric core hands finished tables to a `TableSink`; whether they
//! end up in CSV files, a JSON document or a terminal is an adapter
//! concern. A `Table` is a labelled 2-D grid of `f64` values.

use serde::{Deserialize, Serialize};

use crate::domain::KenoError;

/// A labelled numeric grid ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Sheet / section name, e.g. "Keno Probability Matrix".
    name: String,
    /// Label for the top-left cell (above the row headers).
    corner: String,
    /// One label per row.
    row_headers: Vec<String>,
    /// One label per value column.
    column_headers: Vec<String>,
    /// `values[row][column]`.
    values: Vec<Vec<f64>>,
}

impl Table {
    /// Builds a table, checking headers against the value grid.
    ///
    /// # Errors
    /// Returns [`KenoError::InvalidTable`] if the number of rows differs
    /// from the row headers or any row differs from the column headers.
    pub fn new(
        name: impl Into<String>,
        corner: impl Into<String>,
        row_headers: Vec<String>,
        column_headers: Vec<String>,
        values: Vec<Vec<f64>>,
    ) -> Result<Self, KenoError> {
        let name = name.into();

        if values.len() != row_headers.len() {
            return Err(KenoError::InvalidTable {
                name,
                reason: format!(
                    "{} rows of values but {} row headers",
                    values.len(),
                    row_headers.len()
                ),
            });
        }
        if let Some((i, row)) = values
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != column_headers.len())
        {
            return Err(KenoError::InvalidTable {
                name,
                reason: format!(
                    "row {} has {} values but there are {} column headers",
                    i + 1,
                    row.len(),
                    column_headers.len()
                ),
            });
        }

        Ok(Self {
            name,
            corner: corner.into(),
            row_headers,
            column_headers,
            values,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn corner(&self) -> &str {
        &self.corner
    }

    pub fn row_headers(&self) -> &[String] {
        &self.row_headers
    }

    pub fn column_headers(&self) -> &[String] {
        &self.column_headers
    }

    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn row_count(&self) -> usize {
        self.row_headers.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_headers.len()
    }

    /// Header/value pairs, one per row.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[f64])> + '_ {
        self.row_headers
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(Vec::as_slice))
    }
}

/// Destination for rendered tables.
///
/// A report calls [`TableSink::write_table`] once per table, in order, and
/// then [`TableSink::finish`] exactly once. Sinks that buffer (e.g. a single
/// JSON document) flush in `finish`.
pub trait TableSink {
    /// Short identifier used in logs and error context.
    fn name(&self) -> &'static str;

    /// Render one table.
    fn write_table(&mut self, table: &Table) -> anyhow::Result<()>;

    /// Flush anything buffered. Default is a no-op.
    fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}
