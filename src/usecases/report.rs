//! Keno Report - Compute Both Tables and Export Them
//!
//! Chains the probability engine into the expected-value engine, labels
//! the results as tables and hands them to every configured sink.

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::domain::{ExpectedValues, GameRules, KenoError, PayoutTable, ProbabilityMatrix};
use crate::ports::{Table, TableSink};

/// Sheet name of the probability matrix.
pub const PROBABILITY_TABLE_NAME: &str = "Keno Probability Matrix";
/// Sheet name of the expected-value column.
pub const EXPECTED_VALUE_TABLE_NAME: &str = "Expected 'Pay Out' Values";
/// Column header of the expected-value column.
pub const EXPECTED_VALUE_HEADER: &str = "Expected Value";

/// Row label for `n` spots marked.
pub fn spots_header(n: usize) -> String {
    format!("{n} Spot(s) Marked")
}

/// Column label for `n` balls caught.
pub fn caught_header(n: usize) -> String {
    format!("{n} Ball(s) Caught")
}

/// The probability matrix as a table: rows are 1..=max spots, columns are
/// 0..=max catches.
///
/// # Errors
/// Only fails if the matrix is ragged, which [`ProbabilityMatrix::compute`]
/// never produces.
pub fn probability_table(matrix: &ProbabilityMatrix) -> Result<Table, KenoError> {
    Table::new(
        PROBABILITY_TABLE_NAME,
        "",
        (1..=matrix.rows()).map(spots_header).collect(),
        (0..matrix.columns()).map(caught_header).collect(),
        matrix.cells().to_vec(),
    )
}

/// The expected values as a single-column table.
///
/// # Errors
/// See [`Table::new`]; the shape is always consistent here.
pub fn expected_value_table(values: &ExpectedValues) -> Result<Table, KenoError> {
    Table::new(
        EXPECTED_VALUE_TABLE_NAME,
        "",
        (1..=values.len()).map(spots_header).collect(),
        vec![EXPECTED_VALUE_HEADER.to_string()],
        values.as_slice().iter().map(|&v| vec![v]).collect(),
    )
}

/// Both computed artifacts for one game variant.
#[derive(Debug, Clone, PartialEq)]
pub struct KenoReport {
    matrix: ProbabilityMatrix,
    expected_values: ExpectedValues,
}

impl KenoReport {
    /// Compute the probability matrix, then the expected values.
    ///
    /// # Errors
    /// Fails on invalid rules or a payout sheet larger than the matrix.
    pub fn compute(rules: &GameRules, payouts: &PayoutTable) -> Result<Self, KenoError> {
        let matrix = ProbabilityMatrix::compute(rules)?;
        info!(
            rows = matrix.rows(),
            columns = matrix.columns(),
            total_balls = rules.total_balls,
            drawn_balls = rules.drawn_balls,
            "Probability matrix computed"
        );

        let expected_values = ExpectedValues::compute(&matrix, payouts)?;
        info!(spots = expected_values.len(), "Expected values computed");

        Ok(Self {
            matrix,
            expected_values,
        })
    }

    pub const fn matrix(&self) -> &ProbabilityMatrix {
        &self.matrix
    }

    pub const fn expected_values(&self) -> &ExpectedValues {
        &self.expected_values
    }

    /// The two tables in export order.
    ///
    /// # Errors
    /// See [`probability_table`].
    pub fn tables(&self) -> Result<[Table; 2], KenoError> {
        Ok([
            probability_table(&self.matrix)?,
            expected_value_table(&self.expected_values)?,
        ])
    }

    /// Write both tables to every sink, then finish each sink.
    ///
    /// Sinks run in order; the first failure aborts the export.
    ///
    /// # Errors
    /// Returns the failing sink's error with its name attached.
    #[instrument(skip(self, sinks), fields(sinks = sinks.len()))]
    pub fn export(&self, sinks: &mut [Box<dyn TableSink>]) -> Result<()> {
        let tables = self.tables()?;

        for sink in sinks.iter_mut() {
            for table in &tables {
                sink.write_table(table).with_context(|| {
                    format!("Sink '{}' failed writing '{}'", sink.name(), table.name())
                })?;
            }
            sink.finish()
                .with_context(|| format!("Sink '{}' failed to finish", sink.name()))?;
            info!(sink = sink.name(), tables = tables.len(), "Export complete");
        }

        Ok(())
    }
}
