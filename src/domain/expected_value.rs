//! Expected return of a $1 bet for each spots-marked count.
//!
//! Each paying catch contributes `P(spots, caught) * payout / (spots + 1)`.
//! The `spots + 1` divisor averages over the catch outcomes `0..=spots`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::KenoError;
use super::payout::PayoutTable;
use super::probability::ProbabilityMatrix;

/// One expected value per payout-sheet row (1 spot, 2 spots, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedValues {
    values: Vec<f64>,
}

impl ExpectedValues {
    /// Combines catch probabilities with the payout sheet.
    ///
    /// # Errors
    /// Returns [`KenoError::PayoutExceedsMatrix`] if the sheet has more
    /// rows than the matrix.
    pub fn compute(
        matrix: &ProbabilityMatrix,
        payouts: &PayoutTable,
    ) -> Result<Self, KenoError> {
        if payouts.rows() > matrix.rows() {
            return Err(KenoError::PayoutExceedsMatrix {
                payout_rows: payouts.rows(),
                matrix_rows: matrix.rows(),
            });
        }

        let values = (1..=payouts.rows())
            .map(|spots| {
                #[allow(clippy::cast_precision_loss)]
                let outcomes = (spots + 1) as f64;
                let value = (1..=payouts.columns())
                    .map(|caught| (caught, payouts.payout_f64(spots, caught)))
                    .filter(|&(_, prize)| prize > 0.0)
                    .fold(0.0, |acc, (caught, prize)| {
                        acc + matrix.get(spots, caught) * prize / outcomes
                    });
                debug!(spots, expected_value = value, "expected value");
                value
            })
            .collect();

        Ok(Self { values })
    }

    /// Expected value for `spots` marked, or `None` outside the sheet.
    pub fn get(&self, spots: usize) -> Option<f64> {
        spots
            .checked_sub(1)
            .and_then(|i| self.values.get(i))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// `(spots, expected value)` pairs in ascending spot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &value)| (i + 1, value))
    }
}
