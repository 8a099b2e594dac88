//! Keno payout sheet.
//!
//! Prizes are dollar amounts returned on a $1 bet, kept as `Decimal` so the
//! configured sheet round-trips exactly. Row `m` is `m + 1` spots marked,
//! column `c` is `c + 1` balls caught; zero means "no prize".

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::KenoError;

/// Payout for each (spots marked, balls caught) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Decimal>>", into = "Vec<Vec<Decimal>>")]
pub struct PayoutTable {
    rows: Vec<Vec<Decimal>>,
}

impl PayoutTable {
    /// Builds a payout sheet from raw rows.
    ///
    /// Short rows are padded with zeros to the widest row.
    ///
    /// # Errors
    /// Returns [`KenoError::InvalidPayout`] if the sheet is empty, holds a
    /// negative prize, or pays for catching more balls than were marked.
    pub fn new(rows: Vec<Vec<Decimal>>) -> Result<Self, KenoError> {
        if rows.is_empty() {
            return Err(KenoError::InvalidPayout("payout table is empty".to_string()));
        }

        for (m, row) in rows.iter().enumerate() {
            for (c, prize) in row.iter().enumerate() {
                if *prize < Decimal::ZERO {
                    return Err(KenoError::InvalidPayout(format!(
                        "negative payout {prize} for {} spot(s) catching {}",
                        m + 1,
                        c + 1
                    )));
                }
                if c > m && !prize.is_zero() {
                    return Err(KenoError::InvalidPayout(format!(
                        "payout {prize} for catching {} ball(s) with only {} spot(s) marked",
                        c + 1,
                        m + 1
                    )));
                }
            }
        }

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Decimal::ZERO);
                row
            })
            .collect();

        Ok(Self { rows })
    }

    /// The 1 to 9 spot sheet for a $1 bet.
    pub fn standard() -> Self {
        let z = Decimal::ZERO;
        Self {
            rows: vec![
                vec![dec!(3), z, z, z, z, z, z, z, z],
                vec![z, dec!(12), z, z, z, z, z, z, z],
                vec![z, dec!(1), dec!(42), z, z, z, z, z, z],
                vec![z, dec!(1), dec!(3), dec!(120), z, z, z, z, z],
                vec![z, z, dec!(1), dec!(9), dec!(800), z, z, z, z],
                vec![z, z, dec!(1), dec!(4), dec!(88), dec!(1500), z, z, z],
                vec![z, z, z, dec!(2), dec!(20), dec!(350), dec!(700), z, z],
                vec![z, z, z, z, dec!(9), dec!(90), dec!(1500), dec!(20000), z],
                vec![z, z, z, z, dec!(4), dec!(43), dec!(3000), dec!(4000), dec!(25000)],
            ],
        }
    }

    /// Number of spots-marked rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of catch columns.
    pub fn columns(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Prize for catching `caught` balls with `spots` marked; zero outside the sheet.
    pub fn payout(&self, spots: usize, caught: usize) -> Decimal {
        spots
            .checked_sub(1)
            .zip(caught.checked_sub(1))
            .and_then(|(m, c)| self.rows.get(m).and_then(|row| row.get(c)))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// [`PayoutTable::payout`] as `f64`, for weighting by probabilities.
    pub fn payout_f64(&self, spots: usize, caught: usize) -> f64 {
        self.payout(spots, caught).to_f64().unwrap_or(0.0)
    }
}

impl Default for PayoutTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Vec<Decimal>>> for PayoutTable {
    type Error = KenoError;

    fn try_from(rows: Vec<Vec<Decimal>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<PayoutTable> for Vec<Vec<Decimal>> {
    fn from(table: PayoutTable) -> Self {
        table.rows
    }
}
