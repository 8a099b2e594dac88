//! Domain error type.
//!
//! Every failure the pure Keno math can report. Application code wraps
//! these with `anyhow::Context` at the I/O boundaries.

use thiserror::Error;

/// Errors raised while validating game inputs or shaping output tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KenoError {
    /// Ball counts or spot limits are inconsistent.
    #[error("invalid game rules: {0}")]
    InvalidRules(String),

    /// Payout sheet contains a negative prize or an impossible catch.
    #[error("invalid payout table: {0}")]
    InvalidPayout(String),

    /// Payout sheet asks for more spots than the probability matrix holds.
    #[error("payout table has {payout_rows} rows but probability matrix only covers {matrix_rows} spots")]
    PayoutExceedsMatrix {
        payout_rows: usize,
        matrix_rows: usize,
    },

    /// Header and value dimensions disagree.
    #[error("table '{name}' is malformed: {reason}")]
    InvalidTable { name: String, reason: String },
}
