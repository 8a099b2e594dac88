//! Domain layer - Keno probability and payout math.
//!
//! Pure functions and immutable values only; no I/O happens here
//! (hexagonal architecture inner ring). Results are returned by value so
//! every engine can be tested in isolation.

pub mod combinatorics;
pub mod error;
pub mod expected_value;
pub mod payout;
pub mod probability;

// Re-export core types for convenience
pub use combinatorics::{checked_factorial, combinations, factorial, partial_factorial};
pub use error::KenoError;
pub use expected_value::ExpectedValues;
pub use payout::PayoutTable;
pub use probability::{keno_probability, standard_keno_probability, GameRules, ProbabilityMatrix};
