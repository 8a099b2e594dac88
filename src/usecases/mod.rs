//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces.
//!
//! Use cases:
//! - `KenoReport`: Compute the probability matrix and expected values,
//!   then export both tables through `TableSink`s

pub mod report;

pub use report::KenoReport;
