//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires from
//! the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `TableSink`: Rendering of labelled numeric tables (CSV, JSON, console)

pub mod table_sink;

pub use table_sink::{Table, TableSink};
