//! Core types for the db-faker mutation engine.
//!
//! This crate provides the foundational types shared by the generator and
//! the store-facing crates:
//!
//! - [`ColumnMeta`] / [`TableMeta`] - catalog snapshot of a table
//! - [`SqlValue`] - a single synthesized or fetched scalar
//! - [`OperationKind`] / [`OperationTally`] - what the scheduler counts
//!
//! # Architecture
//!
//! ```text
//! faker-core (this crate)
//!    │
//!    ├─── faker-generator   (synthesizes SqlValue from declared types)
//!    │
//!    └─── faker-postgresql  (catalog, row store, mutator, scheduler)
//! ```

pub mod schema;
pub mod tally;
pub mod values;

// Re-exports for convenience
pub use schema::{ColumnMeta, TableMeta};
pub use tally::{OperationKind, OperationTally};
pub use values::SqlValue;
