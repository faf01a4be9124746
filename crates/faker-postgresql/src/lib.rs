//! Schema-driven mutation engine for PostgreSQL.
//!
//! Reads table metadata from the catalog, then applies a stream of random
//! inserts, updates and deletes with values from `faker-generator`.
//!
//! # Components
//!
//! - [`catalog`] - column and primary-key metadata, existence filter
//! - [`store`] - the [`RowStore`] seam; [`PgStore`] is the live implementation
//! - [`policy`] - per-column rules ([`PolicyMap`]) and derived delete guards
//! - [`resolver`] - reference guessing behind [`ReferenceResolver`]
//! - [`mutator`] - one insert/update/delete per call
//! - [`scheduler`] - operation mix, progress reporting and the final tally
//!
//! # Example
//!
//! ```rust,no_run
//! use faker_generator::ValueSynthesizer;
//! use faker_postgresql::{prepare_tables, PgStore, RowMutator, Scheduler};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut store = PgStore::connect("host=localhost user=postgres dbname=finance").await?;
//! let tables = prepare_tables(&mut store, "public", &["party".to_string()]).await?;
//! let mutator = RowMutator::new(store, ValueSynthesizer::new(Some(42)));
//! let tally = Scheduler::new(mutator, tables).run(200).await?;
//! println!("{tally}");
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod catalog;
pub mod error;
#[cfg(test)]
mod memory;
pub mod mutator;
pub mod policy;
pub mod postgres;
pub mod resolver;
pub mod scheduler;
pub mod store;

pub use args::{ConnectionArgs, MutateArgs, PostgreSQLFakerArgs, DEFAULT_TABLES};
pub use error::{
    LinkLookupError, MetadataError, MutatorError, PolicyError, SchedulerError, StoreError,
};
pub use mutator::{MutationOutcome, RowMutator, SkipReason};
pub use policy::{ColumnPolicy, DeleteGuard, PolicyMap};
pub use postgres::PgStore;
pub use resolver::{NoReferences, ReferenceResolver, ReferenceTarget, SuffixResolver};
pub use scheduler::{prepare_tables, Scheduler};
pub use store::{Row, RowKey, RowStore};
