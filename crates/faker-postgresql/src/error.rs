//! Error types for the mutation engine.

use thiserror::Error;

/// Errors raised by a [`crate::store::RowStore`] implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),

    /// Statement rejected by the store (constraint violation and the like).
    #[error("statement rejected: {0}")]
    Rejected(String),
}

/// Catalog lookup failure. Fatal for the run.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// The catalog could not be queried.
    #[error("failed to read catalog for {schema}.{table}: {source}")]
    Catalog {
        schema: String,
        table: String,
        #[source]
        source: StoreError,
    },

    /// The existence filter query failed.
    #[error("failed to list tables in schema '{schema}': {source}")]
    TableListing {
        schema: String,
        #[source]
        source: StoreError,
    },

    /// No columns were found for the table.
    #[error("table {schema}.{table} not found")]
    TableNotFound { schema: String, table: String },
}

/// A reference or linked-code lookup failed.
///
/// Never surfaced past the mutator: callers fall back to a synthesized value.
#[derive(Error, Debug)]
#[error("lookup of {table}.{column} failed: {source}")]
pub struct LinkLookupError {
    pub table: String,
    pub column: String,
    #[source]
    pub source: StoreError,
}

/// Errors the row mutator propagates to its caller.
#[derive(Error, Debug)]
pub enum MutatorError {
    /// The insert statement failed. Fatal by design.
    #[error("insert into {table} failed: {source}")]
    Insert {
        table: String,
        #[source]
        source: StoreError,
    },

    /// Picking a target row failed; the store is unusable.
    #[error("failed to select a target row from {table}: {source}")]
    TargetSelection {
        table: String,
        #[source]
        source: StoreError,
    },
}

/// Errors that stop a scheduler run.
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// None of the requested tables exist.
    #[error("no target tables found in schema '{0}'")]
    NoTargetTables(String),

    /// The scheduler was started without any table to mutate.
    #[error("scheduler has no tables to mutate")]
    EmptyTableList,

    /// Table metadata could not be read.
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// A mutation failed fatally.
    #[error(transparent)]
    Mutation(#[from] MutatorError),
}

/// Errors loading a column policy file.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// Error reading the policy file
    #[error("Failed to read policy file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A probability outside `[0, 1]`.
    #[error("invalid probability {value} for {table}.{column}")]
    InvalidProbability {
        table: String,
        column: String,
        value: f64,
    },
}
