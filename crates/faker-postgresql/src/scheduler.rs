//! Operation scheduler: drives a fixed number of random mutations.

use crate::catalog;
use crate::error::SchedulerError;
use crate::mutator::{MutationOutcome, RowMutator};
use crate::store::RowStore;
use faker_core::{OperationKind, OperationTally, TableMeta};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, info};

/// `p < INSERT_THRESHOLD` selects an insert.
pub const INSERT_THRESHOLD: f64 = 0.55;

/// `INSERT_THRESHOLD <= p < UPDATE_THRESHOLD` selects an update; the rest delete.
pub const UPDATE_THRESHOLD: f64 = 0.85;

/// Attempts between two progress lines.
pub const PROGRESS_INTERVAL: usize = 25;

/// Map a draw in `[0, 1)` to an operation kind.
pub fn kind_for_draw(p: f64) -> OperationKind {
    if p < INSERT_THRESHOLD {
        OperationKind::Insert
    } else if p < UPDATE_THRESHOLD {
        OperationKind::Update
    } else {
        OperationKind::Delete
    }
}

/// Filter `candidates` to the tables present in `schema` and fetch their
/// metadata.
///
/// Fails with [`SchedulerError::NoTargetTables`] when none exist.
pub async fn prepare_tables<S: RowStore + ?Sized>(
    store: &mut S,
    schema: &str,
    candidates: &[String],
) -> Result<Vec<TableMeta>, SchedulerError> {
    let existing = catalog::existing_tables(store, schema, candidates).await?;
    if existing.is_empty() {
        return Err(SchedulerError::NoTargetTables(schema.to_string()));
    }

    let mut tables = Vec::with_capacity(existing.len());
    for table in &existing {
        tables.push(catalog::table_meta(store, schema, table).await?);
    }
    info!("Target tables in schema '{}': {:?}", schema, existing);
    Ok(tables)
}

/// Runs operations against a fixed set of tables.
pub struct Scheduler<S> {
    mutator: RowMutator<S>,
    tables: Vec<TableMeta>,
    tally: OperationTally,
}

impl<S: RowStore> Scheduler<S> {
    pub fn new(mutator: RowMutator<S>, tables: Vec<TableMeta>) -> Self {
        Self {
            mutator,
            tables,
            tally: OperationTally::default(),
        }
    }

    /// Counts of applied operations so far.
    pub fn tally(&self) -> &OperationTally {
        &self.tally
    }

    pub fn into_mutator(self) -> RowMutator<S> {
        self.mutator
    }

    /// Attempt `operations` mutations and return the cumulative tally.
    ///
    /// Skipped operations count as attempts but not in the tally. An insert
    /// failure or a failed target selection aborts the run.
    pub async fn run(&mut self, operations: usize) -> Result<OperationTally, SchedulerError> {
        if self.tables.is_empty() {
            return Err(SchedulerError::EmptyTableList);
        }

        for attempt in 1..=operations {
            let Some(table) = self.tables.choose(self.mutator.rng()).cloned() else {
                break;
            };
            let kind = self.choose_kind();

            let outcome = match kind {
                OperationKind::Insert => self.mutator.insert(&table).await?,
                OperationKind::Update => self.mutator.update(&table).await?,
                OperationKind::Delete => self.mutator.delete(&table).await?,
            };

            match outcome {
                MutationOutcome::Applied(_) => self.tally.record(kind),
                MutationOutcome::Skipped(reason) => {
                    debug!("{} on {} skipped: {:?}", kind, table.table_name, reason)
                }
            }

            if attempt % PROGRESS_INTERVAL == 0 {
                info!("Progress {}/{}: {}", attempt, operations, self.tally);
            }
        }

        Ok(self.tally)
    }

    fn choose_kind(&mut self) -> OperationKind {
        let p: f64 = self.mutator.rng().random();
        kind_for_draw(p)
    }
}
