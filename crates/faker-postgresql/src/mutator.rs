//! Row mutator: one insert, update or delete against a table.
//!
//! Column values come from the [`ValueSynthesizer`] unless a
//! [`ColumnPolicy`] or the [`ReferenceResolver`] says otherwise. Reference
//! and linked-code lookups run before the write transaction opens and
//! their failures only ever select the fallback branch.
//!
//! Failure semantics differ by operation: a failed insert statement is
//! returned as [`MutatorError::Insert`], while a failed update or delete is
//! rolled back and reported as [`SkipReason::ExecutionFailed`].

use crate::error::{LinkLookupError, MutatorError, StoreError};
use crate::policy::{ColumnPolicy, DeleteGuard, PolicyMap};
use crate::resolver::{ReferenceResolver, SuffixResolver};
use crate::store::{Row, RowKey, RowStore};
use faker_core::{ColumnMeta, SqlValue, TableMeta};
use faker_generator::ValueSynthesizer;
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, warn};

/// Probability that an insert supplies a value for a nullable column.
pub const NULLABLE_SUPPLY_PROBABILITY: f64 = 0.8;

/// Upper bound on the number of columns one update modifies.
pub const MAX_UPDATE_COLUMNS: usize = 3;

/// Why an operation did not change the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Insert selected zero columns.
    NoColumns,
    /// Update/delete found no row to target.
    NoTargetRow,
    /// The table has no column an update may modify.
    NoUpdatableColumns,
    /// Delete refused: a dependent row still references this row.
    Referenced,
    /// Delete refused: the reference check itself failed.
    GuardFailed,
    /// The statement failed and was rolled back.
    ExecutionFailed,
}

/// Result of one mutation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// The row as persisted (or as it was before deletion).
    Applied(Row),
    Skipped(SkipReason),
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied(_))
    }
}

/// Applies single-row mutations through a [`RowStore`].
pub struct RowMutator<S> {
    store: S,
    synth: ValueSynthesizer,
    policies: PolicyMap,
    resolver: Box<dyn ReferenceResolver>,
}

impl<S: RowStore> RowMutator<S> {
    /// Create a mutator with the built-in finance policies and the `_id`
    /// suffix resolver.
    pub fn new(store: S, synth: ValueSynthesizer) -> Self {
        Self {
            store,
            synth,
            policies: PolicyMap::finance_defaults(),
            resolver: Box::new(SuffixResolver::default()),
        }
    }

    /// Replace the column policy map.
    pub fn with_policies(mut self, policies: PolicyMap) -> Self {
        self.policies = policies;
        self
    }

    /// Replace the reference resolver.
    pub fn with_resolver(mut self, resolver: impl ReferenceResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// The shared random source.
    pub fn rng(&mut self) -> &mut impl Rng {
        self.synth.rng()
    }

    /// Insert one synthesized row.
    pub async fn insert(&mut self, table: &TableMeta) -> Result<MutationOutcome, MutatorError> {
        let mut values: Vec<(String, SqlValue)> = Vec::new();

        for column in &table.columns {
            if column.is_auto_generated() {
                continue;
            }
            let policy = self.policies.get(&table.table_name, &column.name).cloned();

            if let Some(ColumnPolicy::NullBias { probability }) = policy {
                if column.nullable && self.synth.rng().random_bool(probability) {
                    continue;
                }
            }

            if let Some(target) = self.resolver.resolve(&table.table_name, &column.name) {
                match self
                    .random_value(&table.schema, &target.table, &target.column)
                    .await
                {
                    Ok(Some(value)) => {
                        values.push((column.name.clone(), value));
                        continue;
                    }
                    Ok(None) => {}
                    Err(e) => debug!("Reference lookup fell back to synthesis: {}", e),
                }
            }

            if let Some(ColumnPolicy::LinkedCode {
                source_table,
                source_column,
                reuse_probability,
            }) = &policy
            {
                match self
                    .random_value(&table.schema, source_table, source_column)
                    .await
                {
                    Ok(found) => {
                        let value = match found {
                            Some(existing) if self.synth.rng().random_bool(*reuse_probability) => {
                                existing
                            }
                            _ => self.synthesize(column),
                        };
                        values.push((column.name.clone(), value));
                        continue;
                    }
                    Err(e) => debug!("Linked code lookup fell back to synthesis: {}", e),
                }
            }

            if !column.nullable || self.synth.rng().random_bool(NULLABLE_SUPPLY_PROBABILITY) {
                let value = self.synthesize(column);
                values.push((column.name.clone(), value));
            }
        }

        if values.is_empty() {
            debug!("Insert into {} selected no columns", table.table_name);
            return Ok(MutationOutcome::Skipped(SkipReason::NoColumns));
        }

        match self.execute_insert(table, &values).await {
            Ok(row) => Ok(MutationOutcome::Applied(row)),
            Err(source) => {
                self.rollback_quietly().await;
                Err(MutatorError::Insert {
                    table: table.qualified_name(),
                    source,
                })
            }
        }
    }

    /// Modify up to [`MAX_UPDATE_COLUMNS`] non-key columns of a random row.
    pub async fn update(&mut self, table: &TableMeta) -> Result<MutationOutcome, MutatorError> {
        let Some(key) = self.pick_row(table).await? else {
            return Ok(MutationOutcome::Skipped(SkipReason::NoTargetRow));
        };

        let candidates = table.updatable_columns();
        if candidates.is_empty() {
            return Ok(MutationOutcome::Skipped(SkipReason::NoUpdatableColumns));
        }
        let count = candidates.len().min(MAX_UPDATE_COLUMNS);
        let chosen: Vec<ColumnMeta> = candidates
            .choose_multiple(self.synth.rng(), count)
            .map(|c| (*c).clone())
            .collect();

        let mut values: Vec<(String, SqlValue)> = Vec::with_capacity(chosen.len());
        for column in &chosen {
            let value = match self.policies.get(&table.table_name, &column.name).cloned() {
                Some(ColumnPolicy::NullBias { probability })
                    if column.nullable && self.synth.rng().random_bool(probability) =>
                {
                    SqlValue::Null
                }
                Some(ColumnPolicy::LinkedCode {
                    source_table,
                    source_column,
                    reuse_probability,
                }) => {
                    match self
                        .random_value(&table.schema, &source_table, &source_column)
                        .await
                    {
                        Ok(Some(existing)) if self.synth.rng().random_bool(reuse_probability) => {
                            existing
                        }
                        Ok(_) => self.synthesize(column),
                        Err(e) => {
                            debug!("Linked code lookup fell back to synthesis: {}", e);
                            self.synthesize(column)
                        }
                    }
                }
                _ => self.synthesize(column),
            };
            values.push((column.name.clone(), value));
        }

        match self.execute_update(table, &values, &key).await {
            Ok(Some(row)) => Ok(MutationOutcome::Applied(row)),
            Ok(None) => Ok(MutationOutcome::Skipped(SkipReason::NoTargetRow)),
            Err(e) => {
                debug!("Update on {} failed: {}", table.table_name, e);
                self.rollback_quietly().await;
                Ok(MutationOutcome::Skipped(SkipReason::ExecutionFailed))
            }
        }
    }

    /// Delete a random row, unless a delete guard refuses it.
    pub async fn delete(&mut self, table: &TableMeta) -> Result<MutationOutcome, MutatorError> {
        let Some(key) = self.pick_row(table).await? else {
            return Ok(MutationOutcome::Skipped(SkipReason::NoTargetRow));
        };

        for guard in self.policies.delete_guards(&table.table_name) {
            match self.is_referenced(table, &key, &guard).await {
                Ok(false) => {}
                Ok(true) => {
                    debug!(
                        "Delete on {} refused: still referenced by {}.{}",
                        table.table_name, guard.dependent_table, guard.dependent_column
                    );
                    return Ok(MutationOutcome::Skipped(SkipReason::Referenced));
                }
                Err(e) => {
                    debug!("Delete guard on {} failed: {}", table.table_name, e);
                    return Ok(MutationOutcome::Skipped(SkipReason::GuardFailed));
                }
            }
        }

        match self.execute_delete(table, &key).await {
            Ok(Some(row)) => Ok(MutationOutcome::Applied(row)),
            Ok(None) => Ok(MutationOutcome::Skipped(SkipReason::NoTargetRow)),
            Err(e) => {
                debug!("Delete on {} failed: {}", table.table_name, e);
                self.rollback_quietly().await;
                Ok(MutationOutcome::Skipped(SkipReason::ExecutionFailed))
            }
        }
    }

    fn synthesize(&mut self, column: &ColumnMeta) -> SqlValue {
        self.synth
            .synthesize(&column.declared_type, Some(&column.name))
    }

    /// Draw a row offset uniformly from `0..count`.
    fn pick_offset(&mut self, count: u64) -> Option<u64> {
        if count == 0 {
            None
        } else {
            Some(self.synth.rng().random_range(0..count))
        }
    }

    /// Identity of a uniformly chosen row, `None` for an empty table.
    async fn pick_row(&mut self, table: &TableMeta) -> Result<Option<RowKey>, MutatorError> {
        let selection_error = |source| MutatorError::TargetSelection {
            table: table.qualified_name(),
            source,
        };

        let count = self
            .store
            .count_rows(&table.schema, &table.table_name)
            .await
            .map_err(selection_error)?;
        let Some(offset) = self.pick_offset(count) else {
            return Ok(None);
        };
        self.store
            .row_key_at(table, offset)
            .await
            .map_err(selection_error)
    }

    /// One value of `source_table.column` from a uniformly chosen row.
    async fn random_value(
        &mut self,
        schema: &str,
        source_table: &str,
        column: &str,
    ) -> Result<Option<SqlValue>, LinkLookupError> {
        let lookup_error = |source| LinkLookupError {
            table: source_table.to_string(),
            column: column.to_string(),
            source,
        };

        let count = self
            .store
            .count_rows(schema, source_table)
            .await
            .map_err(lookup_error)?;
        let Some(offset) = self.pick_offset(count) else {
            return Ok(None);
        };
        self.store
            .value_at(schema, source_table, column, offset)
            .await
            .map_err(lookup_error)
    }

    async fn is_referenced(
        &mut self,
        table: &TableMeta,
        key: &RowKey,
        guard: &DeleteGuard,
    ) -> Result<bool, StoreError> {
        let code = self
            .store
            .value_for_key(table, &guard.source_column, key)
            .await?;
        match code {
            Some(code) if !code.is_null() => {
                self.store
                    .value_exists(
                        &table.schema,
                        &guard.dependent_table,
                        &guard.dependent_column,
                        &code,
                    )
                    .await
            }
            _ => Ok(false),
        }
    }

    async fn execute_insert(
        &mut self,
        table: &TableMeta,
        values: &[(String, SqlValue)],
    ) -> Result<Row, StoreError> {
        self.store.begin().await?;
        let row = self.store.insert_row(table, values).await?;
        self.store.commit().await?;
        Ok(row)
    }

    async fn execute_update(
        &mut self,
        table: &TableMeta,
        values: &[(String, SqlValue)],
        key: &RowKey,
    ) -> Result<Option<Row>, StoreError> {
        self.store.begin().await?;
        let row = self.store.update_row(table, values, key).await?;
        self.store.commit().await?;
        Ok(row)
    }

    async fn execute_delete(
        &mut self,
        table: &TableMeta,
        key: &RowKey,
    ) -> Result<Option<Row>, StoreError> {
        self.store.begin().await?;
        let row = self.store.delete_row(table, key).await?;
        self.store.commit().await?;
        Ok(row)
    }

    async fn rollback_quietly(&mut self) {
        if let Err(e) = self.store.rollback().await {
            warn!("Rollback failed: {}", e);
        }
    }
}
