//! The row store seam between the mutation engine and a live database.

use crate::error::StoreError;
use async_trait::async_trait;
use faker_core::{ColumnMeta, SqlValue, TableMeta};

/// A persisted row handed back by a write, as a JSON object.
pub type Row = serde_json::Value;

/// Identity of a target row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowKey {
    /// Primary-key tuple, in key order.
    PrimaryKey(Vec<(String, SqlValue)>),

    /// Storage-level locator for tables without a primary key.
    Locator(String),
}

/// Store handle used by the catalog reader and the row mutator.
///
/// Implementations quote identifiers themselves; values always travel as
/// parameters. Reads that pick "a random row" are split into a count and an
/// offset read so the caller's seeded RNG decides which row is taken, and
/// every offset read uses a stable order.
#[async_trait]
pub trait RowStore: Send {
    /// Subset of `candidates` that exist in `schema`, in candidate order.
    async fn existing_tables(
        &mut self,
        schema: &str,
        candidates: &[String],
    ) -> Result<Vec<String>, StoreError>;

    /// Columns of a table in declaration order (empty when the table is absent).
    async fn columns(&mut self, schema: &str, table: &str) -> Result<Vec<ColumnMeta>, StoreError>;

    /// Primary key column names in key order.
    async fn primary_key(&mut self, schema: &str, table: &str) -> Result<Vec<String>, StoreError>;

    /// Number of rows in a table.
    async fn count_rows(&mut self, schema: &str, table: &str) -> Result<u64, StoreError>;

    /// Identity of the row at `offset` (key order, or storage order without a key).
    async fn row_key_at(
        &mut self,
        table: &TableMeta,
        offset: u64,
    ) -> Result<Option<RowKey>, StoreError>;

    /// Value of `column` in the row at `offset`, ordered by that column.
    async fn value_at(
        &mut self,
        schema: &str,
        table: &str,
        column: &str,
        offset: u64,
    ) -> Result<Option<SqlValue>, StoreError>;

    /// Value of `column` in the row identified by `key`.
    async fn value_for_key(
        &mut self,
        table: &TableMeta,
        column: &str,
        key: &RowKey,
    ) -> Result<Option<SqlValue>, StoreError>;

    /// Whether any row of `table` holds `value` in `column`.
    async fn value_exists(
        &mut self,
        schema: &str,
        table: &str,
        column: &str,
        value: &SqlValue,
    ) -> Result<bool, StoreError>;

    /// Open a transaction.
    async fn begin(&mut self) -> Result<(), StoreError>;

    /// Commit the open transaction.
    async fn commit(&mut self) -> Result<(), StoreError>;

    /// Roll back the open transaction.
    async fn rollback(&mut self) -> Result<(), StoreError>;

    /// Insert one row and return it as persisted.
    async fn insert_row(
        &mut self,
        table: &TableMeta,
        values: &[(String, SqlValue)],
    ) -> Result<Row, StoreError>;

    /// Update the row identified by `key`; `None` when it no longer exists.
    async fn update_row(
        &mut self,
        table: &TableMeta,
        values: &[(String, SqlValue)],
        key: &RowKey,
    ) -> Result<Option<Row>, StoreError>;

    /// Delete the row identified by `key`; `None` when it no longer exists.
    async fn delete_row(
        &mut self,
        table: &TableMeta,
        key: &RowKey,
    ) -> Result<Option<Row>, StoreError>;
}
