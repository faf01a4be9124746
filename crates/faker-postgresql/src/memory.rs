//! In-memory [`RowStore`] for unit tests.
//!
//! Tables are kept as vectors of rows keyed by column name. Sequence
//! defaults are emulated, NOT NULL and primary-key uniqueness are enforced,
//! and `begin`/`rollback` snapshot and restore the table set. Failure
//! switches let tests exercise the error branches of the mutator.

use crate::error::StoreError;
use crate::store::{Row, RowKey, RowStore};
use async_trait::async_trait;
use faker_core::{ColumnMeta, SqlValue, TableMeta};
use std::collections::{BTreeMap, HashSet};

fn missing_table(table: &str) -> StoreError {
    StoreError::Rejected(format!("relation \"{table}\" does not exist"))
}

#[derive(Debug, Clone)]
struct MemoryRow {
    locator: u64,
    values: BTreeMap<String, SqlValue>,
}

impl MemoryRow {
    fn text(&self, column: &str) -> Option<String> {
        self.values.get(column).and_then(|v| v.to_pg_text())
    }

    fn to_json(&self) -> Row {
        let object: serde_json::Map<String, serde_json::Value> = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect();
        serde_json::Value::Object(object)
    }
}

#[derive(Debug, Clone)]
struct MemoryTable {
    meta: TableMeta,
    rows: Vec<MemoryRow>,
    next_locator: u64,
    next_serial: i64,
}

impl MemoryTable {
    fn find(&self, key: &RowKey) -> Option<usize> {
        self.rows.iter().position(|row| match key {
            RowKey::PrimaryKey(parts) => parts
                .iter()
                .all(|(column, value)| row.text(column) == value.to_pg_text()),
            RowKey::Locator(locator) => row.locator.to_string() == *locator,
        })
    }

    fn check_row(&self, candidate: &MemoryRow, skip: Option<usize>) -> Result<(), StoreError> {
        for column in &self.meta.columns {
            let is_null = candidate
                .values
                .get(&column.name)
                .map_or(true, |v| v.is_null());
            if is_null && !column.nullable {
                return Err(StoreError::Rejected(format!(
                    "null value in column \"{}\" violates not-null constraint",
                    column.name
                )));
            }
        }
        if self.meta.has_primary_key() {
            let key: Vec<Option<String>> = self
                .meta
                .primary_key
                .iter()
                .map(|k| candidate.text(k))
                .collect();
            let duplicate = self.rows.iter().enumerate().any(|(i, row)| {
                Some(i) != skip
                    && self
                        .meta
                        .primary_key
                        .iter()
                        .map(|k| row.text(k))
                        .collect::<Vec<_>>()
                        == key
            });
            if duplicate {
                return Err(StoreError::Rejected(format!(
                    "duplicate key value violates unique constraint \"{}_pkey\"",
                    self.meta.table_name
                )));
            }
        }
        Ok(())
    }
}

/// A single-schema in-memory store.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    schema: String,
    tables: BTreeMap<String, MemoryTable>,
    snapshot: Option<BTreeMap<String, MemoryTable>>,
    /// Tables whose reads fail.
    pub failing_reads: HashSet<String>,
    /// Make every update statement fail.
    pub fail_updates: bool,
    /// Make every delete statement fail.
    pub fail_deletes: bool,
    /// Committed write statements, in order.
    pub journal: Vec<String>,
    pending: Vec<String>,
    /// Number of rollbacks issued.
    pub rollbacks: usize,
}

impl MemoryStore {
    pub fn new(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            tables: BTreeMap::new(),
            snapshot: None,
            failing_reads: HashSet::new(),
            fail_updates: false,
            fail_deletes: false,
            journal: Vec::new(),
            pending: Vec::new(),
            rollbacks: 0,
        }
    }

    /// Register a table.
    pub fn create_table(&mut self, meta: TableMeta) {
        self.tables.insert(
            meta.table_name.clone(),
            MemoryTable {
                meta,
                rows: Vec::new(),
                next_locator: 1,
                next_serial: 1,
            },
        );
    }

    /// Seed a row directly, bypassing transactions and constraints.
    pub fn seed_row(&mut self, table: &str, values: Vec<(&str, SqlValue)>) {
        let Some(t) = self.tables.get_mut(table) else {
            panic!("unknown table {table}");
        };
        let locator = t.next_locator;
        t.next_locator += 1;
        for (name, value) in &values {
            let serial = t.meta.column(name).is_some_and(|c| c.is_auto_generated());
            if let (true, SqlValue::Int(v)) = (serial, value) {
                t.next_serial = t.next_serial.max(v + 1);
            }
        }
        t.rows.push(MemoryRow {
            locator,
            values: values
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        });
    }

    /// Rows of a table as JSON objects.
    pub fn rows(&self, table: &str) -> Vec<Row> {
        self.tables
            .get(table)
            .map(|t| t.rows.iter().map(MemoryRow::to_json).collect())
            .unwrap_or_default()
    }

    /// Number of rows in a table.
    pub fn len(&self, table: &str) -> usize {
        self.tables.get(table).map(|t| t.rows.len()).unwrap_or(0)
    }

    fn table(&self, schema: &str, table: &str) -> Result<&MemoryTable, StoreError> {
        if schema != self.schema || self.failing_reads.contains(table) {
            return Err(missing_table(table));
        }
        self.tables
            .get(table)
            .ok_or_else(|| missing_table(table))
    }

    fn table_mut(&mut self, meta: &TableMeta) -> Result<&mut MemoryTable, StoreError> {
        self.tables
            .get_mut(&meta.table_name)
            .ok_or_else(|| missing_table(&meta.table_name))
    }

    fn check_column(table: &MemoryTable, column: &str) -> Result<(), StoreError> {
        if table.meta.column(column).is_none() {
            return Err(StoreError::Rejected(format!(
                "column \"{}\" of relation \"{}\" does not exist",
                column, table.meta.table_name
            )));
        }
        Ok(())
    }

    fn default_value(table: &mut MemoryTable, column: &ColumnMeta) -> SqlValue {
        if column.is_auto_generated() {
            let value = table.next_serial;
            table.next_serial += 1;
            SqlValue::Int(value)
        } else {
            match &column.default_expression {
                Some(default) => SqlValue::Text(default.clone()),
                None => SqlValue::Null,
            }
        }
    }
}

#[async_trait]
impl RowStore for MemoryStore {
    async fn existing_tables(
        &mut self,
        schema: &str,
        candidates: &[String],
    ) -> Result<Vec<String>, StoreError> {
        if schema != self.schema {
            return Ok(Vec::new());
        }
        Ok(candidates
            .iter()
            .filter(|c| self.tables.contains_key(c.as_str()))
            .cloned()
            .collect())
    }

    async fn columns(&mut self, schema: &str, table: &str) -> Result<Vec<ColumnMeta>, StoreError> {
        Ok(self
            .table(schema, table)
            .map(|t| t.meta.columns.clone())
            .unwrap_or_default())
    }

    async fn primary_key(&mut self, schema: &str, table: &str) -> Result<Vec<String>, StoreError> {
        Ok(self.table(schema, table)?.meta.primary_key.clone())
    }

    async fn count_rows(&mut self, schema: &str, table: &str) -> Result<u64, StoreError> {
        Ok(self.table(schema, table)?.rows.len() as u64)
    }

    async fn row_key_at(
        &mut self,
        table: &TableMeta,
        offset: u64,
    ) -> Result<Option<RowKey>, StoreError> {
        let t = self.table(&table.schema, &table.table_name)?;
        let mut rows: Vec<&MemoryRow> = t.rows.iter().collect();
        if table.has_primary_key() {
            rows.sort_by_key(|r| {
                table
                    .primary_key
                    .iter()
                    .map(|k| r.text(k))
                    .collect::<Vec<_>>()
            });
            Ok(rows.get(offset as usize).map(|row| {
                RowKey::PrimaryKey(
                    table
                        .primary_key
                        .iter()
                        .map(|k| (k.clone(), SqlValue::from(row.text(k))))
                        .collect(),
                )
            }))
        } else {
            rows.sort_by_key(|r| r.locator);
            Ok(rows
                .get(offset as usize)
                .map(|row| RowKey::Locator(row.locator.to_string())))
        }
    }

    async fn value_at(
        &mut self,
        schema: &str,
        table: &str,
        column: &str,
        offset: u64,
    ) -> Result<Option<SqlValue>, StoreError> {
        let t = self.table(schema, table)?;
        Self::check_column(t, column)?;
        let mut values: Vec<Option<String>> = t.rows.iter().map(|r| r.text(column)).collect();
        // NULLS LAST, as PostgreSQL sorts ascending
        values.sort_by(|a, b| match (a, b) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        Ok(values.get(offset as usize).cloned().map(SqlValue::from))
    }

    async fn value_for_key(
        &mut self,
        table: &TableMeta,
        column: &str,
        key: &RowKey,
    ) -> Result<Option<SqlValue>, StoreError> {
        let t = self.table(&table.schema, &table.table_name)?;
        Self::check_column(t, column)?;
        Ok(t.find(key).map(|i| SqlValue::from(t.rows[i].text(column))))
    }

    async fn value_exists(
        &mut self,
        schema: &str,
        table: &str,
        column: &str,
        value: &SqlValue,
    ) -> Result<bool, StoreError> {
        let t = self.table(schema, table)?;
        Self::check_column(t, column)?;
        let Some(text) = value.to_pg_text() else {
            return Ok(false);
        };
        Ok(t.rows
            .iter()
            .any(|r| r.text(column).as_deref() == Some(text.as_str())))
    }

    async fn begin(&mut self) -> Result<(), StoreError> {
        self.snapshot = Some(self.tables.clone());
        self.pending.clear();
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), StoreError> {
        self.snapshot = None;
        self.journal.append(&mut self.pending);
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), StoreError> {
        if let Some(snapshot) = self.snapshot.take() {
            self.tables = snapshot;
        }
        self.pending.clear();
        self.rollbacks += 1;
        Ok(())
    }

    async fn insert_row(
        &mut self,
        table: &TableMeta,
        values: &[(String, SqlValue)],
    ) -> Result<Row, StoreError> {
        let t = self.table_mut(table)?;
        let mut row = MemoryRow {
            locator: t.next_locator,
            values: BTreeMap::new(),
        };
        for column in t.meta.columns.clone() {
            let value = match values.iter().find(|(c, _)| *c == column.name) {
                Some((_, value)) => value.clone(),
                None => Self::default_value(t, &column),
            };
            row.values.insert(column.name.clone(), value);
        }
        t.check_row(&row, None)?;
        t.next_locator += 1;
        let json = row.to_json();
        t.rows.push(row);
        self.pending
            .push(format!("INSERT {} {:?}", table.table_name, values));
        Ok(json)
    }

    async fn update_row(
        &mut self,
        table: &TableMeta,
        values: &[(String, SqlValue)],
        key: &RowKey,
    ) -> Result<Option<Row>, StoreError> {
        if self.fail_updates {
            return Err(StoreError::Rejected("update failed".to_string()));
        }
        let t = self.table_mut(table)?;
        let Some(index) = t.find(key) else {
            return Ok(None);
        };
        let mut row = t.rows[index].clone();
        for (column, value) in values {
            row.values.insert(column.clone(), value.clone());
        }
        t.check_row(&row, Some(index))?;
        let json = row.to_json();
        t.rows[index] = row;
        self.pending.push(format!(
            "UPDATE {} {:?} WHERE {:?}",
            table.table_name, values, key
        ));
        Ok(Some(json))
    }

    async fn delete_row(
        &mut self,
        table: &TableMeta,
        key: &RowKey,
    ) -> Result<Option<Row>, StoreError> {
        if self.fail_deletes {
            return Err(StoreError::Rejected("delete failed".to_string()));
        }
        let t = self.table_mut(table)?;
        let Some(index) = t.find(key) else {
            return Ok(None);
        };
        let row = t.rows.remove(index);
        self.pending
            .push(format!("DELETE {} WHERE {:?}", table.table_name, key));
        Ok(Some(row.to_json()))
    }
}
