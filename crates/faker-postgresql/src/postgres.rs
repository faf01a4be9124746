//! PostgreSQL implementation of [`RowStore`].
//!
//! All values are bound as text parameters and cast to the column's type in
//! SQL (`CAST($1::text AS "pg_catalog"."int4")`), so a single binding path
//! covers every column type the catalog reports. Values read back for reuse
//! (key tuples, linked codes) are selected as `::text` for the same reason.

use crate::catalog;
use crate::error::StoreError;
use crate::store::{Row, RowKey, RowStore};
use async_trait::async_trait;
use faker_core::{ColumnMeta, SqlValue, TableMeta};
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, NoTls};
use tracing::debug;

/// Alias given to the target table in write statements.
const ROW_ALIAS: &str = "r";

/// Quote an identifier: wrap in double quotes, doubling embedded quotes.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// `"schema"."table"`
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quote_ident(schema), quote_ident(table))
}

/// Placeholder for a text parameter cast into the column's type.
fn cast_placeholder(index: usize, column: Option<&ColumnMeta>) -> String {
    match column {
        Some(column) => format!("CAST(${index}::text AS {})", column.cast_type()),
        None => format!("${index}::text"),
    }
}

/// A statement together with its text parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Option<String>>,
}

impl Statement {
    fn param_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|p| p as &(dyn ToSql + Sync))
            .collect()
    }
}

/// WHERE clause identifying `key`, numbering parameters from `first_param`.
fn key_predicate(
    table: &TableMeta,
    key: &RowKey,
    first_param: usize,
) -> (String, Vec<Option<String>>) {
    match key {
        RowKey::PrimaryKey(parts) => {
            let mut clauses = Vec::with_capacity(parts.len());
            let mut params = Vec::with_capacity(parts.len());
            for (i, (column, value)) in parts.iter().enumerate() {
                clauses.push(format!(
                    "{ROW_ALIAS}.{} = {}",
                    quote_ident(column),
                    cast_placeholder(first_param + i, table.column(column))
                ));
                params.push(value.to_pg_text());
            }
            (clauses.join(" AND "), params)
        }
        RowKey::Locator(locator) => (
            format!("{ROW_ALIAS}.ctid = ${first_param}::text::tid"),
            vec![Some(locator.clone())],
        ),
    }
}

/// `INSERT ... RETURNING to_jsonb(r)`
pub fn build_insert(table: &TableMeta, values: &[(String, SqlValue)]) -> Statement {
    let columns: Vec<String> = values.iter().map(|(c, _)| quote_ident(c)).collect();
    let placeholders: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(i, (c, _))| cast_placeholder(i + 1, table.column(c)))
        .collect();

    let sql = format!(
        "INSERT INTO {} AS {ROW_ALIAS} ({}) VALUES ({}) RETURNING to_jsonb({ROW_ALIAS})",
        qualified_table(&table.schema, &table.table_name),
        columns.join(", "),
        placeholders.join(", ")
    );
    let params = values.iter().map(|(_, v)| v.to_pg_text()).collect();
    Statement { sql, params }
}

/// `UPDATE ... SET ... WHERE <key> RETURNING to_jsonb(r)`
pub fn build_update(table: &TableMeta, values: &[(String, SqlValue)], key: &RowKey) -> Statement {
    let set_parts: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(i, (c, _))| {
            format!(
                "{} = {}",
                quote_ident(c),
                cast_placeholder(i + 1, table.column(c))
            )
        })
        .collect();
    let mut params: Vec<Option<String>> = values.iter().map(|(_, v)| v.to_pg_text()).collect();

    let (predicate, key_params) = key_predicate(table, key, values.len() + 1);
    params.extend(key_params);

    let sql = format!(
        "UPDATE {} AS {ROW_ALIAS} SET {} WHERE {predicate} RETURNING to_jsonb({ROW_ALIAS})",
        qualified_table(&table.schema, &table.table_name),
        set_parts.join(", ")
    );
    Statement { sql, params }
}

/// `DELETE ... WHERE <key> RETURNING to_jsonb(r)`
pub fn build_delete(table: &TableMeta, key: &RowKey) -> Statement {
    let (predicate, params) = key_predicate(table, key, 1);
    let sql = format!(
        "DELETE FROM {} AS {ROW_ALIAS} WHERE {predicate} RETURNING to_jsonb({ROW_ALIAS})",
        qualified_table(&table.schema, &table.table_name)
    );
    Statement { sql, params }
}

/// Query returning the identity of the row at offset `$1`.
pub fn build_row_key_query(table: &TableMeta) -> String {
    let from = qualified_table(&table.schema, &table.table_name);
    if table.has_primary_key() {
        let keys: Vec<String> = table.primary_key.iter().map(|k| quote_ident(k)).collect();
        let selected: Vec<String> = keys.iter().map(|k| format!("{k}::text")).collect();
        format!(
            "SELECT {} FROM {from} ORDER BY {} OFFSET $1 LIMIT 1",
            selected.join(", "),
            keys.join(", ")
        )
    } else {
        format!("SELECT ctid::text FROM {from} ORDER BY ctid OFFSET $1 LIMIT 1")
    }
}

/// PostgreSQL row store over a single connection.
pub struct PgStore {
    client: Client,
}

impl PgStore {
    /// Connect and spawn the connection task.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = PgStore::connect("host=localhost user=postgres dbname=finance").await?;
    /// ```
    pub async fn connect(connection_string: &str) -> Result<Self, StoreError> {
        let (client, connection) = tokio_postgres::connect(connection_string, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("PostgreSQL connection error: {}", e);
            }
        });

        // Test connection
        client.simple_query("SELECT 1").await?;

        Ok(Self { client })
    }

    /// The underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    async fn query_returning(&self, statement: &Statement) -> Result<Option<Row>, StoreError> {
        debug!("SQL: {}", statement.sql);
        let row = self
            .client
            .query_opt(&statement.sql, &statement.param_refs())
            .await?;
        Ok(row.map(|r| r.get::<_, serde_json::Value>(0)))
    }
}

#[async_trait]
impl RowStore for PgStore {
    async fn existing_tables(
        &mut self,
        schema: &str,
        candidates: &[String],
    ) -> Result<Vec<String>, StoreError> {
        let rows = self
            .client
            .query(catalog::EXISTING_TABLES_QUERY, &[&schema, &candidates])
            .await?;
        let found: Vec<String> = rows.iter().map(|r| r.get::<_, String>(0)).collect();
        Ok(candidates
            .iter()
            .filter(|c| found.contains(c))
            .cloned()
            .collect())
    }

    async fn columns(&mut self, schema: &str, table: &str) -> Result<Vec<ColumnMeta>, StoreError> {
        let rows = self
            .client
            .query(catalog::COLUMNS_QUERY, &[&schema, &table])
            .await?;
        Ok(rows.iter().map(catalog::column_from_row).collect())
    }

    async fn primary_key(&mut self, schema: &str, table: &str) -> Result<Vec<String>, StoreError> {
        let rows = self
            .client
            .query(catalog::PRIMARY_KEY_QUERY, &[&schema, &table])
            .await?;
        Ok(rows.iter().map(|r| r.get::<_, String>(0)).collect())
    }

    async fn count_rows(&mut self, schema: &str, table: &str) -> Result<u64, StoreError> {
        let sql = format!("SELECT count(*) FROM {}", qualified_table(schema, table));
        let row = self.client.query_one(&sql, &[]).await?;
        let count: i64 = row.get(0);
        Ok(count as u64)
    }

    async fn row_key_at(
        &mut self,
        table: &TableMeta,
        offset: u64,
    ) -> Result<Option<RowKey>, StoreError> {
        let sql = build_row_key_query(table);
        let offset = offset as i64;
        let Some(row) = self.client.query_opt(&sql, &[&offset]).await? else {
            return Ok(None);
        };

        if table.has_primary_key() {
            let parts = table
                .primary_key
                .iter()
                .enumerate()
                .map(|(i, k)| (k.clone(), SqlValue::from(row.get::<_, Option<String>>(i))))
                .collect();
            Ok(Some(RowKey::PrimaryKey(parts)))
        } else {
            Ok(Some(RowKey::Locator(row.get::<_, String>(0))))
        }
    }

    async fn value_at(
        &mut self,
        schema: &str,
        table: &str,
        column: &str,
        offset: u64,
    ) -> Result<Option<SqlValue>, StoreError> {
        let sql = format!(
            "SELECT {}::text FROM {} ORDER BY 1 OFFSET $1 LIMIT 1",
            quote_ident(column),
            qualified_table(schema, table)
        );
        let offset = offset as i64;
        let row = self.client.query_opt(&sql, &[&offset]).await?;
        Ok(row.map(|r| SqlValue::from(r.get::<_, Option<String>>(0))))
    }

    async fn value_for_key(
        &mut self,
        table: &TableMeta,
        column: &str,
        key: &RowKey,
    ) -> Result<Option<SqlValue>, StoreError> {
        let (predicate, params) = key_predicate(table, key, 1);
        let statement = Statement {
            sql: format!(
                "SELECT {ROW_ALIAS}.{}::text FROM {} AS {ROW_ALIAS} WHERE {predicate} LIMIT 1",
                quote_ident(column),
                qualified_table(&table.schema, &table.table_name)
            ),
            params,
        };
        let row = self
            .client
            .query_opt(&statement.sql, &statement.param_refs())
            .await?;
        Ok(row.map(|r| SqlValue::from(r.get::<_, Option<String>>(0))))
    }

    async fn value_exists(
        &mut self,
        schema: &str,
        table: &str,
        column: &str,
        value: &SqlValue,
    ) -> Result<bool, StoreError> {
        let Some(text) = value.to_pg_text() else {
            return Ok(false);
        };
        let sql = format!(
            "SELECT 1 FROM {} WHERE {}::text = $1 LIMIT 1",
            qualified_table(schema, table),
            quote_ident(column)
        );
        Ok(self.client.query_opt(&sql, &[&text]).await?.is_some())
    }

    async fn begin(&mut self) -> Result<(), StoreError> {
        self.client.batch_execute("BEGIN").await?;
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), StoreError> {
        self.client.batch_execute("COMMIT").await?;
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), StoreError> {
        self.client.batch_execute("ROLLBACK").await?;
        Ok(())
    }

    async fn insert_row(
        &mut self,
        table: &TableMeta,
        values: &[(String, SqlValue)],
    ) -> Result<Row, StoreError> {
        let statement = build_insert(table, values);
        self.query_returning(&statement).await?.ok_or_else(|| {
            StoreError::Rejected(format!("insert into {} returned no row", table.table_name))
        })
    }

    async fn update_row(
        &mut self,
        table: &TableMeta,
        values: &[(String, SqlValue)],
        key: &RowKey,
    ) -> Result<Option<Row>, StoreError> {
        let statement = build_update(table, values, key);
        self.query_returning(&statement).await
    }

    async fn delete_row(
        &mut self,
        table: &TableMeta,
        key: &RowKey,
    ) -> Result<Option<Row>, StoreError> {
        let statement = build_delete(table, key);
        self.query_returning(&statement).await
    }
}
