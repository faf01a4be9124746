//! Schema catalog reader.
//!
//! Reads a table's columns and primary key through a [`RowStore`] and
//! assembles the [`TableMeta`] snapshot the mutator works from. The SQL the
//! PostgreSQL store runs for these lookups lives here as well.

use crate::error::MetadataError;
use crate::postgres::quote_ident;
use crate::store::RowStore;
use faker_core::{ColumnMeta, TableMeta};
use tracing::debug;

/// Tables from a candidate list that exist in a schema.
pub const EXISTING_TABLES_QUERY: &str = "
    SELECT table_name::text
    FROM information_schema.tables
    WHERE table_schema = $1::text
      AND table_name::text = ANY($2::text[])";

/// Column metadata in declaration order.
pub const COLUMNS_QUERY: &str = "
    SELECT column_name::text,
           data_type::text,
           is_nullable::text,
           column_default::text,
           is_identity::text,
           is_generated::text,
           udt_schema::text,
           udt_name::text
    FROM information_schema.columns
    WHERE table_schema = $1::text AND table_name = $2::text
    ORDER BY ordinal_position";

/// Primary key columns in key order.
pub const PRIMARY_KEY_QUERY: &str = "
    SELECT kcu.column_name::text
    FROM information_schema.table_constraints tc
    JOIN information_schema.key_column_usage kcu
      ON tc.constraint_name = kcu.constraint_name
     AND tc.table_schema = kcu.table_schema
     AND tc.table_name = kcu.table_name
    WHERE tc.constraint_type = 'PRIMARY KEY'
      AND tc.table_schema = $1::text
      AND tc.table_name = $2::text
    ORDER BY kcu.ordinal_position";

/// Cast target for a column's underlying type, e.g. `"pg_catalog"."int4"`.
pub fn cast_type_for(udt_schema: &str, udt_name: &str) -> String {
    format!("{}.{}", quote_ident(udt_schema), quote_ident(udt_name))
}

/// Build a [`ColumnMeta`] from a [`COLUMNS_QUERY`] row.
pub fn column_from_row(row: &tokio_postgres::Row) -> ColumnMeta {
    let name: String = row.get(0);
    let declared_type: String = row.get(1);
    let is_nullable: String = row.get(2);
    let default_expression: Option<String> = row.get(3);
    let is_identity: Option<String> = row.get(4);
    let is_generated: Option<String> = row.get(5);
    let udt_schema: Option<String> = row.get(6);
    let udt_name: Option<String> = row.get(7);

    let generated =
        is_identity.as_deref() == Some("YES") || is_generated.as_deref() == Some("ALWAYS");

    let cast_type = match (udt_schema, udt_name) {
        (Some(schema), Some(name)) => cast_type_for(&schema, &name),
        _ => String::new(),
    };

    ColumnMeta {
        name,
        declared_type,
        nullable: is_nullable == "YES",
        default_expression,
        generated,
        cast_type,
    }
}

/// Fetch the metadata snapshot for one table.
///
/// Fails with [`MetadataError::TableNotFound`] when the catalog reports no
/// columns for the table.
pub async fn table_meta<S: RowStore + ?Sized>(
    store: &mut S,
    schema: &str,
    table: &str,
) -> Result<TableMeta, MetadataError> {
    let catalog_error = |source| MetadataError::Catalog {
        schema: schema.to_string(),
        table: table.to_string(),
        source,
    };

    let columns = store.columns(schema, table).await.map_err(catalog_error)?;
    if columns.is_empty() {
        return Err(MetadataError::TableNotFound {
            schema: schema.to_string(),
            table: table.to_string(),
        });
    }
    let primary_key = store
        .primary_key(schema, table)
        .await
        .map_err(catalog_error)?;

    debug!(
        "Catalog {}.{}: {} columns, primary key {:?}",
        schema,
        table,
        columns.len(),
        primary_key
    );

    Ok(TableMeta::new(schema, table, columns, primary_key))
}

/// Filter `candidates` down to the tables that exist in `schema`.
pub async fn existing_tables<S: RowStore + ?Sized>(
    store: &mut S,
    schema: &str,
    candidates: &[String],
) -> Result<Vec<String>, MetadataError> {
    store
        .existing_tables(schema, candidates)
        .await
        .map_err(|source| MetadataError::TableListing {
            schema: schema.to_string(),
            source,
        })
}
