//! Catalog snapshot types.
//!
//! A [`TableMeta`] is fetched once per run per table and treated as a
//! read-only snapshot; concurrent schema changes are not reflected.

use serde::{Deserialize, Serialize};

/// Metadata for a single column, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnMeta {
    /// Column name
    pub name: String,

    /// Declared type as reported by the catalog (e.g. `integer`, `character varying`)
    pub declared_type: String,

    /// Whether this column accepts NULL
    pub nullable: bool,

    /// Default expression, if any (e.g. `nextval('party_id_seq'::regclass)`)
    #[serde(default)]
    pub default_expression: Option<String>,

    /// Identity or `GENERATED ALWAYS ... STORED` column
    #[serde(default)]
    pub generated: bool,

    /// Type name used when casting bound text parameters into this column.
    ///
    /// Falls back to `declared_type` when empty.
    #[serde(default)]
    pub cast_type: String,
}

impl ColumnMeta {
    /// Create a NOT NULL column without a default.
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            nullable: false,
            default_expression: None,
            generated: false,
            cast_type: String::new(),
        }
    }

    /// Create a nullable column without a default.
    pub fn nullable(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            nullable: true,
            ..Self::new(name, declared_type)
        }
    }

    /// Set the default expression.
    pub fn with_default(mut self, expression: impl Into<String>) -> Self {
        self.default_expression = Some(expression.into());
        self
    }

    /// Mark the column as identity/generated.
    pub fn with_generated(mut self, generated: bool) -> Self {
        self.generated = generated;
        self
    }

    /// Set the cast type used for parameter binding.
    pub fn with_cast_type(mut self, cast_type: impl Into<String>) -> Self {
        self.cast_type = cast_type.into();
        self
    }

    /// Whether the store fills this column on its own.
    ///
    /// Sequence defaults (`nextval`), UUID-generating defaults and
    /// identity/generated columns all count.
    pub fn is_auto_generated(&self) -> bool {
        if self.generated {
            return true;
        }
        match self.default_expression.as_deref() {
            Some(default) => {
                let default = default.trim();
                default.contains("nextval")
                    || default.starts_with("uuid_generate")
                    || default.contains("gen_random_uuid")
            }
            None => false,
        }
    }

    /// Type to cast bound parameters to.
    pub fn cast_type(&self) -> &str {
        if self.cast_type.is_empty() {
            &self.declared_type
        } else {
            &self.cast_type
        }
    }
}

/// Table metadata: columns in declaration order plus the primary key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableMeta {
    /// Schema the table lives in
    pub schema: String,

    /// Table name
    pub table_name: String,

    /// Columns ordered by declaration position
    pub columns: Vec<ColumnMeta>,

    /// Primary key column names in key order (empty when the table has none)
    #[serde(default)]
    pub primary_key: Vec<String>,
}

impl TableMeta {
    /// Create a new table snapshot.
    pub fn new(
        schema: impl Into<String>,
        table_name: impl Into<String>,
        columns: Vec<ColumnMeta>,
        primary_key: Vec<String>,
    ) -> Self {
        Self {
            schema: schema.into(),
            table_name: table_name.into(),
            columns,
            primary_key,
        }
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnMeta> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Whether the table declares a primary key.
    pub fn has_primary_key(&self) -> bool {
        !self.primary_key.is_empty()
    }

    /// Whether the named column is part of the primary key.
    pub fn is_key_column(&self, name: &str) -> bool {
        self.primary_key.iter().any(|k| k == name)
    }

    /// Columns an update may modify: not part of the key, not generated.
    pub fn updatable_columns(&self) -> Vec<&ColumnMeta> {
        self.columns
            .iter()
            .filter(|c| !self.is_key_column(&c.name) && !c.generated)
            .collect()
    }

    /// `schema.table` for log output.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.table_name)
    }
}
