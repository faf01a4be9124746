//! Reference resolution for foreign-key-like columns.
//!
//! Given a column, a [`ReferenceResolver`] names a table and column that
//! hold valid values for it. [`SuffixResolver`] implements the naming
//! convention `<table>_id`; a catalog-backed resolver can replace it without
//! touching the mutator.

/// Where valid values for a column can be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTarget {
    pub table: String,
    pub column: String,
}

/// Resolve a column to a source of valid reference values.
pub trait ReferenceResolver: Send + Sync {
    /// `None` when the column does not look like a reference.
    fn resolve(&self, table: &str, column: &str) -> Option<ReferenceTarget>;
}

/// Strips a suffix from the column name to find the referenced table.
///
/// `party_id` on `policy` resolves to `party.party_id`. A column never
/// resolves to its own table.
#[derive(Debug, Clone)]
pub struct SuffixResolver {
    suffix: String,
}

impl SuffixResolver {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl Default for SuffixResolver {
    fn default() -> Self {
        Self::new("_id")
    }
}

impl ReferenceResolver for SuffixResolver {
    fn resolve(&self, table: &str, column: &str) -> Option<ReferenceTarget> {
        let base = column.strip_suffix(self.suffix.as_str())?;
        if base.is_empty() || base == table {
            return None;
        }
        Some(ReferenceTarget {
            table: base.to_string(),
            column: column.to_string(),
        })
    }
}

/// Resolver that never finds a reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReferences;

impl ReferenceResolver for NoReferences {
    fn resolve(&self, _table: &str, _column: &str) -> Option<ReferenceTarget> {
        None
    }
}
