//! Table-driven column policies.
//!
//! Domain rules that apply to one `(table, column)` pair live in a
//! [`PolicyMap`] instead of inline conditionals in the mutator. Delete
//! guards are derived from the linked-code policies: the table a code is
//! copied from may not lose a row whose code is still in use.

use crate::error::PolicyError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Rule attached to a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnPolicy {
    /// Leave a nullable column unset (insert) or set it NULL (update)
    /// with the given probability.
    NullBias { probability: f64 },

    /// Copy an existing value from `source_table.source_column` with
    /// `reuse_probability`, otherwise synthesize an independent one.
    LinkedCode {
        source_table: String,
        source_column: String,
        reuse_probability: f64,
    },
}

/// A delete on the source table must not orphan dependent rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteGuard {
    /// Column of the table being deleted from that holds the code
    pub source_column: String,
    /// Table whose rows reference the code
    pub dependent_table: String,
    /// Column of the dependent table holding the code
    pub dependent_column: String,
}

/// One entry of a policy file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyEntry {
    pub table: String,
    pub column: String,
    pub rule: ColumnPolicy,
}

#[derive(Debug, Deserialize)]
struct PolicyFile {
    #[serde(default)]
    policies: Vec<PolicyEntry>,
}

/// `(table, column) -> ColumnPolicy`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyMap {
    rules: BTreeMap<String, BTreeMap<String, ColumnPolicy>>,
}

impl PolicyMap {
    /// An empty map: no domain rules at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in finance rules.
    pub fn finance_defaults() -> Self {
        let mut map = Self::empty();
        map.insert(
            "fund_metadata",
            "fund_description",
            ColumnPolicy::NullBias { probability: 0.25 },
        );
        map.insert(
            "fund_metadata",
            "fund_price",
            ColumnPolicy::NullBias { probability: 0.25 },
        );
        map.insert(
            "fund_unit",
            "fund_code",
            ColumnPolicy::LinkedCode {
                source_table: "fund_metadata".to_string(),
                source_column: "fund_code".to_string(),
                reuse_probability: 0.8,
            },
        );
        map
    }

    /// Parse a YAML policy file body.
    pub fn from_yaml(yaml: &str) -> Result<Self, PolicyError> {
        let file: PolicyFile = serde_yaml::from_str(yaml)?;
        let mut map = Self::empty();
        for entry in file.policies {
            validate(&entry)?;
            map.insert(entry.table, entry.column, entry.rule);
        }
        Ok(map)
    }

    /// Load a YAML policy file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Add or replace the rule for a column.
    pub fn insert(
        &mut self,
        table: impl Into<String>,
        column: impl Into<String>,
        policy: ColumnPolicy,
    ) {
        self.rules
            .entry(table.into())
            .or_default()
            .insert(column.into(), policy);
    }

    /// Rule for a column, if any.
    pub fn get(&self, table: &str, column: &str) -> Option<&ColumnPolicy> {
        self.rules.get(table)?.get(column)
    }

    /// Guards that apply to deletes on `table`.
    pub fn delete_guards(&self, table: &str) -> Vec<DeleteGuard> {
        let mut guards = Vec::new();
        for (dependent_table, columns) in &self.rules {
            for (dependent_column, policy) in columns {
                if let ColumnPolicy::LinkedCode {
                    source_table,
                    source_column,
                    ..
                } = policy
                {
                    if source_table == table {
                        guards.push(DeleteGuard {
                            source_column: source_column.clone(),
                            dependent_table: dependent_table.clone(),
                            dependent_column: dependent_column.clone(),
                        });
                    }
                }
            }
        }
        guards
    }

    /// Number of column rules.
    pub fn len(&self) -> usize {
        self.rules.values().map(|c| c.len()).sum()
    }

    /// Whether the map holds no rules.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate(entry: &PolicyEntry) -> Result<(), PolicyError> {
    let value = match &entry.rule {
        ColumnPolicy::NullBias { probability } => *probability,
        ColumnPolicy::LinkedCode {
            reuse_probability, ..
        } => *reuse_probability,
    };
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(PolicyError::InvalidProbability {
            table: entry.table.clone(),
            column: entry.column.clone(),
            value,
        })
    }
}
