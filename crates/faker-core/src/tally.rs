//! Operation kinds and the counters the scheduler keeps for them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three mutations the engine performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Insert,
    Update,
    Delete,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Insert => write!(f, "insert"),
            OperationKind::Update => write!(f, "update"),
            OperationKind::Delete => write!(f, "delete"),
        }
    }
}

/// Count of successfully applied operations per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationTally {
    pub insert_count: u64,
    pub update_count: u64,
    pub delete_count: u64,
}

impl OperationTally {
    /// Record one applied operation.
    pub fn record(&mut self, kind: OperationKind) {
        match kind {
            OperationKind::Insert => self.insert_count += 1,
            OperationKind::Update => self.update_count += 1,
            OperationKind::Delete => self.delete_count += 1,
        }
    }

    /// Total applied operations.
    pub fn total(&self) -> u64 {
        self.insert_count + self.update_count + self.delete_count
    }
}

impl fmt::Display for OperationTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "inserts={} updates={} deletes={}",
            self.insert_count, self.update_count, self.delete_count
        )
    }
}
