//! Scalar values flowing between the synthesizer and the row store.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A single synthesized or fetched scalar.
///
/// Values fetched back from the store (primary-key tuples, linked codes)
/// come back in their text form as [`SqlValue::Text`]; the store casts text
/// to the column type on the way in, so that is lossless.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL NULL
    Null,

    /// Integer-family value
    Int(i64),

    /// Fixed-point value
    Decimal(Decimal),

    /// Boolean value
    Bool(bool),

    /// UUID value
    Uuid(Uuid),

    /// UTC instant
    Timestamp(DateTime<Utc>),

    /// Calendar date
    Date(NaiveDate),

    /// Free text
    Text(String),
}

impl SqlValue {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Canonical PostgreSQL text form, `None` for NULL.
    ///
    /// Timestamps carry an explicit `+00` offset; PostgreSQL ignores it for
    /// `timestamp without time zone` and `time` columns.
    pub fn to_pg_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Int(i) => Some(i.to_string()),
            Self::Decimal(d) => Some(d.to_string()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Uuid(u) => Some(u.hyphenated().to_string()),
            Self::Timestamp(ts) => Some(ts.format("%Y-%m-%d %H:%M:%S%.6f+00").to_string()),
            Self::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            Self::Text(s) => Some(s.clone()),
        }
    }

    /// JSON rendering, used for rows returned by the in-memory store.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Int(i) => serde_json::Value::from(*i),
            Self::Bool(b) => serde_json::Value::Bool(*b),
            other => other
                .to_pg_text()
                .map(serde_json::Value::String)
                .unwrap_or(serde_json::Value::Null),
        }
    }
}

impl From<Option<String>> for SqlValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(s) => SqlValue::Text(s),
            None => SqlValue::Null,
        }
    }
}
