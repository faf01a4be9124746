//! Temporal value generators.
//!
//! These are NOT seeded: a run's temporal values track the wall clock
//! unless the synthesizer was given a fixed instant.

use chrono::{DateTime, Utc};
use faker_core::SqlValue;

/// The given instant as a timestamp value.
pub fn generate_timestamp_at(now: DateTime<Utc>) -> SqlValue {
    SqlValue::Timestamp(now)
}

/// The calendar date (UTC) of the given instant.
pub fn generate_date_at(now: DateTime<Utc>) -> SqlValue {
    SqlValue::Date(now.date_naive())
}
