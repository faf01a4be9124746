//! Declared-type and column-name driven value synthesis.

use crate::generators::{numeric, temporal, text, uuid};
use chrono::{DateTime, Utc};
use faker_core::SqlValue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Inclusive range for integer-family columns.
pub const INT_RANGE: (i64, i64) = (1, 9999);

/// Inclusive range for numeric-family columns.
pub const DECIMAL_RANGE: (f64, f64) = (1.0, 1000.0);

/// Type family a declared column type falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFamily {
    Temporal,
    Date,
    Integer,
    Numeric,
    Boolean,
    Uuid,
    Text,
}

impl TypeFamily {
    /// Classify a declared type name. Rules are checked in priority order.
    pub fn classify(declared_type: &str) -> Self {
        let dt = declared_type.trim().to_lowercase();
        if dt.contains("timestamp") || dt.contains("time") {
            return TypeFamily::Temporal;
        }
        if dt == "date" {
            return TypeFamily::Date;
        }
        if dt.starts_with("int")
            || matches!(
                dt.as_str(),
                "smallint" | "bigint" | "smallserial" | "serial" | "bigserial"
            )
        {
            return TypeFamily::Integer;
        }
        if matches!(
            dt.as_str(),
            "numeric" | "decimal" | "real" | "double precision"
        ) || dt.contains("numeric")
            || dt.starts_with("float")
        {
            return TypeFamily::Numeric;
        }
        match dt.as_str() {
            "boolean" | "bool" => TypeFamily::Boolean,
            "uuid" => TypeFamily::Uuid,
            _ => TypeFamily::Text,
        }
    }
}

/// Semantic role of a free-text column, inferred from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Company,
    Code,
    Sentence,
    Email,
    Phone,
    Address,
}

impl TextRole {
    /// Substring match on the lower-cased column name; first match wins.
    pub fn from_column_name(column_name: &str) -> Option<Self> {
        let name = column_name.to_lowercase();
        if name.contains("name") {
            Some(TextRole::Company)
        } else if name.contains("code") {
            Some(TextRole::Code)
        } else if name.contains("description") || name.contains("desc") {
            Some(TextRole::Sentence)
        } else if name.contains("email") {
            Some(TextRole::Email)
        } else if name.contains("phone") || name.contains("mobile") {
            Some(TextRole::Phone)
        } else if name.contains("address") || name.contains("addr") {
            Some(TextRole::Address)
        } else {
            None
        }
    }
}

/// Synthesize one value from the given RNG.
///
/// `now` is the instant used for temporal and date columns.
pub fn synthesize_value<R: Rng>(
    rng: &mut R,
    declared_type: &str,
    column_name: Option<&str>,
    now: DateTime<Utc>,
) -> SqlValue {
    match TypeFamily::classify(declared_type) {
        TypeFamily::Temporal => temporal::generate_timestamp_at(now),
        TypeFamily::Date => temporal::generate_date_at(now),
        TypeFamily::Integer => numeric::generate_int_range(rng, INT_RANGE.0, INT_RANGE.1),
        TypeFamily::Numeric => {
            numeric::generate_decimal_range(rng, DECIMAL_RANGE.0, DECIMAL_RANGE.1)
        }
        TypeFamily::Boolean => numeric::generate_weighted_bool(rng, 0.5),
        TypeFamily::Uuid => uuid::generate_uuid_v4(rng),
        TypeFamily::Text => {
            let value = match column_name.and_then(TextRole::from_column_name) {
                Some(TextRole::Company) => text::generate_company(rng),
                Some(TextRole::Code) => text::generate_code(rng),
                Some(TextRole::Sentence) => text::generate_sentence(rng),
                Some(TextRole::Email) => text::generate_email(rng),
                Some(TextRole::Phone) => text::generate_phone(rng),
                Some(TextRole::Address) => text::generate_address(rng),
                None => text::generate_word(rng),
            };
            SqlValue::Text(value)
        }
    }
}

/// Value synthesizer owning the run's random source.
///
/// The same seed yields the same sequence of values and of every other
/// decision drawn through [`ValueSynthesizer::rng`].
pub struct ValueSynthesizer {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Fixed instant for temporal columns; wall clock when unset
    fixed_now: Option<DateTime<Utc>>,
}

impl ValueSynthesizer {
    /// Create a synthesizer, seeded when `seed` is given and from OS entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self {
                rng: StdRng::from_os_rng(),
                fixed_now: None,
            },
        }
    }

    /// Create a deterministic synthesizer.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            fixed_now: None,
        }
    }

    /// Pin the instant used for temporal columns.
    pub fn with_fixed_now(mut self, now: DateTime<Utc>) -> Self {
        self.fixed_now = Some(now);
        self
    }

    /// The shared random source.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Synthesize a value for a column of the given declared type.
    ///
    /// Name-based rules only apply to free-text types, and only when a
    /// column name is supplied.
    pub fn synthesize(&mut self, declared_type: &str, column_name: Option<&str>) -> SqlValue {
        let now = self.fixed_now.unwrap_or_else(Utc::now);
        synthesize_value(&mut self.rng, declared_type, column_name, now)
    }
}
