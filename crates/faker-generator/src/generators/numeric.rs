//! Numeric value generators.

use faker_core::SqlValue;
use rand::Rng;
use rust_decimal::Decimal;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> SqlValue {
    SqlValue::Int(rng.random_range(min..=max))
}

/// Generate a random decimal in the given range with 2 decimal places.
///
/// The value is drawn in hundredths so every result has exactly two
/// fractional digits and both bounds are reachable.
pub fn generate_decimal_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> SqlValue {
    let min_cents = (min * 100.0).round() as i64;
    let max_cents = (max * 100.0).round() as i64;
    let cents = if min_cents >= max_cents {
        min_cents
    } else {
        rng.random_range(min_cents..=max_cents)
    };
    SqlValue::Decimal(Decimal::new(cents, 2))
}

/// Generate a boolean with the given probability of `true`.
pub fn generate_weighted_bool<R: Rng>(rng: &mut R, true_weight: f64) -> SqlValue {
    SqlValue::Bool(rng.random_bool(true_weight))
}
