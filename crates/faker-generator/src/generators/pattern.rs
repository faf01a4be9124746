//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `?` - random uppercase ASCII letter
//! - `#` - random decimal digit
//! - `*` - random uppercase letter or digit
//!
//! Every other character is copied through.

use rand::Rng;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Expand a placeholder pattern into a random string.
pub fn generate_pattern<R: Rng>(pattern: &str, rng: &mut R) -> String {
    pattern
        .chars()
        .map(|c| match c {
            '?' => pick(rng, LETTERS),
            '#' => pick(rng, DIGITS),
            '*' => pick(rng, ALPHANUMERIC),
            other => other,
        })
        .collect()
}

fn pick<R: Rng>(rng: &mut R, alphabet: &[u8]) -> char {
    alphabet[rng.random_range(0..alphabet.len())] as char
}
