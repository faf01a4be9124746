//! Free-text generators keyed by a column's semantic role.

use rand::seq::IndexedRandom;
use rand::Rng;

use super::pattern::generate_pattern;
use super::words::{
    CITIES, COMPANY_SUFFIXES, EMAIL_DOMAINS, FIRST_NAMES, LAST_NAMES, LOREM, PHONE_FORMATS,
    STATES, STREET_NAMES, STREET_SUFFIXES,
};

/// Number of words in a generated sentence.
pub const SENTENCE_WORDS: usize = 6;

fn choose<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Company-style name, e.g. `Keller Holdings` or `Baker, Sato and Reyes`.
pub fn generate_company<R: Rng>(rng: &mut R) -> String {
    match rng.random_range(0..3) {
        0 => format!(
            "{} {}",
            choose(rng, LAST_NAMES),
            choose(rng, COMPANY_SUFFIXES)
        ),
        1 => format!("{}-{}", choose(rng, LAST_NAMES), choose(rng, LAST_NAMES)),
        _ => format!(
            "{}, {} and {}",
            choose(rng, LAST_NAMES),
            choose(rng, LAST_NAMES),
            choose(rng, LAST_NAMES)
        ),
    }
}

/// Uppercase code of the form `LLL-AAAA`.
pub fn generate_code<R: Rng>(rng: &mut R) -> String {
    generate_pattern("???-****", rng)
}

/// Capitalized sentence of [`SENTENCE_WORDS`] words ending in a period.
pub fn generate_sentence<R: Rng>(rng: &mut R) -> String {
    let words: Vec<&str> = (0..SENTENCE_WORDS).map(|_| choose(rng, LOREM)).collect();
    let sentence = words.join(" ");
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_ascii_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

/// Email address at a reserved test domain.
pub fn generate_email<R: Rng>(rng: &mut R) -> String {
    let first = choose(rng, FIRST_NAMES);
    let last = choose(rng, LAST_NAMES).to_lowercase();
    let domain = choose(rng, EMAIL_DOMAINS);
    if rng.random_bool(0.5) {
        format!("{first}.{last}@{domain}")
    } else {
        format!("{first}{}@{domain}", rng.random_range(1..100))
    }
}

/// Phone number in one of several North American layouts.
pub fn generate_phone<R: Rng>(rng: &mut R) -> String {
    let format = choose(rng, PHONE_FORMATS);
    generate_pattern(format, rng)
}

/// Single-line postal address.
pub fn generate_address<R: Rng>(rng: &mut R) -> String {
    let number = rng.random_range(1..10000);
    let street = choose(rng, STREET_NAMES);
    let suffix = choose(rng, STREET_SUFFIXES);
    let city = choose(rng, CITIES);
    let state = choose(rng, STATES);
    let zip = generate_pattern("#####", rng);
    format!("{number} {street} {suffix}, {city}, {state} {zip}")
}

/// A single lowercase word.
pub fn generate_word<R: Rng>(rng: &mut R) -> String {
    choose(rng, LOREM).to_string()
}
