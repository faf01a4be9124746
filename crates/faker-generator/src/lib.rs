//! Value synthesizer for the db-faker mutation engine.
//!
//! This crate provides the [`ValueSynthesizer`], which produces one fake
//! value for a column given its declared type and (optionally) its name.
//! The synthesizer owns the run's seeded RNG so the same seed reproduces
//! the same values and, through [`ValueSynthesizer::rng`], the same
//! scheduling decisions.
//!
//! # Dispatch
//!
//! ```text
//! declared type ──► TypeFamily ──┬─► temporal / date / integer / numeric / bool / uuid
//!                                │
//!                                └─► Text ──► column name ──► TextRole ──► text generator
//! ```
//!
//! # Example
//!
//! ```rust
//! use faker_generator::ValueSynthesizer;
//! use faker_core::SqlValue;
//!
//! let mut synth = ValueSynthesizer::seeded(42);
//! let value = synth.synthesize("integer", Some("quantity"));
//! assert!(matches!(value, SqlValue::Int(1..=9999)));
//! ```

pub mod generators;
pub mod synthesizer;

// Re-exports for convenience
pub use synthesizer::{synthesize_value, TextRole, TypeFamily, ValueSynthesizer};
