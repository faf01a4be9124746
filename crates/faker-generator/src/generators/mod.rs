//! Individual value generators.
//!
//! Each generator draws from the caller's RNG so results stay reproducible
//! under a fixed seed.

pub mod numeric;
pub mod pattern;
pub mod temporal;
pub mod text;
pub mod uuid;
mod words;
