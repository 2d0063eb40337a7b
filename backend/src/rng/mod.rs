//! Random number generation
//!
//! Uses xorshift64* for fast, seedable random number generation.
//! CRITICAL: The engine draws ONLY through the [`RandomSource`] trait, never
//! from a global generator. Production runs seed from entropy; tests seed
//! explicitly.

mod source;
mod xorshift;

pub use source::RandomSource;
pub use xorshift::RngManager;
