//! Canonical digit primitives for cardcheck.
//!
//! Every engine operation consumes [`CanonicalDigits`]: a string of ASCII
//! `0-9` with no separators or mask glyphs. Raw input reaches that form
//! through [`sanitize`], which never fails. Display strings produced
//! downstream are not canonical and must be sanitized again before they
//! re-enter the engine.
//!
#![deny(missing_docs)]

/// Canonical digit newtype.
pub mod digits;
/// Lenient sanitizer for raw caller input.
pub mod sanitizer;
/// Validation errors returned by strict constructors.
pub mod validation;

pub use digits::CanonicalDigits;
pub use sanitizer::sanitize;
pub use validation::ValidationError;
