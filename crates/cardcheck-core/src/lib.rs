//! Checksum, classification, formatting and generation engine for
//! payment-card-like numbers.
//!
//! This crate provides:
//! - Luhn (Mod10) validation, sums, check digits and step-by-step explanations
//! - Issuer classification by an ordered, first-match-wins prefix table
//! - Grouped and masked display forms
//! - Synthetic Luhn-valid number generation with an optional fixed prefix
//! - A caller-owned session value replacing mutable UI state
//!
//! Core invariants:
//! - Every operation consumes [`CanonicalDigits`]; raw input is sanitized first
//! - Nothing here keeps cross-call state; only generation draws randomness
//! - Malformed input never errors on the lenient surface: it maps to empty
//!   output, `false`, `None` or [`CardType::Unknown`]
//!
#![deny(missing_docs)]

/// Issuer classification.
pub mod classify;
/// Error types for strict constructors.
pub mod errors;
/// Grouped and masked display strings.
pub mod format;
/// Luhn-valid number generation.
pub mod generate;
/// Luhn checksum engine.
pub mod luhn;
/// Submission policy and verdicts.
pub mod policy;
/// Caller-owned session state and commands.
pub mod session;

pub use cardcheck_canonical::{sanitize, CanonicalDigits, ValidationError};
pub use classify::{classify, CardType, CardTypeRule, PrefixPattern, RULES};
pub use errors::CoreError;
pub use format::{group, mask, Formatter, DEFAULT_MASK_GLYPH};
pub use generate::{
    generate, generate_with, GenerationRequest, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH,
};
pub use luhn::{
    check_digit, explain, is_valid, sum, LuhnExplanation, LuhnStep, NO_INPUT_MESSAGE,
};
pub use policy::{SubmissionPolicy, Verdict, DEFAULT_MIN_SUBMIT_LENGTH};
pub use session::{CardSession, SessionView, Submission};
