use cardcheck_canonical::CanonicalDigits;
use serde::{Deserialize, Serialize};

use crate::luhn::is_valid;

/// Shortest number judged pass/fail; anything shorter is neutral.
///
/// A product threshold, not a property of the checksum.
pub const DEFAULT_MIN_SUBMIT_LENGTH: usize = 12;

/// Outcome of judging a number for submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Too short (or empty) to judge.
    Neutral,
    /// Long enough and Luhn-valid.
    Accepted,
    /// Long enough and Luhn-invalid.
    Rejected,
}

impl Verdict {
    /// Status line for the verdict; empty when neutral.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Neutral => "",
            Verdict::Accepted => "Luhn check passed (Mod10).",
            Verdict::Rejected => "Luhn check failed.",
        }
    }

    /// Hint shown next to the input.
    pub fn helper(&self) -> &'static str {
        match self {
            Verdict::Neutral => "Enter your card number — spaces allowed.",
            Verdict::Accepted => "Looks good.",
            Verdict::Rejected => "Invalid card number (failed Mod10).",
        }
    }

    /// Whether submission is allowed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Length gate applied before a Luhn result counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPolicy {
    /// Minimum canonical length for a pass/fail verdict.
    pub min_length: usize,
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_SUBMIT_LENGTH,
        }
    }
}

impl SubmissionPolicy {
    /// Policy with a custom threshold.
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Neutral below the threshold, otherwise the Luhn result.
    ///
    /// Empty input is always neutral, even with a zero threshold.
    pub fn evaluate(&self, digits: &CanonicalDigits) -> Verdict {
        if digits.is_empty() || digits.len() < self.min_length {
            Verdict::Neutral
        } else if is_valid(digits) {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }
}
