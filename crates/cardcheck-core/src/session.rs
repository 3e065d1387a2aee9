//! Caller-owned input state.
//!
//! A [`CardSession`] holds what an input widget needs between events: the
//! canonical digits, whether masking is on and whether the user is editing.
//! Each command consumes the session and returns the next one; rendering is
//! a pure function of the session via [`CardSession::view`].

use cardcheck_canonical::{sanitize, CanonicalDigits};
use rand::Rng;
use serde::Serialize;

use crate::classify::{classify, CardType};
use crate::format::Formatter;
use crate::generate::{generate_with, GenerationRequest};
use crate::luhn::{explain, is_valid, LuhnExplanation};
use crate::policy::{SubmissionPolicy, Verdict};

/// Input state threaded through event commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSession {
    digits: CanonicalDigits,
    mask_enabled: bool,
    editing: bool,
    policy: SubmissionPolicy,
    formatter: Formatter,
    generated_from: Option<CanonicalDigits>,
}

const GENERATED_HELPER: &str = "Generated test number (client-side only).";

impl Default for CardSession {
    fn default() -> Self {
        Self {
            digits: CanonicalDigits::default(),
            mask_enabled: true,
            editing: false,
            policy: SubmissionPolicy::default(),
            formatter: Formatter::default(),
            generated_from: None,
        }
    }
}

/// Everything needed to render a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// Grouped or masked digits.
    pub display: String,
    /// Issuer inferred from the prefix.
    pub card_type: CardType,
    /// Policy verdict.
    pub verdict: Verdict,
    /// Status line for the verdict.
    pub message: String,
    /// Hint shown next to the input.
    pub helper: String,
    /// Step-by-step Luhn account; absent for empty input.
    pub explanation: Option<LuhnExplanation>,
}

/// Result of an explicit submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Neutral for empty input, otherwise accepted iff Luhn-valid.
    pub verdict: Verdict,
    /// Status line to show.
    pub message: String,
}

impl CardSession {
    /// Empty session with masking on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the submission policy.
    pub fn with_policy(mut self, policy: SubmissionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the display formatter.
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Current canonical digits.
    pub fn digits(&self) -> &CanonicalDigits {
        &self.digits
    }

    /// Whether masking is on.
    pub fn mask_enabled(&self) -> bool {
        self.mask_enabled
    }

    /// Whether the input is being edited.
    pub fn editing(&self) -> bool {
        self.editing
    }

    /// True until the next input change after [`CardSession::on_generate`].
    pub fn is_generated(&self) -> bool {
        self.generated_from.is_some()
    }

    /// Re-sanitizes `raw` and replaces the digits.
    pub fn on_input_changed(mut self, raw: &str) -> Self {
        self.digits = sanitize(raw);
        self.generated_from = None;
        self
    }

    /// Flips masking.
    pub fn on_toggle_mask(mut self) -> Self {
        self.mask_enabled = !self.mask_enabled;
        self
    }

    /// Temporarily unmasks for editing. No-op when masking is off.
    pub fn on_focus(mut self) -> Self {
        if self.mask_enabled {
            self.editing = true;
        }
        self
    }

    /// Restores the masked display. No-op when masking is off.
    pub fn on_blur(mut self) -> Self {
        if self.mask_enabled {
            self.editing = false;
        }
        self
    }

    /// Replaces the digits with a generated number.
    ///
    /// With masking on, editing ends so the masked form shows. The view
    /// reports the number as accepted, whatever its length, until the next
    /// [`CardSession::on_input_changed`].
    pub fn on_generate<R: Rng + ?Sized>(mut self, rng: &mut R, request: &GenerationRequest) -> Self {
        self.digits = generate_with(rng, request);
        self.generated_from = Some(request.prefix.clone());
        if self.mask_enabled {
            self.editing = false;
        }
        self
    }

    /// Text shown in the input.
    pub fn display(&self) -> String {
        if self.mask_enabled && !self.editing {
            self.formatter.mask(&self.digits)
        } else {
            self.formatter.group(&self.digits)
        }
    }

    /// Derived view of the session.
    pub fn view(&self) -> SessionView {
        let (verdict, message, helper) = match &self.generated_from {
            Some(prefix) => (
                Verdict::Accepted,
                format!(
                    "Generated valid {}-digit Luhn number using prefix \"{}\".",
                    self.digits.len(),
                    prefix
                ),
                GENERATED_HELPER.to_string(),
            ),
            None => {
                let verdict = self.policy.evaluate(&self.digits);
                (
                    verdict,
                    verdict.message().to_string(),
                    verdict.helper().to_string(),
                )
            }
        };
        SessionView {
            display: self.display(),
            card_type: classify(&self.digits),
            verdict,
            message,
            helper,
            explanation: explain(&self.digits),
        }
    }

    /// Explicit submit, which ignores the length gate.
    pub fn submit(&self) -> Submission {
        if self.digits.is_empty() {
            return Submission {
                verdict: Verdict::Neutral,
                message: String::new(),
            };
        }
        if is_valid(&self.digits) {
            Submission {
                verdict: Verdict::Accepted,
                message: format!(
                    "Valid card number detected ({}).",
                    classify(&self.digits)
                ),
            }
        } else {
            Submission {
                verdict: Verdict::Rejected,
                message: "Invalid card number (Luhn failed).".to_string(),
            }
        }
    }
}
