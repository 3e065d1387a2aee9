//! Luhn (Mod10) checksum engine.
//!
//! Digits are traversed from the rightmost one. A digit at 0-indexed distance
//! `k` from the right is doubled iff `k` is odd; doubled values above 9 have 9
//! subtracted. The number is valid iff the transformed sum is divisible by 10.

use std::fmt;

use cardcheck_canonical::CanonicalDigits;
use serde::{Deserialize, Serialize};

/// Message shown where an explanation would be, when there is no input.
pub const NO_INPUT_MESSAGE: &str =
    "Enter a card number to see a step-by-step Luhn calculation here.";

fn transform(digit: u8, distance_from_right: usize) -> u8 {
    if distance_from_right % 2 == 1 {
        let doubled = digit * 2;
        if doubled > 9 {
            doubled - 9
        } else {
            doubled
        }
    } else {
        digit
    }
}

fn weighted_sum(digits: &CanonicalDigits, offset: usize) -> u64 {
    digits
        .values()
        .rev()
        .enumerate()
        .map(|(k, d)| u64::from(transform(d, k + offset)))
        .sum()
}

/// Luhn sum of the digits, without a validity judgment.
///
/// Returns 0 for empty input.
pub fn sum(digits: &CanonicalDigits) -> u64 {
    weighted_sum(digits, 0)
}

/// True iff `digits` is non-empty and its Luhn sum is divisible by 10.
pub fn is_valid(digits: &CanonicalDigits) -> bool {
    !digits.is_empty() && sum(digits) % 10 == 0
}

/// Digit that, appended to `partial`, makes the whole sequence Luhn-valid.
///
/// Computed as the sum over `partial` followed by a placeholder `0`, so every
/// digit of `partial` sits one position further from the right than it will
/// once the check digit is appended.
pub fn check_digit(partial: &CanonicalDigits) -> u8 {
    let sum_with_placeholder = weighted_sum(partial, 1);
    // Always < 10, so the narrowing cast is lossless.
    ((10 - sum_with_placeholder % 10) % 10) as u8
}

/// One digit's contribution to the Luhn sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuhnStep {
    /// 0-indexed distance from the rightmost digit.
    pub position_from_right: usize,
    /// Digit as it appears in the input.
    pub original_digit: u8,
    /// Whether this digit was doubled.
    pub was_doubled: bool,
    /// `original_digit * 2`, present only when doubled.
    pub doubled_value: Option<u8>,
    /// Value added to the sum.
    pub transformed_value: u8,
}

impl LuhnStep {
    fn new(original_digit: u8, position_from_right: usize) -> Self {
        let was_doubled = position_from_right % 2 == 1;
        Self {
            position_from_right,
            original_digit,
            was_doubled,
            doubled_value: was_doubled.then_some(original_digit * 2),
            transformed_value: transform(original_digit, position_from_right),
        }
    }

    /// Renders the step as used in [`LuhnExplanation::expression`].
    pub fn term(&self) -> String {
        match self.doubled_value {
            Some(doubled) if doubled > 9 => format!(
                "({}×2={} → {})",
                self.original_digit, doubled, self.transformed_value
            ),
            Some(doubled) => format!("({}×2={})", self.original_digit, doubled),
            None => self.original_digit.to_string(),
        }
    }
}

/// Full step-by-step account of a Luhn computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuhnExplanation {
    /// Digits that were checked.
    pub digits: CanonicalDigits,
    /// One step per digit, rightmost digit first.
    pub steps: Vec<LuhnStep>,
    /// Sum of all transformed values.
    pub sum: u64,
    /// `sum % 10 == 0`.
    pub valid: bool,
}

impl LuhnExplanation {
    /// Steps in reading order, leftmost digit first.
    pub fn steps_left_to_right(&self) -> impl Iterator<Item = &LuhnStep> {
        self.steps.iter().rev()
    }

    /// `sum % 10`.
    pub fn remainder(&self) -> u64 {
        self.sum % 10
    }

    /// Left-to-right arithmetic, e.g. `4 + (1×2=2) + 1`.
    pub fn expression(&self) -> String {
        self.steps_left_to_right()
            .map(LuhnStep::term)
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

impl fmt::Display for LuhnExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.valid {
            "passes (sum % 10 = 0)"
        } else {
            "fails (sum % 10 ≠ 0)"
        };
        writeln!(f, "Expression: {} = {}", self.expression(), self.sum)?;
        write!(
            f,
            "Result: {} % 10 = {} — {}",
            self.sum,
            self.remainder(),
            verdict
        )
    }
}

/// Builds the step-by-step explanation, or `None` for empty input.
pub fn explain(digits: &CanonicalDigits) -> Option<LuhnExplanation> {
    if digits.is_empty() {
        return None;
    }
    let steps: Vec<LuhnStep> = digits
        .values()
        .rev()
        .enumerate()
        .map(|(k, d)| LuhnStep::new(d, k))
        .collect();
    let sum = steps.iter().map(|s| u64::from(s.transformed_value)).sum();
    Some(LuhnExplanation {
        digits: digits.clone(),
        steps,
        sum,
        valid: sum % 10 == 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardcheck_canonical::sanitize;

    fn d(s: &str) -> CanonicalDigits {
        CanonicalDigits::parse(s).unwrap()
    }

    #[test]
    fn known_vectors() {
        assert!(is_valid(&d("4111111111111111")));
        assert!(is_valid(&d("49927398716")));
        assert!(is_valid(&d("1234567812345670")));
        assert!(!is_valid(&d("1234567812345678")));
        assert!(!is_valid(&d("")));
    }

    #[test]
    fn single_digit_is_never_doubled() {
        assert!(is_valid(&d("0")));
        for digit in 1..=9 {
            assert!(!is_valid(&d(&digit.to_string())));
        }
        let explanation = explain(&d("7")).unwrap();
        assert!(!explanation.steps[0].was_doubled);
        assert_eq!(explanation.sum, 7);
    }

    #[test]
    fn sum_of_reference_number() {
        assert_eq!(sum(&d("79927398713")), 70);
        assert_eq!(sum(&d("79927398716")), 73);
        assert_eq!(sum(&d("")), 0);
    }

    #[test]
    fn check_digit_completes_body() {
        assert_eq!(check_digit(&d("7992739871")), 3);
        assert_eq!(check_digit(&d("411111111111111")), 1);
        assert_eq!(check_digit(&d("")), 0);
    }

    #[test]
    fn explain_empty_is_none() {
        assert!(explain(&sanitize("  -- ")).is_none());
    }

    #[test]
    fn explanation_steps_follow_transform_rule() {
        let explanation = explain(&d("49927398716")).unwrap();
        assert_eq!(explanation.steps.len(), 11);
        for step in &explanation.steps {
            assert_eq!(step.was_doubled, step.position_from_right % 2 == 1);
            let expected = match step.doubled_value {
                Some(v) if v > 9 => v - 9,
                Some(v) => v,
                None => step.original_digit,
            };
            assert_eq!(step.transformed_value, expected);
        }
        assert_eq!(explanation.sum, sum(&explanation.digits));
        assert!(explanation.valid);
    }

    #[test]
    fn steps_left_to_right_reverse_storage_order() {
        let explanation = explain(&d("123")).unwrap();
        let originals: Vec<u8> = explanation
            .steps_left_to_right()
            .map(|s| s.original_digit)
            .collect();
        assert_eq!(originals, vec![1, 2, 3]);
        assert_eq!(explanation.steps[0].position_from_right, 0);
        assert_eq!(explanation.steps[0].original_digit, 3);
    }

    #[test]
    fn expression_and_display() {
        let explanation = explain(&d("1859")).unwrap();
        assert_eq!(explanation.expression(), "(1×2=2) + 8 + (5×2=10 → 1) + 9");
        assert_eq!(explanation.sum, 20);
        assert_eq!(
            explanation.to_string(),
            "Expression: (1×2=2) + 8 + (5×2=10 → 1) + 9 = 20\n\
             Result: 20 % 10 = 0 — passes (sum % 10 = 0)"
        );
    }

    #[test]
    fn display_reports_failure() {
        let explanation = explain(&d("12")).unwrap();
        assert!(explanation
            .to_string()
            .ends_with("Result: 4 % 10 = 4 — fails (sum % 10 ≠ 0)"));
    }
}
