use std::fmt;

use cardcheck_canonical::CanonicalDigits;
use serde::{Deserialize, Serialize};

/// Issuing network inferred from the leading digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    /// Prefix `4`.
    Visa,
    /// Prefixes `51`-`55` and `22`-`27`.
    Mastercard,
    /// Prefixes `34` and `37`.
    #[serde(rename = "American Express")]
    AmericanExpress,
    /// Prefixes `6011`, `65` and `644`-`649`.
    Discover,
    /// No rule matched.
    Unknown,
}

impl CardType {
    /// Display name, e.g. `"American Express"`.
    pub fn name(&self) -> &'static str {
        match self {
            CardType::Visa => "Visa",
            CardType::Mastercard => "Mastercard",
            CardType::AmericanExpress => "American Express",
            CardType::Discover => "Discover",
            CardType::Unknown => "Unknown",
        }
    }

    /// True when this type's own rule matches `digits`, regardless of table order.
    ///
    /// `Unknown` has no rule and never matches.
    pub fn matches(&self, digits: &CanonicalDigits) -> bool {
        RULES
            .iter()
            .filter(|rule| rule.card_type == *self)
            .any(|rule| rule.matches(digits))
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Match against the leading digits of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixPattern {
    /// Digits start with this literal.
    Literal(&'static str),
    /// The first `width` digits, read as a number, fall in `low..=high`.
    Range {
        /// Number of leading digits compared.
        width: usize,
        /// Inclusive lower bound.
        low: u32,
        /// Inclusive upper bound.
        high: u32,
    },
}

impl PrefixPattern {
    /// True when `digits` begins with this pattern.
    pub fn matches(&self, digits: &CanonicalDigits) -> bool {
        match *self {
            PrefixPattern::Literal(prefix) => digits.starts_with(prefix),
            PrefixPattern::Range { width, low, high } => {
                if digits.len() < width {
                    return false;
                }
                let lead = digits
                    .values()
                    .take(width)
                    .fold(0u32, |acc, d| acc * 10 + u32::from(d));
                (low..=high).contains(&lead)
            }
        }
    }
}

/// One entry in the classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTypeRule {
    /// Type reported when the rule matches.
    pub card_type: CardType,
    /// Alternatives; any match is a match.
    pub patterns: &'static [PrefixPattern],
}

impl CardTypeRule {
    /// True when any alternative matches.
    pub fn matches(&self, digits: &CanonicalDigits) -> bool {
        self.patterns.iter().any(|p| p.matches(digits))
    }
}

/// Classification table. Evaluated in order; the first match wins.
pub const RULES: [CardTypeRule; 4] = [
    CardTypeRule {
        card_type: CardType::Visa,
        patterns: &[PrefixPattern::Literal("4")],
    },
    CardTypeRule {
        card_type: CardType::Mastercard,
        patterns: &[
            PrefixPattern::Range {
                width: 2,
                low: 51,
                high: 55,
            },
            PrefixPattern::Range {
                width: 2,
                low: 22,
                high: 27,
            },
        ],
    },
    CardTypeRule {
        card_type: CardType::AmericanExpress,
        patterns: &[PrefixPattern::Literal("34"), PrefixPattern::Literal("37")],
    },
    CardTypeRule {
        card_type: CardType::Discover,
        patterns: &[
            PrefixPattern::Literal("6011"),
            PrefixPattern::Literal("65"),
            PrefixPattern::Range {
                width: 3,
                low: 644,
                high: 649,
            },
        ],
    },
];

/// Classifies `digits` by the first matching rule in [`RULES`].
pub fn classify(digits: &CanonicalDigits) -> CardType {
    let card_type = RULES
        .iter()
        .find(|rule| rule.matches(digits))
        .map_or(CardType::Unknown, |rule| rule.card_type);
    tracing::trace!(prefix = %digits.truncated(4), %card_type, "classified");
    card_type
}
