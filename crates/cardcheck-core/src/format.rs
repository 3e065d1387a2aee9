//! Display forms of canonical digits.
//!
//! Output is for presentation only. It is never canonical and must be
//! sanitized again before being fed back to the engine.

use cardcheck_canonical::CanonicalDigits;

use crate::classify::CardType;
use crate::errors::CoreError;

/// Glyph substituted for hidden digits.
pub const DEFAULT_MASK_GLYPH: char = '•';

const GROUP_WIDTH: usize = 4;
const AMEX_GROUPS: [usize; 3] = [4, 6, 5];
const VISIBLE_TAIL: usize = 4;

/// Groups and masks digits for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    mask_glyph: char,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            mask_glyph: DEFAULT_MASK_GLYPH,
        }
    }
}

impl Formatter {
    /// Creates a formatter that masks with `glyph`.
    ///
    /// Decimal digits and whitespace are rejected: the first would read as a
    /// real digit and the second would corrupt grouping.
    pub fn with_mask_glyph(glyph: char) -> Result<Self, CoreError> {
        if glyph.is_ascii_digit() || glyph.is_whitespace() {
            return Err(CoreError::InvalidMaskGlyph(glyph));
        }
        Ok(Self { mask_glyph: glyph })
    }

    /// Glyph used for hidden digits.
    pub fn mask_glyph(&self) -> char {
        self.mask_glyph
    }

    /// Issuer-aware grouping.
    ///
    /// American Express prefixes are grouped 4-6-5 and nothing past the
    /// fifteenth digit is shown; everything else is grouped in runs of four.
    pub fn group(&self, digits: &CanonicalDigits) -> String {
        if CardType::AmericanExpress.matches(digits) {
            return group_amex(digits.as_str());
        }
        group_every(digits.as_str(), GROUP_WIDTH)
    }

    /// Masks all but the last four digits, then groups in runs of four.
    ///
    /// Four digits or fewer are returned as-is. Mask glyphs group positionally
    /// with the visible digits, for every issuer.
    pub fn mask(&self, digits: &CanonicalDigits) -> String {
        let s = digits.as_str();
        if s.len() <= VISIBLE_TAIL {
            return s.to_string();
        }
        let hidden = s.len() - VISIBLE_TAIL;
        let masked: String = std::iter::repeat(self.mask_glyph)
            .take(hidden)
            .chain(s[hidden..].chars())
            .collect();
        group_every(&masked, GROUP_WIDTH)
    }
}

fn group_every(s: &str, width: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

// Input is ASCII digits, so byte offsets are char offsets.
fn group_amex(s: &str) -> String {
    let mut parts = Vec::with_capacity(AMEX_GROUPS.len());
    let mut start = 0;
    for width in AMEX_GROUPS {
        if start >= s.len() {
            break;
        }
        let end = (start + width).min(s.len());
        parts.push(&s[start..end]);
        start = end;
    }
    parts.join(" ")
}

/// [`Formatter::group`] with the default formatter.
pub fn group(digits: &CanonicalDigits) -> String {
    Formatter::default().group(digits)
}

/// [`Formatter::mask`] with the default formatter.
pub fn mask(digits: &CanonicalDigits) -> String {
    Formatter::default().mask(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> CanonicalDigits {
        CanonicalDigits::parse(s).unwrap()
    }

    #[test]
    fn groups_in_fours() {
        assert_eq!(group(&d("4111111111111111")), "4111 1111 1111 1111");
        assert_eq!(group(&d("4111111")), "4111 111");
        assert_eq!(group(&d("4111")), "4111");
        assert_eq!(group(&d("")), "");
    }

    #[test]
    fn groups_amex_four_six_five() {
        assert_eq!(group(&d("378282246310005")), "3782 822463 10005");
        assert_eq!(group(&d("3782")), "3782");
        assert_eq!(group(&d("37828")), "3782 8");
        assert_eq!(group(&d("3782822463")), "3782 822463");
        assert_eq!(group(&d("37828224631")), "3782 822463 1");
    }

    #[test]
    fn amex_grouping_drops_digits_past_fifteen() {
        assert_eq!(group(&d("37828224631000599")), "3782 822463 10005");
    }

    #[test]
    fn mask_reveals_last_four() {
        assert_eq!(mask(&d("4111111111111111")), "•••• •••• •••• 1111");
        assert_eq!(mask(&d("12345")), "•234 5");
        assert_eq!(mask(&d("1234")), "1234");
        assert_eq!(mask(&d("")), "");
    }

    #[test]
    fn mask_uses_generic_grouping_for_amex() {
        assert_eq!(mask(&d("378282246310005")), "•••• •••• •••0 005");
    }

    #[test]
    fn custom_glyph() {
        let formatter = Formatter::with_mask_glyph('*').unwrap();
        assert_eq!(formatter.mask(&d("5555555555554444")), "**** **** **** 4444");
        assert_eq!(formatter.mask_glyph(), '*');
    }

    #[test]
    fn rejects_digit_and_space_glyphs() {
        assert_eq!(
            Formatter::with_mask_glyph('7'),
            Err(CoreError::InvalidMaskGlyph('7'))
        );
        assert!(Formatter::with_mask_glyph(' ').is_err());
    }
}
