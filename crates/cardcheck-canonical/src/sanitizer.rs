use regex::Regex;
use std::sync::LazyLock;

use crate::digits::CanonicalDigits;

// ASCII only: `\D` would keep non-Latin decimal digits.
static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]+").expect("invalid regex"));

/// Strips every character that is not an ASCII decimal digit.
///
/// Digit order is preserved and the function is total: empty or
/// digit-free input yields empty [`CanonicalDigits`].
pub fn sanitize(raw: &str) -> CanonicalDigits {
    CanonicalDigits::from_canonical(NON_DIGITS.replace_all(raw, "").into_owned())
}
