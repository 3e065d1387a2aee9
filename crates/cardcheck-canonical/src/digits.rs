use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::validation::ValidationError;

static CANONICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*$").expect("invalid regex"));

/// Ordered sequence of ASCII decimal digits, no separators.
///
/// The empty sequence is valid and represents "no input".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalDigits(String);

impl CanonicalDigits {
    /// Parses a value that must already be canonical.
    ///
    /// Unlike [`crate::sanitize`], separators are rejected instead of dropped.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !CANONICAL.is_match(&s) {
            return Err(ValidationError::NonDigit {
                field: "digits",
                value: s,
            });
        }
        Ok(Self(s))
    }

    pub(crate) fn from_canonical(value: String) -> Self {
        debug_assert!(value.bytes().all(|b| b.is_ascii_digit()));
        Self(value)
    }

    /// Returns the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no digits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric values of the digits, left to right.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    /// Returns at most the first `len` digits.
    pub fn truncated(&self, len: usize) -> Self {
        Self(self.0[..len.min(self.0.len())].to_string())
    }

    /// True when the digits begin with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Display for CanonicalDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalDigits {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CanonicalDigits {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CanonicalDigits {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CanonicalDigits> for String {
    fn from(value: CanonicalDigits) -> Self {
        value.0
    }
}

/// Collects characters, discarding anything that is not `0-9`.
impl FromIterator<char> for CanonicalDigits {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().filter(char::is_ascii_digit).collect())
    }
}
