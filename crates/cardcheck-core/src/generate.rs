use cardcheck_canonical::{sanitize, CanonicalDigits, ValidationError};
use rand::Rng;

use crate::errors::CoreError;
use crate::luhn::check_digit;

/// Shortest number the generator produces.
pub const MIN_LENGTH: usize = 1;
/// Longest number the generator produces.
pub const MAX_LENGTH: usize = 19;
/// Length used when the caller has no preference.
pub const DEFAULT_LENGTH: usize = 16;

/// Parameters for [`generate`].
///
/// The fields are stored as given; the generator clamps `length` into
/// `MIN_LENGTH..=MAX_LENGTH` and truncates `prefix` to `length - 1` digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Requested total length, check digit included.
    pub length: usize,
    /// Leading digits to keep fixed.
    pub prefix: CanonicalDigits,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            prefix: CanonicalDigits::default(),
        }
    }
}

impl GenerationRequest {
    /// Lenient constructor: `prefix` is sanitized, nothing is rejected.
    pub fn new(length: usize, prefix: &str) -> Self {
        Self {
            length,
            prefix: sanitize(prefix),
        }
    }

    /// Strict constructor for callers that prefer errors to silent clamping.
    pub fn strict(length: usize, prefix: &str) -> Result<Self, CoreError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(ValidationError::OutOfBounds {
                field: "length",
                value: length.to_string(),
            }
            .into());
        }
        let prefix = CanonicalDigits::parse(prefix)?;
        if prefix.len() > length - 1 {
            return Err(ValidationError::OutOfBounds {
                field: "prefix",
                value: prefix.to_string(),
            }
            .into());
        }
        Ok(Self { length, prefix })
    }

    /// `length` clamped into `MIN_LENGTH..=MAX_LENGTH`.
    pub fn effective_length(&self) -> usize {
        self.length.clamp(MIN_LENGTH, MAX_LENGTH)
    }

    /// `prefix` truncated to leave room for the check digit.
    pub fn effective_prefix(&self) -> CanonicalDigits {
        self.prefix.truncated(self.effective_length() - 1)
    }
}

/// Generates a Luhn-valid number drawing digits from `rng`.
///
/// The output is exactly [`GenerationRequest::effective_length`] digits long
/// and starts with [`GenerationRequest::effective_prefix`].
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, request: &GenerationRequest) -> CanonicalDigits {
    let length = request.effective_length();
    if length != request.length {
        tracing::debug!(requested = request.length, length, "clamped generation length");
    }
    let body_len = length - 1;
    let prefix = request.effective_prefix();
    if prefix.len() < request.prefix.len() {
        tracing::debug!(
            requested = %request.prefix,
            kept = %prefix,
            "truncated generation prefix"
        );
    }

    let fill = body_len - prefix.len();
    let body: CanonicalDigits = prefix
        .as_str()
        .chars()
        .chain(std::iter::repeat_with(|| char::from(b'0' + rng.random_range(0..10u8))).take(fill))
        .collect();
    let check = char::from(b'0' + check_digit(&body));
    body.as_str().chars().chain(std::iter::once(check)).collect()
}

/// [`generate_with`] using the thread-local generator.
pub fn generate(request: &GenerationRequest) -> CanonicalDigits {
    generate_with(&mut rand::rng(), request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::luhn::is_valid;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn respects_length_and_prefix() {
        let mut rng = StdRng::seed_from_u64(7);
        let request = GenerationRequest::new(16, "4111");
        let number = generate_with(&mut rng, &request);
        assert_eq!(number.len(), 16);
        assert!(number.starts_with("4111"));
        assert!(is_valid(&number));
    }

    #[test]
    fn clamps_length() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_with(&mut rng, &GenerationRequest::new(0, "")).len(), 1);
        assert_eq!(generate_with(&mut rng, &GenerationRequest::new(40, "")).len(), 19);
    }

    #[test]
    fn single_digit_is_the_check_digit() {
        let number = generate(&GenerationRequest::new(1, "987"));
        assert_eq!(number.as_str(), "0");
    }

    #[test]
    fn long_prefix_is_truncated() {
        let mut rng = StdRng::seed_from_u64(3);
        let number = generate_with(&mut rng, &GenerationRequest::new(5, "123456789"));
        assert_eq!(number.len(), 5);
        assert!(number.starts_with("1234"));
        assert!(is_valid(&number));
    }

    #[test]
    fn prefix_filling_the_body_leaves_only_the_check_digit() {
        let number = generate(&GenerationRequest::new(16, "411111111111111"));
        assert_eq!(number.as_str(), "4111111111111111");
    }

    #[test]
    fn lenient_prefix_is_sanitized() {
        let request = GenerationRequest::new(16, "5500-00");
        assert_eq!(request.prefix.as_str(), "550000");
    }

    #[test]
    fn seeded_output_is_reproducible() {
        let request = GenerationRequest::default();
        let a = generate_with(&mut StdRng::seed_from_u64(42), &request);
        let b = generate_with(&mut StdRng::seed_from_u64(42), &request);
        assert_eq!(a, b);
    }

    #[test]
    fn strict_rejects_what_lenient_clamps() {
        assert!(matches!(
            GenerationRequest::strict(0, ""),
            Err(CoreError::Validation(ValidationError::OutOfBounds { field: "length", .. }))
        ));
        assert!(matches!(
            GenerationRequest::strict(20, ""),
            Err(CoreError::Validation(ValidationError::OutOfBounds { field: "length", .. }))
        ));
        assert!(matches!(
            GenerationRequest::strict(4, "1234"),
            Err(CoreError::Validation(ValidationError::OutOfBounds { field: "prefix", .. }))
        ));
        assert!(matches!(
            GenerationRequest::strict(16, "41-11"),
            Err(CoreError::Validation(ValidationError::NonDigit { .. }))
        ));
        let ok = GenerationRequest::strict(16, "411").unwrap();
        assert_eq!(ok.prefix.as_str(), "411");
    }
}
