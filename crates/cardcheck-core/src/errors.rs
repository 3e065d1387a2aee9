use thiserror::Error;

/// Core error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A strict constructor rejected its input.
    #[error("validation failed: {0}")]
    Validation(#[from] cardcheck_canonical::ValidationError),
    /// A mask glyph would be indistinguishable from a real digit.
    #[error("mask glyph '{0}' must not be a decimal digit or whitespace")]
    InvalidMaskGlyph(char),
}
