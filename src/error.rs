//! Error types for formatting.

use thiserror::Error;

/// Errors that can occur when rendering a pattern or building format options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// An option value outside its allowed set, such as an offset style name
    /// other than `short`, `narrow` or `techie`.
    #[error("value '{value}' is out of range for property {option}")]
    InvalidFormatOption { option: &'static str, value: String },

    /// A pattern token with no directive, reported only in strict mode.
    #[error("unknown format token '{token}'")]
    UnknownToken { token: String },

    /// A date or time component outside its calendar range.
    #[error("{field} out of range: {value}")]
    FieldOutOfRange { field: &'static str, value: i64 },
}

impl FormatError {
    pub(crate) fn invalid_option(option: &'static str, value: impl Into<String>) -> Self {
        FormatError::InvalidFormatOption {
            option,
            value: value.into(),
        }
    }
}
