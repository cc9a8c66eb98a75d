use thiserror::Error;

/// Errors returned when building an encoder or producing a short code.
///
/// Everything except [`EncodingError::InvalidOutput`] is a configuration
/// fault and surfaces when [`HashId`](crate::HashId) is constructed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("alphabet must contain at least {min} unique characters, got {len}")]
    AlphabetTooShort { len: usize, min: usize },
    #[error("alphabet must not contain whitespace")]
    AlphabetContainsWhitespace,
    #[error("alphabet contains duplicate character '{0}'")]
    DuplicateAlphabetChar(char),
    #[error("encoded value is not a valid short code: {0}")]
    InvalidOutput(String),
}
