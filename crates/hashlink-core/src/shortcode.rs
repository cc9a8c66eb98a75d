use crate::error::CoreError;
use std::fmt::Display;

/// A short code identifying a stored URL mapping.
///
/// Codes produced by the generator are validated: at least one character,
/// all drawn from `[a-zA-Z0-9_-]`. There is no upper bound; the encoder's
/// minimum length decides how long codes get. Codes taken from an incoming request path are looked up
/// as-is; an unknown code simply misses.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    pub const MIN_LENGTH: usize = 1;

    /// Creates a new `ShortCode` after validating the input.
    pub fn new(code: impl Into<String>) -> Result<Self, CoreError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Used for lookup keys taken verbatim from a request.
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Builds the externally visible short URL, `scheme://host/code`.
    pub fn to_url(&self, scheme: &str, host: &str) -> String {
        format!("{}://{}/{}", scheme, host.trim_end_matches('/'), self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> Result<(), CoreError> {
        if code.len() < Self::MIN_LENGTH {
            return Err(CoreError::InvalidShortCode(format!(
                "length must be at least {}, got {}",
                Self::MIN_LENGTH,
                code.len()
            )));
        }

        if !code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only alphanumeric characters, hyphens, or underscores: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ShortCode> for String {
    fn from(code: ShortCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(ShortCode::new("a").is_ok());
        assert!(ShortCode::new("Abc-123_xyz").is_ok());
    }

    #[test]
    fn empty_code_is_rejected() {
        assert!(ShortCode::new("").is_err());
    }

    #[test]
    fn long_codes_are_accepted() {
        assert!(ShortCode::new("a".repeat(64)).is_ok());
        assert!(ShortCode::new("Z9".repeat(200)).is_ok());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortCode::new("abc def").is_err());
        assert!(ShortCode::new("abc/def").is_err());
        assert!(ShortCode::new("abc!def").is_err());
    }

    #[test]
    fn unchecked_keeps_input_verbatim() {
        let code = ShortCode::new_unchecked("not/valid");
        assert_eq!(code.as_str(), "not/valid");
    }

    #[test]
    fn display() {
        let code = ShortCode::new("my-code").unwrap();
        assert_eq!(code.to_string(), "my-code");
    }

    #[test]
    fn to_url() {
        let code = ShortCode::new("abc123").unwrap();
        assert_eq!(
            code.to_url("http", "localhost:8080"),
            "http://localhost:8080/abc123"
        );
        assert_eq!(
            code.to_url("https", "link.example/"),
            "https://link.example/abc123"
        );
    }
}
