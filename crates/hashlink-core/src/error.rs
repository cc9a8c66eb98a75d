use thiserror::Error;

/// Errors related to the core functionality of the URL shortener service.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// Errors returned by repository backends.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage transaction failed: {0}")]
    Transaction(String),
    #[error("storage commit failed: {0}")]
    Commit(String),
    #[error("invalid namespace: {0}")]
    InvalidNamespace(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Errors returned by [`Shortener`](crate::shortener::Shortener) implementations.
///
/// Each variant names the pipeline stage that failed so the HTTP boundary can
/// report it.
#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    /// Reducing the URL to its checksum failed.
    ///
    /// Not produced by the bundled services: `Checksum::reduce` in
    /// `hashlink-generator` is infallible. Kept so the checksum stage has its
    /// own failure in the shortener contract.
    #[error("failed to checksum url: {0}")]
    Checksum(String),
    #[error("failed to encode short code: {0}")]
    Encoding(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<StorageError> for ShortenerError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value.to_string())
    }
}
