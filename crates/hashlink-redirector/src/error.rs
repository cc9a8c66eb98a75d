use hashlink_core::StorageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RedirectorError>;

/// Errors returned while resolving a short code.
///
/// An unknown code is not an error; it resolves to `None`.
#[derive(Debug, Clone, Error)]
pub enum RedirectorError {
    #[error("storage operation failed: {0}")]
    Storage(#[from] StorageError),
}
