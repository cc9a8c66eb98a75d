use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hashlink_core::ShortenerError;
use hashlink_redirector::RedirectorError;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Request failures, one variant per stage.
///
/// Every variant maps to `500 Internal Server Error` with a short plain-text
/// body naming the stage; the detailed cause is only logged.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read request body: {0}")]
    ReadBody(#[source] BytesRejection),
    #[error("failed to unmarshal request: {0}")]
    UnmarshalJson(#[source] serde_json::Error),
    #[error("failed to hash url: {0}")]
    Encode(String),
    #[error("failed to marshal response: {0}")]
    MarshalResponse(#[source] serde_json::Error),
    #[error("failed to save mapping: {0}")]
    SaveToDb(String),
    #[error("failed to read mapping: {0}")]
    ReadFromDb(String),
    #[error("stored url is not a valid Location header: {0}")]
    InvalidLocation(String),
}

impl AppError {
    /// The response body sent to the client.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::ReadBody(_) => "Can't read request body",
            AppError::UnmarshalJson(_) => "Can't unmarshal JSON",
            AppError::Encode(_) => "Can't hash URL",
            AppError::MarshalResponse(_) => "Can't marshal as JSON",
            AppError::SaveToDb(_) => "Can't save to DB",
            AppError::ReadFromDb(_) => "Can't read from DB",
            AppError::InvalidLocation(_) => "Can't redirect to stored URL",
        }
    }
}

impl From<ShortenerError> for AppError {
    fn from(value: ShortenerError) -> Self {
        match value {
            ShortenerError::Checksum(message) | ShortenerError::Encoding(message) => {
                Self::Encode(message)
            }
            ShortenerError::Storage(message) => Self::SaveToDb(message),
        }
    }
}

impl From<RedirectorError> for AppError {
    fn from(value: RedirectorError) -> Self {
        match value {
            RedirectorError::Storage(source) => Self::ReadFromDb(source.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.public_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashlink_core::StorageError;

    #[test]
    fn shortener_errors_keep_their_stage() {
        let checksum: AppError = ShortenerError::Checksum("reducer failed".into()).into();
        let encode: AppError = ShortenerError::Encoding("bad alphabet".into()).into();
        let storage: AppError = ShortenerError::Storage("disk full".into()).into();

        assert!(matches!(checksum, AppError::Encode(_)));
        assert_eq!(checksum.public_message(), "Can't hash URL");
        assert!(checksum.to_string().contains("reducer failed"));
        assert_eq!(encode.public_message(), "Can't hash URL");
        assert_eq!(storage.public_message(), "Can't save to DB");
    }

    #[test]
    fn redirector_storage_error_is_a_read_failure() {
        let err: AppError =
            RedirectorError::Storage(StorageError::Unavailable("closed".into())).into();

        assert_eq!(err.public_message(), "Can't read from DB");
        assert!(err.to_string().contains("closed"));
    }

    #[test]
    fn every_error_is_a_server_error() {
        let response = AppError::InvalidLocation("newline".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
