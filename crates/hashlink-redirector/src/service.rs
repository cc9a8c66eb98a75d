use std::sync::Arc;

use crate::redirector::Redirector;
use async_trait::async_trait;
use hashlink_core::{ReadRepository, ShortCode};
use tracing::{debug, trace};

/// Service for handling URL redirects.
///
/// Uses a read-only repository to fetch URL records. The stored URL is
/// handed back untouched.
#[derive(Debug, Clone)]
pub struct RedirectorService<R> {
    repository: Arc<R>,
}

impl<R: ReadRepository> RedirectorService<R> {
    /// Creates a new RedirectorService with the given repository.
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Resolves a short code to its original URL.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(url))` - The original URL if the code is known
    /// * `Ok(None)` - If the code doesn't exist
    /// * `Err(e)` - If there was an error accessing the repository
    pub async fn resolve(&self, code: &ShortCode) -> crate::Result<Option<String>> {
        Redirector::resolve(self, code).await
    }
}

#[async_trait]
impl<R: ReadRepository> Redirector for RedirectorService<R> {
    async fn resolve(&self, code: &ShortCode) -> crate::Result<Option<String>> {
        trace!(code = %code, "resolving short code");

        match self.repository.get(code).await? {
            Some(record) => {
                debug!(code = %code, url = %record.original_url, "Resolved short code");
                Ok(Some(record.original_url))
            }
            None => {
                trace!(code = %code, "Short code not found");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RedirectorError;
    use hashlink_core::{Repository, StorageError, UrlRecord};
    use hashlink_storage::InMemoryRepository;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    async fn setup_with_record(
        code: &ShortCode,
        url: &str,
    ) -> RedirectorService<InMemoryRepository> {
        let repo = InMemoryRepository::new();
        repo.upsert(code, UrlRecord::new(url)).await.unwrap();
        RedirectorService::new(repo)
    }

    struct UnavailableRepository;

    #[async_trait]
    impl ReadRepository for UnavailableRepository {
        async fn get(&self, _code: &ShortCode) -> Result<Option<UrlRecord>, StorageError> {
            Err(StorageError::Unavailable("database closed".to_string()))
        }
    }

    #[tokio::test]
    async fn resolve_existing_code() {
        let c = code("abc123");
        let service = setup_with_record(&c, "https://example.com").await;

        let result = service.resolve(&c).await.unwrap();
        assert_eq!(result.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn resolve_nonexistent_code() {
        let service = RedirectorService::new(InMemoryRepository::new());

        let result = service.resolve(&code("zzzz")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn resolve_returns_stored_value_verbatim() {
        let c = code("abc123");
        let stored = "not even a url, but stored anyway ";
        let service = setup_with_record(&c, stored).await;

        let result = service.resolve(&c).await.unwrap();
        assert_eq!(result.as_deref(), Some(stored));
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let service = RedirectorService::new(UnavailableRepository);

        let err = service.resolve(&code("abc123")).await.unwrap_err();
        assert!(matches!(
            err,
            RedirectorError::Storage(StorageError::Unavailable(_))
        ));
    }
}
