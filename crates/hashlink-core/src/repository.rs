use crate::error::StorageError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, StorageError>;

/// A stored URL record in the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    /// The original URL that was shortened, stored as received.
    pub original_url: String,
}

impl UrlRecord {
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
        }
    }
}

/// A read-only view of a repository.
///
/// This trait provides only the read operations from [`Repository`],
/// allowing services like the redirector to have read-only access.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the URL record for a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Stores the record under `code`, replacing any previous record.
    ///
    /// The write is committed before this returns `Ok`.
    async fn upsert(&self, code: &ShortCode, record: UrlRecord) -> Result<()>;
}

#[async_trait]
impl<T: ReadRepository + ?Sized> ReadRepository for Arc<T> {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        (**self).get(code).await
    }
}

#[async_trait]
impl<T: Repository + ?Sized> Repository for Arc<T> {
    async fn upsert(&self, code: &ShortCode, record: UrlRecord) -> Result<()> {
        (**self).upsert(code, record).await
    }
}
