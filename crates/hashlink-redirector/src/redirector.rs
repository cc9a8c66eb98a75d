use crate::Result;
use async_trait::async_trait;
use hashlink_core::ShortCode;

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves a short code to the original URL, exactly as stored.
    /// Returns `None` if the code does not exist.
    async fn resolve(&self, code: &ShortCode) -> Result<Option<String>>;
}
