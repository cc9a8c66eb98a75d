use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

/// Parameters for creating a shortened URL.
#[derive(Debug, Clone)]
pub struct ShortenParams {
    /// The original URL to be shortened.
    pub original_url: String,
    /// Scheme used when composing the short URL, e.g. `http`.
    pub scheme: String,
    /// Host (and optional port) used when composing the short URL.
    pub host: String,
}

/// The outcome of a successful shorten call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub code: ShortCode,
    /// `scheme://host/code`
    pub short_url: String,
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Derives the short code for `params.original_url`, stores the mapping
    /// and returns the fully qualified short URL.
    async fn shorten(&self, params: ShortenParams) -> Result<ShortenedUrl>;
}
