use async_trait::async_trait;
use hashlink_core::{Repository, ShortenParams, ShortenedUrl, Shortener, ShortenerError, UrlRecord};
use hashlink_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator`:
/// - the generator derives the short code from the original URL
/// - the repository stores the mapping, replacing any previous one
///
/// Codes are derived, not allocated, so two URLs whose checksums collide get
/// the same code and the later call overwrites the earlier mapping. No
/// collision detection is performed.
#[derive(Debug, Clone)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
        }
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, params: ShortenParams) -> Result<ShortenedUrl, ShortenerError> {
        let ShortenParams {
            original_url,
            scheme,
            host,
        } = params;

        let code = self
            .generator
            .generate(&original_url)
            .map_err(|e| ShortenerError::Encoding(e.to_string()))?;
        trace!(code = %code, "derived short code");

        self.repository
            .upsert(&code, UrlRecord::new(original_url))
            .await?;
        debug!(code = %code, "stored short code");

        let short_url = code.to_url(&scheme, &host);
        Ok(ShortenedUrl { code, short_url })
    }
}
