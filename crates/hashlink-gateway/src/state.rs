use std::sync::Arc;

use hashlink_core::Shortener;
use hashlink_redirector::Redirector;

/// Shared request context. Cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    redirector: Arc<dyn Redirector>,
    scheme: String,
    default_host: String,
}

impl AppState {
    /// `default_host` is used for short URLs when a request has no usable
    /// `Host` header.
    pub fn new(
        shortener: Arc<dyn Shortener>,
        redirector: Arc<dyn Redirector>,
        scheme: impl Into<String>,
        default_host: impl Into<String>,
    ) -> Self {
        Self {
            shortener,
            redirector,
            scheme: scheme.into(),
            default_host: default_host.into(),
        }
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.redirector.as_ref()
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn default_host(&self) -> &str {
        &self.default_host
    }
}
