//! Redirector service library.
//!
//! This crate provides a [`RedirectorService`] that resolves short codes to
//! their original URLs through a read-only repository.
//!
//! # Example
//!
//! ```rust
//! use hashlink_core::{Repository, ShortCode, UrlRecord};
//! use hashlink_redirector::RedirectorService;
//! use hashlink_storage::InMemoryRepository;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = Arc::new(InMemoryRepository::new());
//! let code = ShortCode::new("abc123")?;
//! repo.upsert(&code, UrlRecord::new("https://example.com")).await?;
//!
//! let service = RedirectorService::new(repo);
//! if let Some(url) = service.resolve(&code).await? {
//!     println!("Redirect to: {}", url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod redirector;
pub mod service;

pub use error::{RedirectorError, Result};
pub use redirector::Redirector;
pub use service::RedirectorService;
