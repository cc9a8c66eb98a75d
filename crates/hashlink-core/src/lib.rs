//! Core types and traits for the hashlink URL shortener.
//!
//! This crate provides shared types and traits used by the code generator,
//! the storage backends, the shortener and the redirector services.

pub mod error;
pub mod repository;
pub mod shortcode;
pub mod shortener;

pub use error::{CoreError, ShortenerError, StorageError};
pub use repository::{ReadRepository, Repository, UrlRecord};
pub use shortcode::ShortCode;
pub use shortener::{ShortenParams, ShortenedUrl, Shortener};
