//! URL shortener service implementation.
//!
//! This crate provides [`ShortenerService`], which derives a short code with a
//! [`Generator`](hashlink_generator::Generator) and stores the mapping in a
//! [`Repository`](hashlink_core::Repository). Core types are re-exported from
//! `hashlink_core`.

pub mod service;

pub use hashlink_core::{ShortenParams, ShortenedUrl, Shortener, ShortenerError};
pub use service::ShortenerService;
