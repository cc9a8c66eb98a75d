//! Repository backends for hashlink.
//!
//! [`KvStore`] is the durable single-file store; [`KvRepository`] binds it to
//! one namespace. [`InMemoryRepository`] keeps everything in process memory.

pub mod kv;
pub mod memory;

pub use hashlink_core::{ReadRepository, Repository, StorageError, UrlRecord};
pub use kv::{KvRepository, KvStore};
pub use memory::InMemoryRepository;
