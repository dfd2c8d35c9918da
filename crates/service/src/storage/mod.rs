//! Storage abstractions for service layer
//!
//! The blog keeps every collection as one string blob under one key. Anything
//! that can `get` and `put` such blobs can back it.

use async_trait::async_trait;

use crate::errors::ServiceError;

pub mod json_file_store;
pub mod memory;

pub use json_file_store::JsonFileKvStore;
pub use memory::InMemoryKvStore;

/// Opaque key-value service. No transactions, no compare-and-swap, no versions.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Blob stored under `key`, or `None` if the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, ServiceError>;
    /// Overwrite the blob under `key`.
    async fn put(&self, key: &str, value: String) -> Result<(), ServiceError>;
}
