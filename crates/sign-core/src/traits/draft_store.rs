//! Draft store port - a small async key-value store for unsaved form state

use async_trait::async_trait;
use thiserror::Error;

/// Draft store errors
#[derive(Debug, Error)]
pub enum DraftStoreError {
    #[error("Draft store unavailable: {0}")]
    Unavailable(String),

    #[error("Draft store operation failed: {0}")]
    Operation(String),
}

/// Key-value store holding serialized drafts
///
/// Values are opaque strings; callers own the encoding.
#[async_trait]
pub trait DraftStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, DraftStoreError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), DraftStoreError>;

    async fn remove(&self, key: &str) -> Result<(), DraftStoreError>;
}
