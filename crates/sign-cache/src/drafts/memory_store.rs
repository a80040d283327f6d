//! In-process draft store backed by a concurrent map

use async_trait::async_trait;
use dashmap::DashMap;
use sign_core::traits::{DraftStore, DraftStoreError};

/// Draft store that lives for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    entries: DashMap<String, String>,
}

impl MemoryDraftStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored drafts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl DraftStore for MemoryDraftStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DraftStoreError> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DraftStoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), DraftStoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
