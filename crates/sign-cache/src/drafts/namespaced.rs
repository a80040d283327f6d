//! Key-prefixing wrapper over any draft store

use std::sync::Arc;

use async_trait::async_trait;
use sign_core::traits::{DraftStore, DraftStoreError};

/// Draft store view restricted to one namespace
///
/// Keys are stored as `{namespace}:{key}`.
#[derive(Clone)]
pub struct NamespacedDraftStore {
    inner: Arc<dyn DraftStore>,
    namespace: String,
}

impl NamespacedDraftStore {
    pub fn new(inner: Arc<dyn DraftStore>, namespace: impl Into<String>) -> Self {
        Self {
            inner,
            namespace: namespace.into(),
        }
    }

    fn scoped(&self, key: &str) -> String {
        format!("{}:{key}", self.namespace)
    }
}

impl std::fmt::Debug for NamespacedDraftStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamespacedDraftStore")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl DraftStore for NamespacedDraftStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DraftStoreError> {
        self.inner.get(&self.scoped(key)).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DraftStoreError> {
        self.inner.set(&self.scoped(key), value).await
    }

    async fn remove(&self, key: &str) -> Result<(), DraftStoreError> {
        self.inner.remove(&self.scoped(key)).await
    }
}
