//! Redis-backed draft store

use async_trait::async_trait;
use sign_core::traits::{DraftStore, DraftStoreError};

use crate::pool::{RedisPool, RedisPoolError};

/// Key prefix for drafts
pub const DRAFT_KEY_PREFIX: &str = "draft:";

/// Draft store shared by every server instance
#[derive(Debug, Clone)]
pub struct RedisDraftStore {
    pool: RedisPool,
    ttl_seconds: Option<u64>,
}

impl RedisDraftStore {
    /// Create a store; drafts expire after `ttl_seconds` when set
    #[must_use]
    pub fn new(pool: RedisPool, ttl_seconds: Option<u64>) -> Self {
        Self { pool, ttl_seconds }
    }

    fn key(key: &str) -> String {
        format!("{DRAFT_KEY_PREFIX}{key}")
    }
}

fn map_pool_error(e: RedisPoolError) -> DraftStoreError {
    match e {
        RedisPoolError::CreatePool(_) | RedisPoolError::GetConnection(_) => {
            DraftStoreError::Unavailable(e.to_string())
        }
        RedisPoolError::Redis(_) => DraftStoreError::Operation(e.to_string()),
    }
}

#[async_trait]
impl DraftStore for RedisDraftStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DraftStoreError> {
        self.pool
            .get_string(&Self::key(key))
            .await
            .map_err(map_pool_error)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DraftStoreError> {
        self.pool
            .set_string(&Self::key(key), value, self.ttl_seconds)
            .await
            .map_err(map_pool_error)?;

        tracing::debug!(key = %key, ttl = ?self.ttl_seconds, "Stored draft");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), DraftStoreError> {
        self.pool
            .delete(&Self::key(key))
            .await
            .map_err(map_pool_error)?;
        Ok(())
    }
}
