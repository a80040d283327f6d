//! # sign-cache
//!
//! Redis connection pooling and the key-value stores that hold unsaved field
//! settings drafts.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use sign_cache::{NamespacedDraftStore, RedisDraftStore, RedisPool, RedisPoolConfig};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let store = Arc::new(RedisDraftStore::new(pool, Some(3600)));
//!
//! // Each user sees only their own drafts
//! let drafts = NamespacedDraftStore::new(store, "user:42");
//! drafts.set("field_abc_NUMBER", r#"{"label":"Total"}"#).await?;
//! ```

pub mod drafts;
pub mod pool;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export draft stores
pub use drafts::{MemoryDraftStore, NamespacedDraftStore, RedisDraftStore, DRAFT_KEY_PREFIX};
