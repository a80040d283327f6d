//! Draft store implementations
//!
//! - [`RedisDraftStore`]: shared across server instances, optional TTL
//! - [`MemoryDraftStore`]: single process, used in tests and local tooling
//! - [`NamespacedDraftStore`]: prefixes keys so callers cannot see each other's drafts

mod memory_store;
mod namespaced;
mod redis_store;

pub use memory_store::MemoryDraftStore;
pub use namespaced::NamespacedDraftStore;
pub use redis_store::{RedisDraftStore, DRAFT_KEY_PREFIX};
