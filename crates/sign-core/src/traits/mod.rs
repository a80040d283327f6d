//! Ports implemented by the infrastructure crates

mod draft_store;
mod repositories;

pub use draft_store::{DraftStore, DraftStoreError};
pub use repositories::{
    AuditEntryBuilder, DocumentAuditLogRepository, DocumentRepository, FieldRepository, FieldScope,
    RecipientRepository, RepoResult, TeamRepository, UserRepository,
};
