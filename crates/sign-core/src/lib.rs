//! # sign-core
//!
//! Domain layer for the document-signing service: fields placed on documents,
//! their recipients, owning users and teams, and the append-only document audit log.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod audit;
pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use audit::{diff_field_changes, FieldAttribute, FieldChange};
pub use entities::{
    draft_key, AuditActor, Document, DocumentAuditLog, DocumentStatus, Field, FieldMeta,
    FieldPatch, FieldType, FieldWithRecipient, NewDocumentAuditLog, Recipient, RecipientRole,
    RequestMetadata, SigningStatus, Team, User,
};
pub use error::DomainError;
pub use events::{AuditLogType, DocumentAuditEvent, FieldUpdatedAuditData};
pub use traits::{
    AuditEntryBuilder, DocumentAuditLogRepository, DocumentRepository, DraftStore,
    DraftStoreError, FieldRepository, FieldScope, RecipientRepository, RepoResult,
    TeamRepository, UserRepository,
};
pub use value_objects::{DocumentId, FieldId, IdParseError, RecipientId, TeamId, UserId};
