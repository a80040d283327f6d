//! Domain entities - core business objects

mod audit_log;
mod document;
mod field;
mod field_meta;
mod recipient;
mod user;

pub use audit_log::{AuditActor, DocumentAuditLog, NewDocumentAuditLog, RequestMetadata};
pub use document::{Document, DocumentStatus};
pub use field::{Field, FieldPatch, FieldType, FieldWithRecipient};
pub use field_meta::{draft_key, FieldMeta};
pub use recipient::{Recipient, RecipientRole, SigningStatus};
pub use user::{Team, User};
