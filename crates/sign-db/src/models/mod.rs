//! Database models - SQLx-compatible structs for PostgreSQL tables

mod audit_log;
mod document;
mod field;
mod recipient;
mod user;

pub use audit_log::DocumentAuditLogModel;
pub use document::DocumentModel;
pub use field::{FieldInDocumentModel, FieldModel, FieldWithRecipientModel};
pub use recipient::RecipientModel;
pub use user::{TeamModel, UserModel};
