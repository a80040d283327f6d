//! Domain events recorded in the document audit log

mod audit_event;

pub use audit_event::{AuditLogType, DocumentAuditEvent, FieldUpdatedAuditData};
