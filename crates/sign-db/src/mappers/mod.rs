//! Model to entity mappers
//!
//! Rows carrying enum columns or JSON convert through `TryFrom`, failing with
//! an internal error when the stored value is not one the domain knows.
//! `FieldPatchParams` prepares a patch for binding.

mod audit_log;
mod document;
mod field;
mod recipient;
mod user;

pub use audit_log::AuditLogInsert;
pub use field::FieldPatchParams;
