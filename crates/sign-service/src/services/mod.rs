//! Business logic services
//!
//! Services borrow a shared [`ServiceContext`] and orchestrate repositories
//! and stores for a single use case each.

pub mod audit_log;
pub mod context;
pub mod draft;
pub mod error;
pub mod field;

#[cfg(test)]
pub(crate) mod testing;

pub use audit_log::AuditLogService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use draft::DraftService;
pub use error::{ServiceError, ServiceResult};
pub use field::{FieldService, UpdateFieldOptions};
