//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in sign-core.

mod audit_log;
mod document;
mod error;
mod field;
mod recipient;
mod team;
mod user;

pub use audit_log::PgDocumentAuditLogRepository;
pub use document::PgDocumentRepository;
pub use field::PgFieldRepository;
pub use recipient::PgRecipientRepository;
pub use team::PgTeamRepository;
pub use user::PgUserRepository;
