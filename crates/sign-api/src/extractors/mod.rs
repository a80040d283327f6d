//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, path parameters,
//! and client metadata.

mod auth;
mod metadata;
mod path;
mod validated;

pub use auth::AuthUser;
pub use metadata::{request_metadata, ClientMetadata};
pub use path::{ApiPath, DocumentPath, DraftPath, FieldPath};
pub use validated::{ValidatedJson, ValidatedQuery};
