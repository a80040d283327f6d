//! Error handling utilities for repositories

use sign_core::error::DomainError;
use sign_core::value_objects::FieldId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "field not found" error
pub fn field_not_found(id: FieldId) -> DomainError {
    DomainError::FieldNotFound(id)
}
