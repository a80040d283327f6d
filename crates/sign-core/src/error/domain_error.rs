//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{DocumentId, FieldId, RecipientId, TeamId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Field not found: {0}")]
    FieldNotFound(FieldId),

    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    #[error("Recipient not found: {0}")]
    RecipientNotFound(RecipientId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Team not found: {0}")]
    TeamNotFound(TeamId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid field type: {0}")]
    InvalidFieldType(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Field has already been signed")]
    FieldAlreadySigned,

    #[error("Recipient has already signed: {0}")]
    RecipientAlreadySigned(RecipientId),

    #[error("Document has already been completed")]
    DocumentCompleted,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::FieldNotFound(_) => "UNKNOWN_FIELD",
            Self::DocumentNotFound(_) => "UNKNOWN_DOCUMENT",
            Self::RecipientNotFound(_) => "UNKNOWN_RECIPIENT",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::TeamNotFound(_) => "UNKNOWN_TEAM",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidFieldType(_) => "INVALID_FIELD_TYPE",

            // Conflict
            Self::FieldAlreadySigned => "FIELD_ALREADY_SIGNED",
            Self::RecipientAlreadySigned(_) => "RECIPIENT_ALREADY_SIGNED",
            Self::DocumentCompleted => "DOCUMENT_COMPLETED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::FieldNotFound(_)
                | Self::DocumentNotFound(_)
                | Self::RecipientNotFound(_)
                | Self::UserNotFound(_)
                | Self::TeamNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidFieldType(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::FieldAlreadySigned | Self::RecipientAlreadySigned(_) | Self::DocumentCompleted
        )
    }
}
