//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Document, DocumentAuditLog, Field, FieldPatch, FieldWithRecipient, NewDocumentAuditLog,
    Recipient, Team, User,
};
use crate::error::DomainError;
use crate::value_objects::{DocumentId, FieldId, RecipientId, TeamId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User / Team Repositories
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;
}

#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find a team, but only if the user is one of its members
    async fn find_for_member(&self, team_id: TeamId, user_id: UserId) -> RepoResult<Option<Team>>;
}

// ============================================================================
// Document Repository
// ============================================================================

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Find a document the caller may access
    ///
    /// Without a team only personal documents of `user_id` match; with a team
    /// only that team's documents match, and only while the user is a member.
    async fn find_authorized(
        &self,
        document_id: DocumentId,
        user_id: UserId,
        team_id: Option<TeamId>,
    ) -> RepoResult<Option<Document>>;
}

// ============================================================================
// Recipient Repository
// ============================================================================

#[async_trait]
pub trait RecipientRepository: Send + Sync {
    /// Find a recipient that belongs to the given document
    async fn find_in_document(
        &self,
        recipient_id: RecipientId,
        document_id: DocumentId,
    ) -> RepoResult<Option<Recipient>>;
}

// ============================================================================
// Field Repository
// ============================================================================

/// Ownership filter for a single field lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldScope {
    pub field_id: FieldId,
    pub document_id: DocumentId,
    pub user_id: UserId,
    pub team_id: Option<TeamId>,
}

/// Builds the audit entry for an update from the prior and resulting field
///
/// Called inside the update transaction, after the new row has been read back.
pub trait AuditEntryBuilder: Send + Sync {
    fn build(&self, before: &Field, after: &FieldWithRecipient) -> NewDocumentAuditLog;
}

impl<F> AuditEntryBuilder for F
where
    F: Fn(&Field, &FieldWithRecipient) -> NewDocumentAuditLog + Send + Sync,
{
    fn build(&self, before: &Field, after: &FieldWithRecipient) -> NewDocumentAuditLog {
        self(before, after)
    }
}

#[async_trait]
pub trait FieldRepository: Send + Sync {
    /// Find a field together with its document, applying the ownership filter
    ///
    /// Returns `None` both when the field does not exist and when the caller
    /// may not see it.
    async fn find_authorized(&self, scope: &FieldScope) -> RepoResult<Option<(Field, Document)>>;

    /// List all fields of a document with their recipients, ordered by id
    async fn list_by_document(&self, document_id: DocumentId)
        -> RepoResult<Vec<FieldWithRecipient>>;

    /// Apply `patch` and append the audit entry produced by `audit` atomically
    ///
    /// Either both the update and the audit insert are committed or neither is.
    async fn update_with_audit(
        &self,
        before: &Field,
        patch: &FieldPatch,
        audit: &dyn AuditEntryBuilder,
    ) -> RepoResult<FieldWithRecipient>;
}

// ============================================================================
// Document Audit Log Repository
// ============================================================================

/// Read side of the audit log; entries are only ever written by
/// [`FieldRepository::update_with_audit`]
#[async_trait]
pub trait DocumentAuditLogRepository: Send + Sync {
    /// List entries for a document in creation order
    async fn list_by_document(
        &self,
        document_id: DocumentId,
        limit: i64,
    ) -> RepoResult<Vec<DocumentAuditLog>>;
}
