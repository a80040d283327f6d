//! Audit log service
//!
//! Read access to a document's audit history.

use sign_core::entities::DocumentAuditLog;
use sign_core::value_objects::{DocumentId, TeamId, UserId};
use tracing::instrument;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Default number of entries returned when the caller gives no limit
pub const DEFAULT_AUDIT_LOG_LIMIT: i64 = 100;

/// Audit log service
pub struct AuditLogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditLogService<'a> {
    /// Create a new AuditLogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List a document's audit entries in creation order
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        document_id: DocumentId,
        user_id: UserId,
        team_id: Option<TeamId>,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<DocumentAuditLog>> {
        self.ctx
            .document_repo()
            .find_authorized(document_id, user_id, team_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Document", document_id.to_string()))?;

        let limit = limit.unwrap_or(DEFAULT_AUDIT_LOG_LIMIT);
        Ok(self
            .ctx
            .audit_log_repo()
            .list_by_document(document_id, limit)
            .await?)
    }
}
