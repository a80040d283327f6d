//! PostgreSQL implementation of DocumentAuditLogRepository
//!
//! Read side only. Inserts happen inside the field update transaction.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use sign_core::entities::DocumentAuditLog;
use sign_core::traits::{DocumentAuditLogRepository, RepoResult};
use sign_core::value_objects::DocumentId;

use crate::models::DocumentAuditLogModel;

use super::error::map_db_error;

/// PostgreSQL implementation of DocumentAuditLogRepository
#[derive(Clone)]
pub struct PgDocumentAuditLogRepository {
    pool: PgPool,
}

impl PgDocumentAuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentAuditLogRepository for PgDocumentAuditLogRepository {
    #[instrument(skip(self))]
    async fn list_by_document(
        &self,
        document_id: DocumentId,
        limit: i64,
    ) -> RepoResult<Vec<DocumentAuditLog>> {
        let rows = sqlx::query_as::<_, DocumentAuditLogModel>(
            r"
            SELECT id, document_id, created_at, type, data, name, email, user_id, user_agent, ip_address
            FROM document_audit_logs
            WHERE document_id = $1
            ORDER BY seq ASC
            LIMIT $2
            ",
        )
        .bind(document_id.into_inner())
        .bind(limit.clamp(1, 500))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(DocumentAuditLog::try_from).collect()
    }
}
