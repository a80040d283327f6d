//! PostgreSQL implementation of DocumentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use sign_core::entities::Document;
use sign_core::traits::{DocumentRepository, RepoResult};
use sign_core::value_objects::{DocumentId, TeamId, UserId};

use crate::models::DocumentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of DocumentRepository
#[derive(Clone)]
pub struct PgDocumentRepository {
    pool: PgPool,
}

impl PgDocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentRepository for PgDocumentRepository {
    #[instrument(skip(self))]
    async fn find_authorized(
        &self,
        document_id: DocumentId,
        user_id: UserId,
        team_id: Option<TeamId>,
    ) -> RepoResult<Option<Document>> {
        let result = sqlx::query_as::<_, DocumentModel>(
            r"
            SELECT d.id, d.title, d.status, d.user_id, d.team_id, d.created_at, d.updated_at
            FROM documents d
            WHERE d.id = $1
              AND (
                ($3::BIGINT IS NULL AND d.user_id = $2 AND d.team_id IS NULL)
                OR (
                  d.team_id = $3
                  AND EXISTS (
                    SELECT 1 FROM team_members tm
                    WHERE tm.team_id = $3 AND tm.user_id = $2
                  )
                )
              )
            ",
        )
        .bind(document_id.into_inner())
        .bind(user_id.into_inner())
        .bind(team_id.map(TeamId::into_inner))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Document::try_from).transpose()
    }
}
