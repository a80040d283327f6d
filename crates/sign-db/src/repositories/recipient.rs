//! PostgreSQL implementation of RecipientRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use sign_core::entities::Recipient;
use sign_core::traits::{RecipientRepository, RepoResult};
use sign_core::value_objects::{DocumentId, RecipientId};

use crate::models::RecipientModel;

use super::error::map_db_error;

/// PostgreSQL implementation of RecipientRepository
#[derive(Clone)]
pub struct PgRecipientRepository {
    pool: PgPool,
}

impl PgRecipientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipientRepository for PgRecipientRepository {
    #[instrument(skip(self))]
    async fn find_in_document(
        &self,
        recipient_id: RecipientId,
        document_id: DocumentId,
    ) -> RepoResult<Option<Recipient>> {
        let result = sqlx::query_as::<_, RecipientModel>(
            r"
            SELECT id, document_id, email, name, role, signing_status
            FROM recipients
            WHERE id = $1 AND document_id = $2
            ",
        )
        .bind(recipient_id.into_inner())
        .bind(document_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Recipient::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgRecipientRepository>();
    }
}
