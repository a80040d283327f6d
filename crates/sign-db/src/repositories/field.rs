//! PostgreSQL implementation of FieldRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use sign_core::entities::{Document, Field, FieldPatch, FieldWithRecipient};
use sign_core::error::DomainError;
use sign_core::traits::{AuditEntryBuilder, FieldRepository, FieldScope, RepoResult};
use sign_core::value_objects::{DocumentId, RecipientId, TeamId};

use crate::mappers::{AuditLogInsert, FieldPatchParams};
use crate::models::{FieldInDocumentModel, FieldModel, FieldWithRecipientModel};

use super::error::{field_not_found, map_db_error};

/// PostgreSQL implementation of FieldRepository
#[derive(Clone)]
pub struct PgFieldRepository {
    pool: PgPool,
}

impl PgFieldRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FieldRepository for PgFieldRepository {
    #[instrument(skip(self))]
    async fn find_authorized(&self, scope: &FieldScope) -> RepoResult<Option<(Field, Document)>> {
        let result = sqlx::query_as::<_, FieldInDocumentModel>(
            r"
            SELECT f.id, f.secondary_id, f.document_id, f.recipient_id, f.type, f.page,
                   f.position_x, f.position_y, f.width, f.height, f.custom_text, f.inserted,
                   f.field_meta,
                   d.title AS document_title, d.status AS document_status,
                   d.user_id AS document_user_id, d.team_id AS document_team_id,
                   d.created_at AS document_created_at, d.updated_at AS document_updated_at
            FROM fields f
            INNER JOIN documents d ON d.id = f.document_id
            WHERE f.id = $1
              AND f.document_id = $2
              AND (
                ($4::BIGINT IS NULL AND d.user_id = $3 AND d.team_id IS NULL)
                OR (
                  d.team_id = $4
                  AND EXISTS (
                    SELECT 1 FROM team_members tm
                    WHERE tm.team_id = $4 AND tm.user_id = $3
                  )
                )
              )
            ",
        )
        .bind(scope.field_id.into_inner())
        .bind(scope.document_id.into_inner())
        .bind(scope.user_id.into_inner())
        .bind(scope.team_id.map(TeamId::into_inner))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(FieldInDocumentModel::into_parts).transpose()
    }

    #[instrument(skip(self))]
    async fn list_by_document(
        &self,
        document_id: DocumentId,
    ) -> RepoResult<Vec<FieldWithRecipient>> {
        let rows = sqlx::query_as::<_, FieldWithRecipientModel>(
            r"
            SELECT f.id, f.secondary_id, f.document_id, f.recipient_id, f.type, f.page,
                   f.position_x, f.position_y, f.width, f.height, f.custom_text, f.inserted,
                   f.field_meta,
                   r.email AS recipient_email, r.name AS recipient_name,
                   r.role AS recipient_role, r.signing_status AS recipient_signing_status
            FROM fields f
            LEFT JOIN recipients r ON r.id = f.recipient_id
            WHERE f.document_id = $1
            ORDER BY f.id ASC
            ",
        )
        .bind(document_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(FieldWithRecipient::try_from).collect()
    }

    /// The prior state is re-read under `FOR UPDATE` so the recorded diff is
    /// against the row this update actually replaced.
    #[instrument(skip(self, patch, audit), fields(field_id = %before.id, document_id = %before.document_id))]
    async fn update_with_audit(
        &self,
        before: &Field,
        patch: &FieldPatch,
        audit: &dyn AuditEntryBuilder,
    ) -> RepoResult<FieldWithRecipient> {
        let params = FieldPatchParams::new(patch)?;

        // Dropping the transaction without commit rolls everything back
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let locked = sqlx::query_as::<_, FieldModel>(
            r"
            SELECT id, secondary_id, document_id, recipient_id, type, page,
                   position_x, position_y, width, height, custom_text, inserted, field_meta
            FROM fields
            WHERE id = $1 AND document_id = $2
            FOR UPDATE
            ",
        )
        .bind(before.id.into_inner())
        .bind(before.document_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| field_not_found(before.id))?;

        let snapshot = Field::try_from(locked)?;
        if snapshot.is_signed() {
            return Err(DomainError::FieldAlreadySigned);
        }

        // Shared locks hold off a signature landing on either recipient until commit
        let involved: Vec<i64> = [snapshot.recipient_id, patch.recipient_id]
            .into_iter()
            .flatten()
            .map(RecipientId::into_inner)
            .collect();
        if !involved.is_empty() {
            let signed: Option<i64> = sqlx::query_scalar(
                r"
                SELECT id FROM recipients
                WHERE id = ANY($1) AND document_id = $2 AND signing_status = 'SIGNED'
                ORDER BY id
                LIMIT 1
                FOR SHARE
                ",
            )
            .bind(&involved)
            .bind(before.document_id.into_inner())
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;

            if let Some(id) = signed {
                return Err(DomainError::RecipientAlreadySigned(RecipientId::new(id)));
            }
        }

        let updated = sqlx::query_as::<_, FieldWithRecipientModel>(
            r"
            WITH updated AS (
                UPDATE fields
                SET recipient_id = COALESCE($3, recipient_id),
                    type         = COALESCE($4, type),
                    page         = COALESCE($5, page),
                    position_x   = COALESCE($6, position_x),
                    position_y   = COALESCE($7, position_y),
                    width        = COALESCE($8, width),
                    height       = COALESCE($9, height),
                    field_meta   = COALESCE($10, field_meta)
                WHERE id = $1 AND document_id = $2
                RETURNING *
            )
            SELECT u.id, u.secondary_id, u.document_id, u.recipient_id, u.type, u.page,
                   u.position_x, u.position_y, u.width, u.height, u.custom_text, u.inserted,
                   u.field_meta,
                   r.email AS recipient_email, r.name AS recipient_name,
                   r.role AS recipient_role, r.signing_status AS recipient_signing_status
            FROM updated u
            LEFT JOIN recipients r ON r.id = u.recipient_id
            ",
        )
        .bind(before.id.into_inner())
        .bind(before.document_id.into_inner())
        .bind(params.recipient_id)
        .bind(params.field_type)
        .bind(params.page)
        .bind(params.position_x)
        .bind(params.position_y)
        .bind(params.width)
        .bind(params.height)
        .bind(params.field_meta)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| field_not_found(before.id))?;

        let after = FieldWithRecipient::try_from(updated)?;

        let entry = audit.build(&snapshot, &after);
        let insert = AuditLogInsert::new(&entry);

        sqlx::query(
            r"
            INSERT INTO document_audit_logs
                (id, document_id, created_at, type, data, name, email, user_id, user_agent, ip_address)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(insert.id)
        .bind(insert.document_id)
        .bind(insert.created_at)
        .bind(insert.log_type)
        .bind(&insert.data)
        .bind(insert.name)
        .bind(insert.email)
        .bind(insert.user_id)
        .bind(insert.user_agent)
        .bind(insert.ip_address)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(audit_id = %entry.id, "Field update committed with audit entry");

        Ok(after)
    }
}
