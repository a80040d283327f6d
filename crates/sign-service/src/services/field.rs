//! Field service
//!
//! Reads and updates placed fields. Every update is written together with a
//! `FIELD_UPDATED` audit entry in a single unit of work.

use sign_core::audit::diff_field_changes;
use sign_core::entities::{
    AuditActor, Document, Field, FieldMeta, FieldPatch, FieldType, FieldWithRecipient,
    NewDocumentAuditLog, RequestMetadata, Team, User,
};
use sign_core::error::DomainError;
use sign_core::events::{DocumentAuditEvent, FieldUpdatedAuditData};
use sign_core::traits::FieldScope;
use sign_core::value_objects::{DocumentId, FieldId, RecipientId, TeamId, UserId};
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Input for [`FieldService::update_field`]
///
/// Geometry and metadata left as `None` keep their stored values.
#[derive(Debug, Clone)]
pub struct UpdateFieldOptions {
    pub field_id: FieldId,
    pub document_id: DocumentId,
    pub user_id: UserId,
    pub team_id: Option<TeamId>,
    pub recipient_id: Option<RecipientId>,
    pub field_type: Option<FieldType>,
    pub page_number: Option<i32>,
    pub page_x: Option<f64>,
    pub page_y: Option<f64>,
    pub page_width: Option<f64>,
    pub page_height: Option<f64>,
    pub field_meta: Option<FieldMeta>,
    pub request_metadata: Option<RequestMetadata>,
}

impl UpdateFieldOptions {
    /// Options that change nothing; fill in the attributes to update
    pub fn new(field_id: FieldId, document_id: DocumentId, user_id: UserId) -> Self {
        Self {
            field_id,
            document_id,
            user_id,
            team_id: None,
            recipient_id: None,
            field_type: None,
            page_number: None,
            page_x: None,
            page_y: None,
            page_width: None,
            page_height: None,
            field_meta: None,
            request_metadata: None,
        }
    }

    fn scope(&self) -> FieldScope {
        FieldScope {
            field_id: self.field_id,
            document_id: self.document_id,
            user_id: self.user_id,
            team_id: self.team_id,
        }
    }

    fn patch(&self) -> FieldPatch {
        FieldPatch {
            recipient_id: self.recipient_id,
            field_type: self.field_type,
            page: self.page_number,
            position_x: self.page_x,
            position_y: self.page_y,
            width: self.page_width,
            height: self.page_height,
            field_meta: self.field_meta.clone(),
        }
    }
}

/// Field service
pub struct FieldService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FieldService<'a> {
    /// Create a new FieldService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a single field the caller may access
    #[instrument(skip(self))]
    pub async fn get_field(
        &self,
        document_id: DocumentId,
        field_id: FieldId,
        user_id: UserId,
        team_id: Option<TeamId>,
    ) -> ServiceResult<FieldWithRecipient> {
        let scope = FieldScope {
            field_id,
            document_id,
            user_id,
            team_id,
        };
        let (field, _) = self.find_authorized(&scope).await?;

        // The list query resolves recipients in one join
        self.ctx
            .field_repo()
            .list_by_document(document_id)
            .await?
            .into_iter()
            .find(|f| f.field.id == field.id)
            .ok_or_else(|| ServiceError::not_found("Field", field_id.to_string()))
    }

    /// List all fields of a document the caller may access
    #[instrument(skip(self))]
    pub async fn list_document_fields(
        &self,
        document_id: DocumentId,
        user_id: UserId,
        team_id: Option<TeamId>,
    ) -> ServiceResult<Vec<FieldWithRecipient>> {
        self.ctx
            .document_repo()
            .find_authorized(document_id, user_id, team_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Document", document_id.to_string()))?;

        Ok(self.ctx.field_repo().list_by_document(document_id).await?)
    }

    /// Update a field and record the change in the document audit log
    ///
    /// The acting user and team are resolved before the field is looked up.
    /// A field the caller may not access is reported as not found.
    #[instrument(
        skip(self, options),
        fields(field_id = %options.field_id, document_id = %options.document_id, user_id = %options.user_id)
    )]
    pub async fn update_field(&self, options: UpdateFieldOptions) -> ServiceResult<FieldWithRecipient> {
        let (user, team) = self.resolve_actor(options.user_id, options.team_id).await?;

        let (before, document) = self.find_authorized(&options.scope()).await?;

        if before.is_signed() {
            warn!("Rejected update of a completed field");
            return Err(DomainError::FieldAlreadySigned.into());
        }
        if document.is_completed() {
            warn!("Rejected update on a completed document");
            return Err(DomainError::DocumentCompleted.into());
        }

        let patch = options.patch();
        patch.validate()?;

        // Fields of a recipient who has signed are frozen, on either side of a reassignment
        if let Some(current_id) = before.recipient_id {
            let current = self
                .ctx
                .recipient_repo()
                .find_in_document(current_id, document.id)
                .await?;
            if current.is_some_and(|r| r.has_signed()) {
                warn!(recipient_id = %current_id, "Rejected update of a signed recipient's field");
                return Err(DomainError::RecipientAlreadySigned(current_id).into());
            }
        }
        if let Some(recipient_id) = patch.recipient_id {
            let target = self
                .ctx
                .recipient_repo()
                .find_in_document(recipient_id, document.id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Recipient", recipient_id.to_string()))?;
            if target.has_signed() {
                warn!(%recipient_id, "Rejected reassignment to a signed recipient");
                return Err(DomainError::RecipientAlreadySigned(recipient_id).into());
            }
        }

        let actor = AuditActor::resolve(&user, team.as_ref());
        let request_metadata = options.request_metadata;
        let build_entry = move |prior: &Field, after: &FieldWithRecipient| {
            field_updated_entry(prior, after, actor.clone(), request_metadata.clone())
        };

        let updated = self
            .ctx
            .field_repo()
            .update_with_audit(&before, &patch, &build_entry)
            .await?;

        info!(
            field_id = %updated.field.id,
            document_id = %updated.field.document_id,
            "Field updated"
        );

        Ok(updated)
    }

    async fn resolve_actor(
        &self,
        user_id: UserId,
        team_id: Option<TeamId>,
    ) -> ServiceResult<(User, Option<Team>)> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let team = match team_id {
            Some(team_id) => Some(
                self.ctx
                    .team_repo()
                    .find_for_member(team_id, user_id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("Team", team_id.to_string()))?,
            ),
            None => None,
        };

        Ok((user, team))
    }

    async fn find_authorized(&self, scope: &FieldScope) -> ServiceResult<(Field, Document)> {
        self.ctx
            .field_repo()
            .find_authorized(scope)
            .await?
            .ok_or_else(|| ServiceError::not_found("Field", scope.field_id.to_string()))
    }
}

fn field_updated_entry(
    before: &Field,
    after: &FieldWithRecipient,
    actor: AuditActor,
    request_metadata: Option<RequestMetadata>,
) -> NewDocumentAuditLog {
    let event = DocumentAuditEvent::FieldUpdated(FieldUpdatedAuditData {
        field_id: after.field.secondary_id.clone(),
        field_recipient_email: after.recipient_email().to_string(),
        field_recipient_id: after.field.recipient_id.map_or(-1, RecipientId::into_inner),
        field_type: after.field.field_type,
        changes: diff_field_changes(before, &after.field),
    });

    NewDocumentAuditLog::new(after.field.document_id, event, actor, request_metadata)
}
