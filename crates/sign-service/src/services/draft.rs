//! Draft service
//!
//! Server-side access to field settings drafts. Each request runs the
//! advanced-settings form against the caller's own slice of the draft store.

use std::sync::Arc;

use sign_cache::NamespacedDraftStore;
use sign_core::entities::{FieldMeta, FieldType};
use sign_core::value_objects::UserId;
use tracing::{info, instrument};

use crate::forms::{
    AdvancedSettingsForm, AdvancedSettingsProps, FieldFormEntry, SaveOutcome, TracingNotifier,
    NUMBER_FORMATS,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Draft service
pub struct DraftService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DraftService<'a> {
    /// Create a new DraftService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn open(
        &self,
        user_id: UserId,
        form_id: &str,
        field_type: FieldType,
    ) -> AdvancedSettingsForm {
        let store = NamespacedDraftStore::new(self.ctx.draft_store(), format!("user:{user_id}"));
        let props = AdvancedSettingsProps::new(
            "Advanced settings",
            "Configure additional settings for this field",
            FieldFormEntry::unplaced(form_id, field_type),
        );
        AdvancedSettingsForm::load(props, Arc::new(store), Arc::new(TracingNotifier)).await
    }

    /// Load a draft, or the defaults when none is stored
    #[instrument(skip(self))]
    pub async fn load(
        &self,
        user_id: UserId,
        form_id: &str,
        field_type: FieldType,
    ) -> ServiceResult<FieldMeta> {
        let form = self.open(user_id, form_id, field_type).await;
        Ok(form.draft().clone())
    }

    /// Replace a draft with the submitted settings
    ///
    /// The draft must carry all six attributes. Numeric fields only accept
    /// one of the offered number formats (or none).
    #[instrument(skip(self, draft))]
    pub async fn save(
        &self,
        user_id: UserId,
        form_id: &str,
        field_type: FieldType,
        draft: FieldMeta,
    ) -> ServiceResult<FieldMeta> {
        let mut form = self.open(user_id, form_id, field_type).await;
        let format = draft.format.clone();
        form.replace_draft(draft);

        if let Some(format) = format.filter(|f| field_type.is_numeric() && !f.is_empty()) {
            if !form.select_format(&format) {
                return Err(ServiceError::validation(format!(
                    "Unsupported number format '{format}', expected one of: {}",
                    NUMBER_FORMATS.join(", ")
                )));
            }
        }

        match form.save().await {
            SaveOutcome::Saved => {
                info!(key = %form.key(), "Settings draft saved");
                Ok(form.draft().clone())
            }
            SaveOutcome::Invalid => Err(ServiceError::validation(
                "An error occurred while saving the field.",
            )),
            SaveOutcome::StorageFailed => Err(ServiceError::storage("Failed to save settings.")),
        }
    }

    /// Remove a stored draft; removing a missing draft succeeds
    #[instrument(skip(self))]
    pub async fn discard(
        &self,
        user_id: UserId,
        form_id: &str,
        field_type: FieldType,
    ) -> ServiceResult<()> {
        let mut form = self.open(user_id, form_id, field_type).await;
        form.discard()
            .await
            .map_err(|e| ServiceError::storage(e.to_string()))
    }
}
