//! Advanced settings form for a single placed field
//!
//! Edits the field's [`FieldMeta`] as a draft. The draft is restored from the
//! draft store when the form opens and written back on save, keyed by the
//! field's form id and type.

use std::sync::Arc;

use sign_core::entities::{draft_key, FieldMeta, FieldType};
use sign_core::traits::{DraftStore, DraftStoreError};
use sign_core::value_objects::FieldId;
use tracing::{debug, error, instrument, warn};
use validator::Validate;

use super::notifier::{Notifier, Toast};

/// Number formats offered for numeric fields
pub const NUMBER_FORMATS: [&str; 2] = ["123,456.78", "123.456,78"];

const INVALID_SETTINGS_MESSAGE: &str = "An error occurred while saving the field.";
const STORAGE_FAILURE_MESSAGE: &str = "Failed to save settings.";

/// A field as placed in the editor, before it is persisted
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFormEntry {
    /// Editor-local identifier, stable for the lifetime of the editing session
    pub form_id: String,
    /// Id of the stored field, once it has been saved
    pub native_id: Option<FieldId>,
    pub field_type: FieldType,
    pub page_number: i32,
    pub page_x: f64,
    pub page_y: f64,
    pub page_width: f64,
    pub page_height: f64,
    pub signer_email: String,
}

impl FieldFormEntry {
    /// Entry known only by its form id and type, not yet placed on a page
    pub fn unplaced(form_id: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            form_id: form_id.into(),
            native_id: None,
            field_type,
            page_number: 1,
            page_x: 0.0,
            page_y: 0.0,
            page_width: 0.0,
            page_height: 0.0,
            signer_email: String::new(),
        }
    }
}

/// Receives the draft after a successful save
pub type SaveCallback = Box<dyn FnMut(&FieldMeta) + Send>;

/// Leaves the settings view, after a save or on cancel
pub type AdvanceCallback = Box<dyn FnMut() + Send>;

/// Inputs for [`AdvancedSettingsForm`]
pub struct AdvancedSettingsProps {
    pub title: String,
    pub description: String,
    /// The field being edited
    pub field: FieldFormEntry,
    /// Every field on the document, shown read-only for context
    pub fields: Vec<FieldFormEntry>,
    pub is_document_pdf_loaded: bool,
    pub on_save: Option<SaveCallback>,
    pub on_advance: Option<AdvanceCallback>,
}

impl AdvancedSettingsProps {
    pub fn new(title: impl Into<String>, description: impl Into<String>, field: FieldFormEntry) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            field,
            fields: Vec::new(),
            is_document_pdf_loaded: false,
            on_save: None,
            on_advance: None,
        }
    }

    pub fn with_fields(mut self, fields: Vec<FieldFormEntry>) -> Self {
        self.fields = fields;
        self
    }

    pub fn pdf_loaded(mut self, loaded: bool) -> Self {
        self.is_document_pdf_loaded = loaded;
        self
    }

    pub fn on_save(mut self, callback: impl FnMut(&FieldMeta) + Send + 'static) -> Self {
        self.on_save = Some(Box::new(callback));
        self
    }

    pub fn on_advance(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_advance = Some(Box::new(callback));
        self
    }
}

impl std::fmt::Debug for AdvancedSettingsProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvancedSettingsProps")
            .field("title", &self.title)
            .field("field", &self.field)
            .field("fields", &self.fields.len())
            .field("is_document_pdf_loaded", &self.is_document_pdf_loaded)
            .finish_non_exhaustive()
    }
}

/// Free-text settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAttribute {
    Label,
    Placeholder,
    Format,
}

/// On/off settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagAttribute {
    Required,
    ReadOnly,
}

/// Inputs the form shows for the edited field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingControl {
    Label,
    Placeholder,
    Format,
    CharacterLimit,
    Required,
    ReadOnly,
}

/// Result of [`AdvancedSettingsForm::save`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Draft written and callbacks invoked
    Saved,
    /// Draft incomplete; nothing was written
    Invalid,
    /// Draft store rejected the write
    StorageFailed,
}

/// Every attribute must be present before a draft is persisted
#[derive(Debug, Validate)]
struct AdvancedSettingsSchema {
    #[validate(required(message = "Label is required"))]
    label: Option<String>,
    #[validate(required(message = "Placeholder is required"))]
    placeholder: Option<String>,
    #[validate(required(message = "Format is required"))]
    format: Option<String>,
    #[validate(required(message = "Character limit must be a number"))]
    character_limit: Option<u32>,
    #[validate(required(message = "Required flag is missing"))]
    required: Option<bool>,
    #[validate(required(message = "Read-only flag is missing"))]
    read_only: Option<bool>,
}

impl From<&FieldMeta> for AdvancedSettingsSchema {
    fn from(meta: &FieldMeta) -> Self {
        Self {
            label: meta.label.clone(),
            placeholder: meta.placeholder.clone(),
            format: meta.format.clone(),
            character_limit: meta.character_limit,
            required: meta.required,
            read_only: meta.read_only,
        }
    }
}

/// Parse character-limit input: blank means 0, anything but a non-negative
/// integral number clears the limit
///
/// Numeric notations of whole numbers such as `12.0` or `1e3` are accepted.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_character_limit(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    if let Ok(limit) = trimmed.parse::<u32>() {
        return Some(limit);
    }
    let value = trimmed.parse::<f64>().ok()?;
    let integral = value.is_finite() && value.fract() == 0.0;
    (integral && (0.0..=f64::from(u32::MAX)).contains(&value)).then(|| value as u32)
}

/// Advanced settings form
///
/// Owned by a single editing session; every mutation goes through `&mut self`.
pub struct AdvancedSettingsForm {
    props: AdvancedSettingsProps,
    key: String,
    draft: FieldMeta,
    store: Arc<dyn DraftStore>,
    notifier: Arc<dyn Notifier>,
}

impl AdvancedSettingsForm {
    /// Open the form, restoring any stored draft
    ///
    /// A missing, unreadable or malformed draft falls back to the defaults.
    #[instrument(skip_all, fields(form_id = %props.field.form_id, field_type = %props.field.field_type))]
    pub async fn load(
        props: AdvancedSettingsProps,
        store: Arc<dyn DraftStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let key = draft_key(&props.field.form_id, props.field.field_type);
        let draft = Self::restore(store.as_ref(), &key).await;

        Self {
            props,
            key,
            draft,
            store,
            notifier,
        }
    }

    async fn restore(store: &dyn DraftStore, key: &str) -> FieldMeta {
        let raw = match store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return FieldMeta::form_defaults(),
            Err(e) => {
                warn!(key = %key, error = %e, "Could not read settings draft");
                return FieldMeta::form_defaults();
            }
        };

        match serde_json::from_str::<FieldMeta>(&raw) {
            Ok(saved) => saved.merged_over(FieldMeta::form_defaults()),
            Err(e) => {
                warn!(key = %key, error = %e, "Ignoring malformed settings draft");
                FieldMeta::form_defaults()
            }
        }
    }

    pub fn title(&self) -> &str {
        &self.props.title
    }

    pub fn description(&self) -> &str {
        &self.props.description
    }

    /// Draft store key for this field
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current, possibly unsaved, settings
    pub fn draft(&self) -> &FieldMeta {
        &self.draft
    }

    pub fn field(&self) -> &FieldFormEntry {
        &self.props.field
    }

    pub fn set_text(&mut self, attribute: TextAttribute, value: impl Into<String>) {
        let value = Some(value.into());
        match attribute {
            TextAttribute::Label => self.draft.label = value,
            TextAttribute::Placeholder => self.draft.placeholder = value,
            TextAttribute::Format => self.draft.format = value,
        }
    }

    /// Update the character limit from raw input
    ///
    /// Input that is not a non-negative integer leaves the limit unset, which
    /// makes the draft invalid until corrected.
    pub fn set_character_limit(&mut self, input: &str) {
        self.draft.character_limit = parse_character_limit(input);
    }

    pub fn toggle(&mut self, flag: FlagAttribute) {
        let slot = match flag {
            FlagAttribute::Required => &mut self.draft.required,
            FlagAttribute::ReadOnly => &mut self.draft.read_only,
        };
        *slot = Some(!slot.unwrap_or(false));
    }

    /// Choose one of [`NUMBER_FORMATS`]; returns false for anything else
    pub fn select_format(&mut self, format: &str) -> bool {
        if !NUMBER_FORMATS.contains(&format) {
            return false;
        }
        self.draft.format = Some(format.to_string());
        true
    }

    /// Replace the whole draft, e.g. with settings submitted in one request
    pub fn replace_draft(&mut self, meta: FieldMeta) {
        self.draft = meta;
    }

    /// Controls shown for the edited field's type
    pub fn visible_controls(&self) -> Vec<SettingControl> {
        let mut controls = vec![SettingControl::Label, SettingControl::Placeholder];
        if self.props.field.field_type.is_numeric() {
            controls.extend([
                SettingControl::Format,
                SettingControl::CharacterLimit,
                SettingControl::Required,
                SettingControl::ReadOnly,
            ]);
        }
        controls
    }

    /// Other fields of the document, once the PDF has rendered
    pub fn context_fields(&self) -> &[FieldFormEntry] {
        if self.props.is_document_pdf_loaded {
            &self.props.fields
        } else {
            &[]
        }
    }

    /// Validate and persist the draft, then notify the owner
    ///
    /// Callbacks run only after the draft store accepted the write.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn save(&mut self) -> SaveOutcome {
        if let Err(e) = AdvancedSettingsSchema::from(&self.draft).validate() {
            debug!(error = %e, "Settings draft failed validation");
            self.notifier.notify(Toast::error(INVALID_SETTINGS_MESSAGE));
            return SaveOutcome::Invalid;
        }

        let written = match serde_json::to_string(&self.draft) {
            Ok(encoded) => self.store.set(&self.key, &encoded).await,
            Err(e) => Err(DraftStoreError::Operation(e.to_string())),
        };
        if let Err(e) = written {
            error!(error = %e, "Failed to save settings draft");
            self.notifier.notify(Toast::error(STORAGE_FAILURE_MESSAGE));
            return SaveOutcome::StorageFailed;
        }

        if let Some(on_save) = self.props.on_save.as_mut() {
            on_save(&self.draft);
        }
        if let Some(on_advance) = self.props.on_advance.as_mut() {
            on_advance();
        }

        SaveOutcome::Saved
    }

    /// Leave without saving
    pub fn cancel(&mut self) {
        if let Some(on_advance) = self.props.on_advance.as_mut() {
            on_advance();
        }
    }

    /// Drop the stored draft and start over from the defaults
    pub async fn discard(&mut self) -> Result<(), DraftStoreError> {
        self.store.remove(&self.key).await?;
        self.draft = FieldMeta::form_defaults();
        Ok(())
    }
}

impl std::fmt::Debug for AdvancedSettingsForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvancedSettingsForm")
            .field("key", &self.key)
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}
