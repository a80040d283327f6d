//! Editor-side forms driven by the service layer
//!
//! The advanced-settings form keeps an unsaved [`FieldMeta`](sign_core::FieldMeta)
//! draft per field in a [`DraftStore`](sign_core::DraftStore) and reports
//! problems through a [`Notifier`].

mod advanced_settings;
mod notifier;

pub use advanced_settings::{
    AdvanceCallback, AdvancedSettingsForm, AdvancedSettingsProps, FieldFormEntry, FlagAttribute,
    SaveCallback, SaveOutcome, SettingControl, TextAttribute, NUMBER_FORMATS,
};
pub use notifier::{Notifier, Toast, ToastVariant, TracingNotifier};
