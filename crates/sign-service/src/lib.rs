//! # sign-service
//!
//! Application layer: the audited field update, document audit history, and
//! the advanced-settings form with its draft persistence.

pub mod dto;
pub mod forms;
pub mod services;

pub use dto::{
    ApiResponse, AuditLogQuery, AuditLogResponse, DraftResponse, FieldResponse, HealthChecks,
    HealthResponse, ReadinessResponse, RecipientSummary, SaveDraftRequest, TeamQuery,
    UpdateFieldRequest,
};
pub use forms::{
    AdvancedSettingsForm, AdvancedSettingsProps, FieldFormEntry, FlagAttribute, Notifier,
    SaveOutcome, SettingControl, TextAttribute, Toast, ToastVariant, TracingNotifier,
    NUMBER_FORMATS,
};
pub use services::{
    AuditLogService, DraftService, FieldService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, UpdateFieldOptions,
};
