//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use sign_core::entities::{FieldMeta, FieldType};
use validator::Validate;

// ============================================================================
// Field Requests
// ============================================================================

/// Partial field update; omitted attributes keep their stored values
///
/// Positions and sizes are percentages of the page.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFieldRequest {
    pub recipient_id: Option<i64>,

    pub field_type: Option<FieldType>,

    #[validate(range(min = 1, message = "Page number must be at least 1"))]
    pub page_number: Option<i32>,

    #[validate(range(min = 0.0, max = 100.0, message = "page_x must be between 0 and 100"))]
    pub page_x: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0, message = "page_y must be between 0 and 100"))]
    pub page_y: Option<f64>,

    #[validate(range(exclusive_min = 0.0, max = 100.0, message = "page_width must be between 0 and 100"))]
    pub page_width: Option<f64>,

    #[validate(range(exclusive_min = 0.0, max = 100.0, message = "page_height must be between 0 and 100"))]
    pub page_height: Option<f64>,

    pub field_meta: Option<FieldMeta>,
}

/// Optional team context for document-scoped routes
#[derive(Debug, Clone, Copy, Default, Deserialize, Validate)]
pub struct TeamQuery {
    #[validate(range(min = 1, message = "team_id must be positive"))]
    pub team_id: Option<i64>,
}

/// Query for the audit history route
#[derive(Debug, Clone, Copy, Default, Deserialize, Validate)]
pub struct AuditLogQuery {
    #[validate(range(min = 1, message = "team_id must be positive"))]
    pub team_id: Option<i64>,

    #[validate(range(min = 1, max = 500, message = "Limit must be 1-500"))]
    pub limit: Option<i64>,
}

// ============================================================================
// Draft Requests
// ============================================================================

/// Full replacement of a field settings draft
///
/// Every attribute must be supplied for the draft to be saved.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SaveDraftRequest {
    #[validate(length(max = 255, message = "Label must be at most 255 characters"))]
    pub label: Option<String>,

    #[validate(length(max = 255, message = "Placeholder must be at most 255 characters"))]
    pub placeholder: Option<String>,

    #[validate(length(max = 32, message = "Format must be at most 32 characters"))]
    pub format: Option<String>,

    pub character_limit: Option<u32>,

    pub required: Option<bool>,

    pub read_only: Option<bool>,
}

impl From<SaveDraftRequest> for FieldMeta {
    fn from(request: SaveDraftRequest) -> Self {
        Self {
            label: request.label,
            placeholder: request.placeholder,
            format: request.format,
            character_limit: request.character_limit,
            required: request.required,
            read_only: request.read_only,
        }
    }
}
