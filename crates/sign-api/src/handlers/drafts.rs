//! Field settings draft handlers
//!
//! Drafts are scoped to the authenticated user.

use axum::{extract::State, Json};
use sign_service::{ApiResponse, DraftResponse, DraftService, SaveDraftRequest};

use crate::extractors::{ApiPath, AuthUser, DraftPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Load a draft, or the default settings when none is stored
///
/// GET /field-drafts/{form_id}/{field_type}
pub async fn get_draft(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<DraftPath>,
) -> ApiResult<Json<ApiResponse<DraftResponse>>> {
    let form_id = path.form_id()?;
    let field_type = path.field_type()?;

    let draft = DraftService::new(state.service_context())
        .load(auth.user_id, form_id, field_type)
        .await?;

    Ok(Json(ApiResponse::new(DraftResponse {
        form_id: form_id.to_string(),
        field_type,
        draft,
    })))
}

/// Replace a draft
///
/// PUT /field-drafts/{form_id}/{field_type}
pub async fn save_draft(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<DraftPath>,
    ValidatedJson(request): ValidatedJson<SaveDraftRequest>,
) -> ApiResult<Json<ApiResponse<DraftResponse>>> {
    let form_id = path.form_id()?;
    let field_type = path.field_type()?;

    let draft = DraftService::new(state.service_context())
        .save(auth.user_id, form_id, field_type, request.into())
        .await?;

    Ok(Json(ApiResponse::new(DraftResponse {
        form_id: form_id.to_string(),
        field_type,
        draft,
    })))
}

/// Discard a draft
///
/// DELETE /field-drafts/{form_id}/{field_type}
pub async fn delete_draft(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<DraftPath>,
) -> ApiResult<NoContent> {
    DraftService::new(state.service_context())
        .discard(auth.user_id, path.form_id()?, path.field_type()?)
        .await?;

    Ok(NoContent)
}
