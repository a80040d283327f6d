//! Field handlers
//!
//! Endpoints for reading and updating placed fields.

use axum::{extract::State, Json};
use sign_core::value_objects::{RecipientId, TeamId};
use sign_service::{
    ApiResponse, FieldResponse, FieldService, TeamQuery, UpdateFieldOptions, UpdateFieldRequest,
};

use crate::extractors::{
    ApiPath, AuthUser, ClientMetadata, DocumentPath, FieldPath, ValidatedJson, ValidatedQuery,
};
use crate::response::ApiResult;
use crate::state::AppState;

/// List fields of a document
///
/// GET /documents/{document_id}/fields
pub async fn list_fields(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<DocumentPath>,
    ValidatedQuery(query): ValidatedQuery<TeamQuery>,
) -> ApiResult<Json<ApiResponse<Vec<FieldResponse>>>> {
    let document_id = path.document_id()?;

    let service = FieldService::new(state.service_context());
    let fields = service
        .list_document_fields(document_id, auth.user_id, query.team_id.map(TeamId::new))
        .await?;

    Ok(Json(ApiResponse::new(
        fields.into_iter().map(FieldResponse::from).collect(),
    )))
}

/// Get a field
///
/// GET /documents/{document_id}/fields/{field_id}
pub async fn get_field(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<FieldPath>,
    ValidatedQuery(query): ValidatedQuery<TeamQuery>,
) -> ApiResult<Json<ApiResponse<FieldResponse>>> {
    let document_id = path.document_id()?;
    let field_id = path.field_id()?;

    let service = FieldService::new(state.service_context());
    let field = service
        .get_field(document_id, field_id, auth.user_id, query.team_id.map(TeamId::new))
        .await?;

    Ok(Json(ApiResponse::new(FieldResponse::from(field))))
}

/// Update a field and record a `FIELD_UPDATED` audit entry
///
/// PATCH /documents/{document_id}/fields/{field_id}
pub async fn update_field(
    State(state): State<AppState>,
    auth: AuthUser,
    ClientMetadata(metadata): ClientMetadata,
    ApiPath(path): ApiPath<FieldPath>,
    ValidatedQuery(query): ValidatedQuery<TeamQuery>,
    ValidatedJson(request): ValidatedJson<UpdateFieldRequest>,
) -> ApiResult<Json<ApiResponse<FieldResponse>>> {
    let mut options = UpdateFieldOptions::new(path.field_id()?, path.document_id()?, auth.user_id);
    options.team_id = query.team_id.map(TeamId::new);
    options.recipient_id = request.recipient_id.map(RecipientId::new);
    options.field_type = request.field_type;
    options.page_number = request.page_number;
    options.page_x = request.page_x;
    options.page_y = request.page_y;
    options.page_width = request.page_width;
    options.page_height = request.page_height;
    options.field_meta = request.field_meta;
    options.request_metadata = Some(metadata);

    let service = FieldService::new(state.service_context());
    let field = service.update_field(options).await?;

    Ok(Json(ApiResponse::new(FieldResponse::from(field))))
}
