//! Audit log handlers

use axum::{extract::State, Json};
use sign_core::value_objects::TeamId;
use sign_service::{ApiResponse, AuditLogQuery, AuditLogResponse, AuditLogService};

use crate::extractors::{ApiPath, AuthUser, DocumentPath, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// List a document's audit history, oldest first
///
/// GET /documents/{document_id}/audit-logs
pub async fn list_audit_logs(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<DocumentPath>,
    ValidatedQuery(query): ValidatedQuery<AuditLogQuery>,
) -> ApiResult<Json<ApiResponse<Vec<AuditLogResponse>>>> {
    let document_id = path.document_id()?;

    let service = AuditLogService::new(state.service_context());
    let logs = service
        .list(
            document_id,
            auth.user_id,
            query.team_id.map(TeamId::new),
            query.limit,
        )
        .await?;

    Ok(Json(ApiResponse::new(
        logs.iter().map(AuditLogResponse::from).collect(),
    )))
}
