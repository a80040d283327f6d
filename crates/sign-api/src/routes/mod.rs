//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{routing::get, Router};

use crate::handlers::{audit_logs, drafts, fields, health};
use crate::state::AppState;

/// Create the main API router (health routes are separate so they skip rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(document_routes())
        .merge(draft_routes())
}

/// Document fields and audit history
fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/documents/:document_id/fields", get(fields::list_fields))
        .route(
            "/documents/:document_id/fields/:field_id",
            get(fields::get_field).patch(fields::update_field),
        )
        .route(
            "/documents/:document_id/audit-logs",
            get(audit_logs::list_audit_logs),
        )
}

/// Field settings drafts
fn draft_routes() -> Router<AppState> {
    Router::new().route(
        "/field-drafts/:form_id/:field_type",
        get(drafts::get_draft)
            .put(drafts::save_draft)
            .delete(drafts::delete_draft),
    )
}

