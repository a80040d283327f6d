//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Ids are plain integers; audit entry ids are UUIDs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;
use sign_core::entities::{FieldMeta, FieldType};
use uuid::Uuid;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Field Responses
// ============================================================================

/// Recipient summary embedded in a field
#[derive(Debug, Clone, Serialize)]
pub struct RecipientSummary {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: String,
    pub signing_status: String,
}

/// Field response
#[derive(Debug, Clone, Serialize)]
pub struct FieldResponse {
    pub id: i64,
    pub secondary_id: String,
    pub document_id: i64,
    pub recipient_id: Option<i64>,
    pub field_type: FieldType,
    pub page_number: i32,
    pub page_x: f64,
    pub page_y: f64,
    pub page_width: f64,
    pub page_height: f64,
    pub custom_text: String,
    pub inserted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_meta: Option<FieldMeta>,
    pub recipient: Option<RecipientSummary>,
}

// ============================================================================
// Audit Log Responses
// ============================================================================

/// Document audit log entry
#[derive(Debug, Clone, Serialize)]
pub struct AuditLogResponse {
    pub id: Uuid,
    pub document_id: i64,
    #[serde(rename = "type")]
    pub log_type: String,
    pub data: JsonValue,
    pub user_id: Option<i64>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Draft Responses
// ============================================================================

/// Stored or default settings draft for one field
#[derive(Debug, Clone, Serialize)]
pub struct DraftResponse {
    pub form_id: String,
    pub field_type: FieldType,
    pub draft: FieldMeta,
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
