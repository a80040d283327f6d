//! Document audit log database model

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the document_audit_logs table
#[derive(Debug, Clone, FromRow)]
pub struct DocumentAuditLogModel {
    pub id: Uuid,
    pub document_id: i64,
    pub created_at: DateTime<Utc>,
    /// Audit log type, e.g. 'FIELD_UPDATED'
    #[sqlx(rename = "type")]
    pub log_type: String,
    pub data: JsonValue,
    pub name: Option<String>,
    pub email: Option<String>,
    pub user_id: Option<i64>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}
