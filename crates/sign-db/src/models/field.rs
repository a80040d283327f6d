//! Field database models

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

/// Database model for the fields table
#[derive(Debug, Clone, FromRow)]
pub struct FieldModel {
    pub id: i64,
    pub secondary_id: String,
    pub document_id: i64,
    pub recipient_id: Option<i64>,
    /// Field type, upper snake case ('SIGNATURE', 'NUMBER', ...)
    #[sqlx(rename = "type")]
    pub field_type: String,
    pub page: i32,
    pub position_x: f64,
    pub position_y: f64,
    pub width: f64,
    pub height: f64,
    pub custom_text: String,
    pub inserted: bool,
    pub field_meta: Option<JsonValue>,
}

/// Field row left-joined with its recipient
///
/// Recipient columns are prefixed `recipient_` and all null when unassigned.
#[derive(Debug, Clone, FromRow)]
pub struct FieldWithRecipientModel {
    #[sqlx(flatten)]
    pub field: FieldModel,
    pub recipient_email: Option<String>,
    pub recipient_name: Option<String>,
    pub recipient_role: Option<String>,
    pub recipient_signing_status: Option<String>,
}

/// Field row joined with its owning document
#[derive(Debug, Clone, FromRow)]
pub struct FieldInDocumentModel {
    #[sqlx(flatten)]
    pub field: FieldModel,
    pub document_title: String,
    pub document_status: String,
    pub document_user_id: i64,
    pub document_team_id: Option<i64>,
    pub document_created_at: DateTime<Utc>,
    pub document_updated_at: DateTime<Utc>,
}
