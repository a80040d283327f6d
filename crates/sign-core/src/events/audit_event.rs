//! Audit events - typed payloads written to `document_audit_logs`
//!
//! The `type` column holds [`AuditLogType`]; the `data` column holds the
//! serialized payload of the matching [`DocumentAuditEvent`] variant.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;

use crate::audit::FieldChange;
use crate::entities::FieldType;
use crate::error::DomainError;

/// Audit log type stored in the `type` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditLogType {
    FieldCreated,
    FieldUpdated,
    FieldDeleted,
}

impl AuditLogType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FieldCreated => "FIELD_CREATED",
            Self::FieldUpdated => "FIELD_UPDATED",
            Self::FieldDeleted => "FIELD_DELETED",
        }
    }
}

impl fmt::Display for AuditLogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditLogType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIELD_CREATED" => Ok(Self::FieldCreated),
            "FIELD_UPDATED" => Ok(Self::FieldUpdated),
            "FIELD_DELETED" => Ok(Self::FieldDeleted),
            other => Err(DomainError::InternalError(format!(
                "unknown audit log type: {other}"
            ))),
        }
    }
}

/// Payload of a `FIELD_UPDATED` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldUpdatedAuditData {
    /// Secondary (public) id of the field
    pub field_id: String,
    /// Empty when the field has no recipient
    pub field_recipient_email: String,
    /// `-1` when the field has no recipient
    pub field_recipient_id: i64,
    pub field_type: FieldType,
    pub changes: Vec<FieldChange>,
}

/// Events that produce a document audit entry
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentAuditEvent {
    FieldUpdated(FieldUpdatedAuditData),
}

impl DocumentAuditEvent {
    pub fn log_type(&self) -> AuditLogType {
        match self {
            Self::FieldUpdated(_) => AuditLogType::FieldUpdated,
        }
    }

    pub fn data(&self) -> JsonValue {
        let data = match self {
            Self::FieldUpdated(data) => serde_json::to_value(data),
        };
        // Payloads are plain structs of strings, numbers and JSON values
        data.unwrap_or(JsonValue::Null)
    }
}
