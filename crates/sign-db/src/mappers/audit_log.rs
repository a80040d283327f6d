//! Document audit log model <-> entity mappers

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sign_core::entities::{DocumentAuditLog, NewDocumentAuditLog};
use sign_core::error::DomainError;
use sign_core::value_objects::{DocumentId, UserId};
use uuid::Uuid;

use crate::models::DocumentAuditLogModel;

impl TryFrom<DocumentAuditLogModel> for DocumentAuditLog {
    type Error = DomainError;

    fn try_from(model: DocumentAuditLogModel) -> Result<Self, Self::Error> {
        Ok(DocumentAuditLog {
            id: model.id,
            document_id: DocumentId::new(model.document_id),
            log_type: model.log_type.parse()?,
            data: model.data,
            user_id: model.user_id.map(UserId::new),
            email: model.email,
            name: model.name,
            ip_address: model.ip_address,
            user_agent: model.user_agent,
            created_at: model.created_at,
        })
    }
}

/// Values for inserting a new audit entry
pub struct AuditLogInsert<'a> {
    pub id: Uuid,
    pub document_id: i64,
    pub created_at: DateTime<Utc>,
    pub log_type: &'static str,
    pub data: JsonValue,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub user_id: Option<i64>,
    pub user_agent: Option<&'a str>,
    pub ip_address: Option<&'a str>,
}

impl<'a> AuditLogInsert<'a> {
    pub fn new(entry: &'a NewDocumentAuditLog) -> Self {
        Self {
            id: entry.id,
            document_id: entry.document_id.into_inner(),
            created_at: entry.created_at,
            log_type: entry.log_type().as_str(),
            data: entry.data(),
            name: entry.actor.name.as_deref(),
            email: entry.actor.email.as_deref(),
            user_id: entry.actor.user_id.map(UserId::into_inner),
            user_agent: entry.request_metadata.user_agent.as_deref(),
            ip_address: entry.request_metadata.ip_address.as_deref(),
        }
    }
}
