//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use sign_core::entities::{DocumentAuditLog, FieldWithRecipient, Recipient};
use sign_core::value_objects::{RecipientId, UserId};

use super::responses::{AuditLogResponse, FieldResponse, RecipientSummary};

// ============================================================================
// Field Mappers
// ============================================================================

impl From<&Recipient> for RecipientSummary {
    fn from(recipient: &Recipient) -> Self {
        Self {
            id: recipient.id.into_inner(),
            email: recipient.email.clone(),
            name: recipient.name.clone(),
            role: recipient.role.as_str().to_string(),
            signing_status: recipient.signing_status.as_str().to_string(),
        }
    }
}

impl From<&FieldWithRecipient> for FieldResponse {
    fn from(value: &FieldWithRecipient) -> Self {
        let field = &value.field;
        Self {
            id: field.id.into_inner(),
            secondary_id: field.secondary_id.clone(),
            document_id: field.document_id.into_inner(),
            recipient_id: field.recipient_id.map(RecipientId::into_inner),
            field_type: field.field_type,
            page_number: field.page,
            page_x: field.position_x,
            page_y: field.position_y,
            page_width: field.width,
            page_height: field.height,
            custom_text: field.custom_text.clone(),
            inserted: field.inserted,
            field_meta: field.field_meta.clone(),
            recipient: value.recipient.as_ref().map(RecipientSummary::from),
        }
    }
}

impl From<FieldWithRecipient> for FieldResponse {
    fn from(value: FieldWithRecipient) -> Self {
        Self::from(&value)
    }
}

// ============================================================================
// Audit Log Mappers
// ============================================================================

impl From<&DocumentAuditLog> for AuditLogResponse {
    fn from(log: &DocumentAuditLog) -> Self {
        Self {
            id: log.id,
            document_id: log.document_id.into_inner(),
            log_type: log.log_type.as_str().to_string(),
            data: log.data.clone(),
            user_id: log.user_id.map(UserId::into_inner),
            email: log.email.clone(),
            name: log.name.clone(),
            ip_address: log.ip_address.clone(),
            user_agent: log.user_agent.clone(),
            created_at: log.created_at,
        }
    }
}
