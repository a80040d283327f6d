//! Field model <-> entity mappers

use sign_core::entities::{
    Document, Field, FieldMeta, FieldPatch, FieldWithRecipient, Recipient,
};
use sign_core::error::DomainError;
use sign_core::value_objects::{DocumentId, FieldId, RecipientId, TeamId, UserId};
use serde_json::Value as JsonValue;

use crate::models::{FieldInDocumentModel, FieldModel, FieldWithRecipientModel};

fn parse_field_meta(raw: Option<JsonValue>) -> Result<Option<FieldMeta>, DomainError> {
    match raw {
        None | Some(JsonValue::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| DomainError::InternalError(format!("malformed field_meta: {e}"))),
    }
}

impl TryFrom<FieldModel> for Field {
    type Error = DomainError;

    fn try_from(model: FieldModel) -> Result<Self, Self::Error> {
        Ok(Field {
            id: FieldId::new(model.id),
            secondary_id: model.secondary_id,
            document_id: DocumentId::new(model.document_id),
            recipient_id: model.recipient_id.map(RecipientId::new),
            field_type: model.field_type.parse()?,
            page: model.page,
            position_x: model.position_x,
            position_y: model.position_y,
            width: model.width,
            height: model.height,
            custom_text: model.custom_text,
            inserted: model.inserted,
            field_meta: parse_field_meta(model.field_meta)?,
        })
    }
}

impl TryFrom<FieldWithRecipientModel> for FieldWithRecipient {
    type Error = DomainError;

    fn try_from(model: FieldWithRecipientModel) -> Result<Self, Self::Error> {
        let recipient = match (
            model.field.recipient_id,
            model.recipient_email,
            model.recipient_role,
            model.recipient_signing_status,
        ) {
            (Some(id), Some(email), Some(role), Some(status)) => Some(Recipient {
                id: RecipientId::new(id),
                document_id: DocumentId::new(model.field.document_id),
                email,
                name: model.recipient_name.unwrap_or_default(),
                role: role.parse()?,
                signing_status: status.parse()?,
            }),
            _ => None,
        };

        Ok(FieldWithRecipient {
            field: Field::try_from(model.field)?,
            recipient,
        })
    }
}

impl FieldInDocumentModel {
    /// Split the joined row into the field and its document
    pub fn into_parts(self) -> Result<(Field, Document), DomainError> {
        let document = Document {
            id: DocumentId::new(self.field.document_id),
            title: self.document_title,
            status: self.document_status.parse()?,
            user_id: UserId::new(self.document_user_id),
            team_id: self.document_team_id.map(TeamId::new),
            created_at: self.document_created_at,
            updated_at: self.document_updated_at,
        };
        Ok((Field::try_from(self.field)?, document))
    }
}

/// Bind values for a partial field update; `None` keeps the stored column
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPatchParams {
    pub recipient_id: Option<i64>,
    pub field_type: Option<&'static str>,
    pub page: Option<i32>,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub field_meta: Option<JsonValue>,
}

impl FieldPatchParams {
    pub fn new(patch: &FieldPatch) -> Result<Self, DomainError> {
        let field_meta = patch
            .field_meta
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| DomainError::InternalError(format!("unserializable field_meta: {e}")))?;

        Ok(Self {
            recipient_id: patch.recipient_id.map(RecipientId::into_inner),
            field_type: patch.field_type.map(|t| t.as_str()),
            page: patch.page,
            position_x: patch.position_x,
            position_y: patch.position_y,
            width: patch.width,
            height: patch.height,
            field_meta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sign_core::entities::{DocumentStatus, FieldType, RecipientRole};

    fn field_model() -> FieldModel {
        FieldModel {
            id: 5,
            secondary_id: "a1b2".to_string(),
            document_id: 9,
            recipient_id: Some(3),
            field_type: "NUMBER".to_string(),
            page: 2,
            position_x: 10.0,
            position_y: 20.0,
            width: 30.0,
            height: 4.0,
            custom_text: String::new(),
            inserted: false,
            field_meta: Some(serde_json::json!({"label": "Total", "character_limit": 6})),
        }
    }

    #[test]
    fn test_field_model_to_entity() {
        let field = Field::try_from(field_model()).unwrap();
        assert_eq!(field.field_type, FieldType::Number);
        assert_eq!(field.recipient_id, Some(RecipientId::new(3)));
        let meta = field.field_meta.unwrap();
        assert_eq!(meta.label.as_deref(), Some("Total"));
        assert_eq!(meta.character_limit, Some(6));
    }

    #[test]
    fn test_unknown_field_type_is_an_error() {
        let mut model = field_model();
        model.field_type = "STAMP".to_string();
        assert!(Field::try_from(model).is_err());
    }

    #[test]
    fn test_null_meta_is_none() {
        let mut model = field_model();
        model.field_meta = Some(JsonValue::Null);
        assert!(Field::try_from(model).unwrap().field_meta.is_none());
    }

    #[test]
    fn test_joined_recipient() {
        let model = FieldWithRecipientModel {
            field: field_model(),
            recipient_email: Some("bo@example.com".to_string()),
            recipient_name: Some("Bo".to_string()),
            recipient_role: Some("SIGNER".to_string()),
            recipient_signing_status: Some("NOT_SIGNED".to_string()),
        };
        let with = FieldWithRecipient::try_from(model).unwrap();
        let recipient = with.recipient.unwrap();
        assert_eq!(recipient.id, RecipientId::new(3));
        assert_eq!(recipient.role, RecipientRole::Signer);
        assert_eq!(recipient.document_id, DocumentId::new(9));
    }

    #[test]
    fn test_unassigned_field_has_no_recipient() {
        let mut field = field_model();
        field.recipient_id = None;
        let model = FieldWithRecipientModel {
            field,
            recipient_email: None,
            recipient_name: None,
            recipient_role: None,
            recipient_signing_status: None,
        };
        let with = FieldWithRecipient::try_from(model).unwrap();
        assert!(with.recipient.is_none());
        assert_eq!(with.recipient_email(), "");
    }

    #[test]
    fn test_field_in_document_parts() {
        let now = Utc::now();
        let model = FieldInDocumentModel {
            field: field_model(),
            document_title: "Lease".to_string(),
            document_status: "PENDING".to_string(),
            document_user_id: 1,
            document_team_id: None,
            document_created_at: now,
            document_updated_at: now,
        };
        let (field, document) = model.into_parts().unwrap();
        assert_eq!(field.document_id, document.id);
        assert_eq!(document.status, DocumentStatus::Pending);
    }

    #[test]
    fn test_patch_params() {
        let patch = FieldPatch {
            field_type: Some(FieldType::FreeSignature),
            width: Some(12.0),
            ..Default::default()
        };
        let params = FieldPatchParams::new(&patch).unwrap();
        assert_eq!(params.field_type, Some("FREE_SIGNATURE"));
        assert_eq!(params.width, Some(12.0));
        assert_eq!(params.recipient_id, None);
        assert_eq!(params.field_meta, None);
    }
}
