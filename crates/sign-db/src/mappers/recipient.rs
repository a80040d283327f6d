//! Recipient model -> entity mapper

use sign_core::entities::Recipient;
use sign_core::error::DomainError;
use sign_core::value_objects::{DocumentId, RecipientId};

use crate::models::RecipientModel;

impl TryFrom<RecipientModel> for Recipient {
    type Error = DomainError;

    fn try_from(model: RecipientModel) -> Result<Self, Self::Error> {
        Ok(Recipient {
            id: RecipientId::new(model.id),
            document_id: DocumentId::new(model.document_id),
            email: model.email,
            name: model.name,
            role: model.role.parse()?,
            signing_status: model.signing_status.parse()?,
        })
    }
}
