//! Document model -> entity mapper

use sign_core::entities::Document;
use sign_core::error::DomainError;
use sign_core::value_objects::{DocumentId, TeamId, UserId};

use crate::models::DocumentModel;

impl TryFrom<DocumentModel> for Document {
    type Error = DomainError;

    fn try_from(model: DocumentModel) -> Result<Self, Self::Error> {
        Ok(Document {
            id: DocumentId::new(model.id),
            title: model.title,
            status: model.status.parse()?,
            user_id: UserId::new(model.user_id),
            team_id: model.team_id.map(TeamId::new),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
