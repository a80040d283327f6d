//! Recipient database model

use sqlx::FromRow;

/// Database model for the recipients table
#[derive(Debug, Clone, FromRow)]
pub struct RecipientModel {
    pub id: i64,
    pub document_id: i64,
    pub email: String,
    pub name: String,
    pub role: String,
    pub signing_status: String,
}
