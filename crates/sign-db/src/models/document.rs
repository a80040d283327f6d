//! Document database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the documents table
#[derive(Debug, Clone, FromRow)]
pub struct DocumentModel {
    pub id: i64,
    pub title: String,
    /// 'DRAFT', 'PENDING' or 'COMPLETED'
    pub status: String,
    pub user_id: i64,
    pub team_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
