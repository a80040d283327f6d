//! Document entity - an uploaded file that owns placed fields

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::{DocumentId, TeamId, UserId};

/// Document lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    Draft,
    Pending,
    Completed,
}

impl DocumentStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
        }
    }
}

impl FromStr for DocumentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "PENDING" => Ok(Self::Pending),
            "COMPLETED" => Ok(Self::Completed),
            other => Err(DomainError::InternalError(format!(
                "unknown document status: {other}"
            ))),
        }
    }
}

/// Document entity
///
/// Owned either personally (`team_id` is `None`) or by a team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub status: DocumentStatus,
    pub user_id: UserId,
    pub team_id: Option<TeamId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Check if the document is owned by a team rather than a single user
    #[inline]
    pub fn is_team_document(&self) -> bool {
        self.team_id.is_some()
    }

    /// Check if every recipient has finished signing
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status == DocumentStatus::Completed
    }
}
