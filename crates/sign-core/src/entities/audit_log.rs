//! Document audit log entity
//!
//! Entries are append-only: once written they are never updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::entities::{Team, User};
use crate::events::{AuditLogType, DocumentAuditEvent};
use crate::value_objects::{DocumentId, UserId};

/// Caller details captured from the originating HTTP request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestMetadata {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Snapshot of who performed an audited action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditActor {
    pub user_id: Option<UserId>,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl AuditActor {
    /// Actor for a user acting on a personal document
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: Some(user.id),
            email: Some(user.email.clone()),
            name: user.name.clone(),
        }
    }

    /// Actor for a user acting on behalf of a team; the team name is recorded as the name
    pub fn for_team(user: &User, team: &Team) -> Self {
        Self {
            user_id: Some(user.id),
            email: Some(user.email.clone()),
            name: Some(team.name.clone()),
        }
    }

    pub fn resolve(user: &User, team: Option<&Team>) -> Self {
        match team {
            Some(team) => Self::for_team(user, team),
            None => Self::for_user(user),
        }
    }
}

/// Audit entry ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewDocumentAuditLog {
    pub id: Uuid,
    pub document_id: DocumentId,
    pub event: DocumentAuditEvent,
    pub actor: AuditActor,
    pub request_metadata: RequestMetadata,
    pub created_at: DateTime<Utc>,
}

impl NewDocumentAuditLog {
    pub fn new(
        document_id: DocumentId,
        event: DocumentAuditEvent,
        actor: AuditActor,
        request_metadata: Option<RequestMetadata>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            document_id,
            event,
            actor,
            request_metadata: request_metadata.unwrap_or_default(),
            created_at: Utc::now(),
        }
    }

    pub fn log_type(&self) -> AuditLogType {
        self.event.log_type()
    }

    /// JSON payload stored in the `data` column
    pub fn data(&self) -> JsonValue {
        self.event.data()
    }
}

/// Persisted audit entry
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentAuditLog {
    pub id: Uuid,
    pub document_id: DocumentId,
    pub log_type: AuditLogType,
    pub data: JsonValue,
    pub user_id: Option<UserId>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<NewDocumentAuditLog> for DocumentAuditLog {
    fn from(entry: NewDocumentAuditLog) -> Self {
        Self {
            id: entry.id,
            document_id: entry.document_id,
            log_type: entry.log_type(),
            data: entry.data(),
            user_id: entry.actor.user_id,
            email: entry.actor.email,
            name: entry.actor.name,
            ip_address: entry.request_metadata.ip_address,
            user_agent: entry.request_metadata.user_agent,
            created_at: entry.created_at,
        }
    }
}
