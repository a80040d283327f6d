//! In-memory repositories and stores for service tests

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use sign_cache::MemoryDraftStore;
use sign_common::JwtService;
use sign_core::entities::{
    Document, DocumentAuditLog, DocumentStatus, Field, FieldPatch, FieldType, FieldWithRecipient,
    Recipient, RecipientRole, SigningStatus, Team, User,
};
use sign_core::error::DomainError;
use sign_core::traits::{
    AuditEntryBuilder, DocumentAuditLogRepository, DocumentRepository, DraftStore,
    DraftStoreError, FieldRepository, FieldScope, RecipientRepository, RepoResult,
    TeamRepository, UserRepository,
};
use sign_core::value_objects::{DocumentId, FieldId, RecipientId, TeamId, UserId};

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct FakeState {
    users: HashMap<UserId, User>,
    teams: HashMap<TeamId, Team>,
    members: HashSet<(TeamId, UserId)>,
    documents: HashMap<DocumentId, Document>,
    recipients: HashMap<RecipientId, Recipient>,
    fields: BTreeMap<FieldId, Field>,
    audit_logs: Vec<DocumentAuditLog>,
}

/// Every repository port over one shared in-memory state
#[derive(Clone, Default)]
pub(crate) struct FakeStore {
    state: Arc<Mutex<FakeState>>,
    fail_audit_insert: Arc<AtomicBool>,
    user_lookups: Arc<AtomicUsize>,
    field_lookups: Arc<AtomicUsize>,
}

impl FakeStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn context(&self) -> ServiceContext {
        self.context_with_drafts(Arc::new(MemoryDraftStore::new()))
    }

    pub(crate) fn context_with_drafts(&self, drafts: Arc<dyn DraftStore>) -> ServiceContext {
        ServiceContextBuilder::new()
            .user_repo(Arc::new(self.clone()))
            .team_repo(Arc::new(self.clone()))
            .document_repo(Arc::new(self.clone()))
            .recipient_repo(Arc::new(self.clone()))
            .field_repo(Arc::new(self.clone()))
            .audit_log_repo(Arc::new(self.clone()))
            .draft_store(drafts)
            .jwt_service(Arc::new(JwtService::new("test-secret", 900)))
            .build()
            .unwrap()
    }

    /// Make the next audit insert fail inside the unit of work
    pub(crate) fn fail_audit_inserts(&self) {
        self.fail_audit_insert.store(true, Ordering::SeqCst);
    }

    pub(crate) fn user_lookups(&self) -> usize {
        self.user_lookups.load(Ordering::SeqCst)
    }

    pub(crate) fn field_lookups(&self) -> usize {
        self.field_lookups.load(Ordering::SeqCst)
    }

    pub(crate) fn add_user(&self, id: i64, name: &str, email: &str) -> User {
        let user = User {
            id: UserId::new(id),
            name: Some(name.to_string()),
            email: email.to_string(),
        };
        self.state.lock().unwrap().users.insert(user.id, user.clone());
        user
    }

    pub(crate) fn add_team(&self, id: i64, name: &str, members: &[UserId]) -> Team {
        let team = Team {
            id: TeamId::new(id),
            name: name.to_string(),
            url: name.to_lowercase(),
        };
        let mut state = self.state.lock().unwrap();
        state.teams.insert(team.id, team.clone());
        for user_id in members {
            state.members.insert((team.id, *user_id));
        }
        team
    }

    pub(crate) fn add_document(
        &self,
        id: i64,
        owner: UserId,
        team_id: Option<TeamId>,
        status: DocumentStatus,
    ) -> Document {
        let document = Document {
            id: DocumentId::new(id),
            title: format!("Document {id}"),
            status,
            user_id: owner,
            team_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.state
            .lock()
            .unwrap()
            .documents
            .insert(document.id, document.clone());
        document
    }

    pub(crate) fn add_recipient(&self, id: i64, document_id: DocumentId, email: &str) -> Recipient {
        let recipient = Recipient {
            id: RecipientId::new(id),
            document_id,
            email: email.to_string(),
            name: String::new(),
            role: RecipientRole::Signer,
            signing_status: SigningStatus::NotSigned,
        };
        self.state
            .lock()
            .unwrap()
            .recipients
            .insert(recipient.id, recipient.clone());
        recipient
    }

    pub(crate) fn add_field(&self, id: i64, document_id: DocumentId) -> Field {
        let field = Field {
            id: FieldId::new(id),
            secondary_id: format!("fld_{id}"),
            document_id,
            recipient_id: None,
            field_type: FieldType::Text,
            page: 1,
            position_x: 10.0,
            position_y: 20.0,
            width: 15.0,
            height: 5.0,
            custom_text: String::new(),
            inserted: false,
            field_meta: None,
        };
        self.state.lock().unwrap().fields.insert(field.id, field.clone());
        field
    }

    pub(crate) fn mark_inserted(&self, field_id: FieldId) {
        if let Some(field) = self.state.lock().unwrap().fields.get_mut(&field_id) {
            field.inserted = true;
        }
    }

    pub(crate) fn mark_signed(&self, recipient_id: RecipientId) {
        if let Some(recipient) = self.state.lock().unwrap().recipients.get_mut(&recipient_id) {
            recipient.signing_status = SigningStatus::Signed;
        }
    }

    pub(crate) fn field(&self, field_id: FieldId) -> Field {
        self.state.lock().unwrap().fields[&field_id].clone()
    }

    pub(crate) fn audit_logs(&self) -> Vec<DocumentAuditLog> {
        self.state.lock().unwrap().audit_logs.clone()
    }

    fn may_access(state: &FakeState, document: &Document, user_id: UserId, team_id: Option<TeamId>) -> bool {
        match team_id {
            None => document.team_id.is_none() && document.user_id == user_id,
            Some(team_id) => {
                document.team_id == Some(team_id) && state.members.contains(&(team_id, user_id))
            }
        }
    }

    fn with_recipient(state: &FakeState, field: Field) -> FieldWithRecipient {
        let recipient = field
            .recipient_id
            .and_then(|id| state.recipients.get(&id).cloned());
        FieldWithRecipient { field, recipient }
    }
}

#[async_trait]
impl UserRepository for FakeStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        self.user_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.state.lock().unwrap().users.get(&id).cloned())
    }
}

#[async_trait]
impl TeamRepository for FakeStore {
    async fn find_for_member(&self, team_id: TeamId, user_id: UserId) -> RepoResult<Option<Team>> {
        let state = self.state.lock().unwrap();
        if !state.members.contains(&(team_id, user_id)) {
            return Ok(None);
        }
        Ok(state.teams.get(&team_id).cloned())
    }
}

#[async_trait]
impl DocumentRepository for FakeStore {
    async fn find_authorized(
        &self,
        document_id: DocumentId,
        user_id: UserId,
        team_id: Option<TeamId>,
    ) -> RepoResult<Option<Document>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .documents
            .get(&document_id)
            .filter(|document| Self::may_access(&state, document, user_id, team_id))
            .cloned())
    }
}

#[async_trait]
impl RecipientRepository for FakeStore {
    async fn find_in_document(
        &self,
        recipient_id: RecipientId,
        document_id: DocumentId,
    ) -> RepoResult<Option<Recipient>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .recipients
            .get(&recipient_id)
            .filter(|r| r.document_id == document_id)
            .cloned())
    }
}

#[async_trait]
impl FieldRepository for FakeStore {
    async fn find_authorized(&self, scope: &FieldScope) -> RepoResult<Option<(Field, Document)>> {
        self.field_lookups.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        let Some(field) = state.fields.get(&scope.field_id) else {
            return Ok(None);
        };
        if field.document_id != scope.document_id {
            return Ok(None);
        }
        let Some(document) = state.documents.get(&field.document_id) else {
            return Ok(None);
        };
        if !Self::may_access(&state, document, scope.user_id, scope.team_id) {
            return Ok(None);
        }
        Ok(Some((field.clone(), document.clone())))
    }

    async fn list_by_document(
        &self,
        document_id: DocumentId,
    ) -> RepoResult<Vec<FieldWithRecipient>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .fields
            .values()
            .filter(|f| f.document_id == document_id)
            .cloned()
            .map(|f| Self::with_recipient(&state, f))
            .collect())
    }

    async fn update_with_audit(
        &self,
        before: &Field,
        patch: &FieldPatch,
        audit: &dyn AuditEntryBuilder,
    ) -> RepoResult<FieldWithRecipient> {
        let mut state = self.state.lock().unwrap();
        let snapshot = state
            .fields
            .get(&before.id)
            .cloned()
            .ok_or(DomainError::FieldNotFound(before.id))?;
        if snapshot.is_signed() {
            return Err(DomainError::FieldAlreadySigned);
        }
        for recipient_id in [snapshot.recipient_id, patch.recipient_id].into_iter().flatten() {
            if state.recipients.get(&recipient_id).is_some_and(Recipient::has_signed) {
                return Err(DomainError::RecipientAlreadySigned(recipient_id));
            }
        }

        // Staged like a transaction: nothing is written until both steps succeed
        let updated = patch.apply_to(&snapshot);
        let after = Self::with_recipient(&state, updated.clone());
        let entry = audit.build(&snapshot, &after);

        if self.fail_audit_insert.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError(
                "insert into document_audit_logs violates foreign key".to_string(),
            ));
        }

        state.fields.insert(updated.id, updated);
        state.audit_logs.push(DocumentAuditLog::from(entry));
        Ok(after)
    }
}

#[async_trait]
impl DocumentAuditLogRepository for FakeStore {
    async fn list_by_document(
        &self,
        document_id: DocumentId,
        limit: i64,
    ) -> RepoResult<Vec<DocumentAuditLog>> {
        let take = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .state
            .lock()
            .unwrap()
            .audit_logs
            .iter()
            .filter(|log| log.document_id == document_id)
            .take(take)
            .cloned()
            .collect())
    }
}

/// Draft store whose backend is always down
#[derive(Debug, Default)]
pub(crate) struct UnavailableDraftStore {
    pub(crate) writes: AtomicUsize,
}

#[async_trait]
impl DraftStore for UnavailableDraftStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, DraftStoreError> {
        Err(DraftStoreError::Unavailable("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), DraftStoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(DraftStoreError::Unavailable("connection refused".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), DraftStoreError> {
        Err(DraftStoreError::Unavailable("connection refused".to_string()))
    }
}
