//! Service context - dependency container for services
//!
//! Holds all repositories, the draft store, and other dependencies needed by services.

use std::sync::Arc;

use sign_cache::RedisPool;
use sign_common::auth::JwtService;
use sign_core::traits::{
    DocumentAuditLogRepository, DocumentRepository, DraftStore, FieldRepository,
    RecipientRepository, TeamRepository, UserRepository,
};
use sign_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// The pools are only used for readiness probes; data access goes through
/// the repository traits so services can run against in-memory fakes.
#[derive(Clone)]
pub struct ServiceContext {
    // Connection pools
    pool: Option<PgPool>,
    redis_pool: Option<RedisPool>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    team_repo: Arc<dyn TeamRepository>,
    document_repo: Arc<dyn DocumentRepository>,
    recipient_repo: Arc<dyn RecipientRepository>,
    field_repo: Arc<dyn FieldRepository>,
    audit_log_repo: Arc<dyn DocumentAuditLogRepository>,

    // Draft storage
    draft_store: Arc<dyn DraftStore>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    // === Connection Pools ===

    /// Get the PostgreSQL connection pool, if one was configured
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Get the Redis connection pool, if one was configured
    pub fn redis_pool(&self) -> Option<&RedisPool> {
        self.redis_pool.as_ref()
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the team repository
    pub fn team_repo(&self) -> &dyn TeamRepository {
        self.team_repo.as_ref()
    }

    /// Get the document repository
    pub fn document_repo(&self) -> &dyn DocumentRepository {
        self.document_repo.as_ref()
    }

    /// Get the recipient repository
    pub fn recipient_repo(&self) -> &dyn RecipientRepository {
        self.recipient_repo.as_ref()
    }

    /// Get the field repository
    pub fn field_repo(&self) -> &dyn FieldRepository {
        self.field_repo.as_ref()
    }

    /// Get the document audit log repository
    pub fn audit_log_repo(&self) -> &dyn DocumentAuditLogRepository {
        self.audit_log_repo.as_ref()
    }

    // === Draft Storage ===

    /// Shared handle to the draft store
    pub fn draft_store(&self) -> Arc<dyn DraftStore> {
        Arc::clone(&self.draft_store)
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("redis_pool", &self.redis_pool)
            .field("repositories", &"...")
            .field("draft_store", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<RedisPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    team_repo: Option<Arc<dyn TeamRepository>>,
    document_repo: Option<Arc<dyn DocumentRepository>>,
    recipient_repo: Option<Arc<dyn RecipientRepository>>,
    field_repo: Option<Arc<dyn FieldRepository>>,
    audit_log_repo: Option<Arc<dyn DocumentAuditLogRepository>>,
    draft_store: Option<Arc<dyn DraftStore>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            redis_pool: None,
            user_repo: None,
            team_repo: None,
            document_repo: None,
            recipient_repo: None,
            field_repo: None,
            audit_log_repo: None,
            draft_store: None,
            jwt_service: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: RedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn team_repo(mut self, repo: Arc<dyn TeamRepository>) -> Self {
        self.team_repo = Some(repo);
        self
    }

    pub fn document_repo(mut self, repo: Arc<dyn DocumentRepository>) -> Self {
        self.document_repo = Some(repo);
        self
    }

    pub fn recipient_repo(mut self, repo: Arc<dyn RecipientRepository>) -> Self {
        self.recipient_repo = Some(repo);
        self
    }

    pub fn field_repo(mut self, repo: Arc<dyn FieldRepository>) -> Self {
        self.field_repo = Some(repo);
        self
    }

    pub fn audit_log_repo(mut self, repo: Arc<dyn DocumentAuditLogRepository>) -> Self {
        self.audit_log_repo = Some(repo);
        self
    }

    pub fn draft_store(mut self, store: Arc<dyn DraftStore>) -> Self {
        self.draft_store = Some(store);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing.
    /// The pools are optional.
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: self.pool,
            redis_pool: self.redis_pool,
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::internal("user_repo is required"))?,
            team_repo: self
                .team_repo
                .ok_or_else(|| ServiceError::internal("team_repo is required"))?,
            document_repo: self
                .document_repo
                .ok_or_else(|| ServiceError::internal("document_repo is required"))?,
            recipient_repo: self
                .recipient_repo
                .ok_or_else(|| ServiceError::internal("recipient_repo is required"))?,
            field_repo: self
                .field_repo
                .ok_or_else(|| ServiceError::internal("field_repo is required"))?,
            audit_log_repo: self
                .audit_log_repo
                .ok_or_else(|| ServiceError::internal("audit_log_repo is required"))?,
            draft_store: self
                .draft_store
                .ok_or_else(|| ServiceError::internal("draft_store is required"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::internal("jwt_service is required"))?,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
