//! # sign-db
//!
//! Database layer implementing the `sign-core` repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations, including the field update unit of work
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sign_db::{create_pool, run_migrations, PgFieldRepository, PoolConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     let fields = PgFieldRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{
    PgDocumentAuditLogRepository, PgDocumentRepository, PgFieldRepository,
    PgRecipientRepository, PgTeamRepository, PgUserRepository,
};
