//! PostgreSQL implementation of TeamRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use sign_core::entities::Team;
use sign_core::traits::{RepoResult, TeamRepository};
use sign_core::value_objects::{TeamId, UserId};

use crate::models::TeamModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TeamRepository
#[derive(Clone)]
pub struct PgTeamRepository {
    pool: PgPool,
}

impl PgTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PgTeamRepository {
    #[instrument(skip(self))]
    async fn find_for_member(&self, team_id: TeamId, user_id: UserId) -> RepoResult<Option<Team>> {
        let result = sqlx::query_as::<_, TeamModel>(
            r"
            SELECT t.id, t.name, t.url
            FROM teams t
            INNER JOIN team_members tm ON tm.team_id = t.id
            WHERE t.id = $1 AND tm.user_id = $2
            ",
        )
        .bind(team_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Team::from))
    }
}
