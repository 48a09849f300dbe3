use sqlx::PgPool;
use uuid::Uuid;

use crate::models::election::{Election, ElectionKind};

const ELECTION_COLUMNS: &str = "id, match_id, team_id, player_id, kind, elected_by, created_at";

#[derive(Debug, Clone)]
pub struct ElectionQueries {
    pool: PgPool,
}

impl ElectionQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_match(&self, match_id: Uuid) -> Result<Vec<Election>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM match_elections WHERE match_id = $1 ORDER BY team_id, kind",
            ELECTION_COLUMNS
        );
        sqlx::query_as::<_, Election>(&sql)
            .bind(match_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn exists_for_team(&self, match_id: Uuid, team_id: Uuid) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM match_elections WHERE match_id = $1 AND team_id = $2)",
        )
        .bind(match_id)
        .bind(team_id)
        .fetch_one(&self.pool)
        .await
    }

    /// Insert the best and worst player together; either both rows land or neither does.
    pub async fn create_pair(
        &self,
        match_id: Uuid,
        team_id: Uuid,
        best_player_id: Uuid,
        worst_player_id: Uuid,
        elected_by: Uuid,
    ) -> Result<Vec<Election>, sqlx::Error> {
        let sql = format!(
            "INSERT INTO match_elections (id, match_id, team_id, player_id, kind, elected_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            ELECTION_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(2);
        for (player_id, kind) in [(best_player_id, ElectionKind::Best), (worst_player_id, ElectionKind::Worst)] {
            let election = sqlx::query_as::<_, Election>(&sql)
                .bind(Uuid::new_v4())
                .bind(match_id)
                .bind(team_id)
                .bind(player_id)
                .bind(kind)
                .bind(elected_by)
                .fetch_one(&mut *tx)
                .await?;
            created.push(election);
        }
        tx.commit().await?;

        Ok(created)
    }
}
