use sqlx::PgPool;
use uuid::Uuid;

use crate::models::club::Team;

#[derive(Debug, Clone)]
pub struct ClubQueries {
    pool: PgPool,
}

impl ClubQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_team(&self, team_id: Uuid) -> Result<Option<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>("SELECT id, club_id, name, created_at FROM teams WHERE id = $1")
            .bind(team_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Of `player_ids`, the ones that are not registered with `club_id`.
    pub async fn players_outside_club(
        &self,
        club_id: Uuid,
        player_ids: &[Uuid],
    ) -> Result<Vec<Uuid>, sqlx::Error> {
        let registered: Vec<Uuid> = sqlx::query_scalar(
            "SELECT id FROM players WHERE club_id = $1 AND id = ANY($2)",
        )
        .bind(club_id)
        .bind(player_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(player_ids
            .iter()
            .copied()
            .filter(|id| !registered.contains(id))
            .collect())
    }
}
