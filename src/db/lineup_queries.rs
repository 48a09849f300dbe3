use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::lineup::{LineupEntry, LineupPlayer, LineupSlot};

#[derive(Debug, Clone)]
pub struct LineupQueries {
    pool: PgPool,
}

impl LineupQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_match(&self, match_id: Uuid) -> Result<Vec<LineupPlayer>, sqlx::Error> {
        sqlx::query_as::<_, LineupPlayer>(
            r#"
            SELECT l.team_id, l.player_id, l.number, p.first_name, p.last_name
            FROM match_lineups l
            JOIN players p ON p.id = l.player_id
            WHERE l.match_id = $1
            ORDER BY l.team_id, l.number
            "#,
        )
        .bind(match_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Of `player_ids`, the ones missing from the team's lineup for this match.
    pub async fn missing_from_lineup(
        &self,
        match_id: Uuid,
        team_id: Uuid,
        player_ids: &[Uuid],
    ) -> Result<Vec<Uuid>, sqlx::Error> {
        let present: Vec<Uuid> = sqlx::query_scalar(
            "SELECT player_id FROM match_lineups WHERE match_id = $1 AND team_id = $2 AND player_id = ANY($3)",
        )
        .bind(match_id)
        .bind(team_id)
        .bind(player_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(player_ids
            .iter()
            .copied()
            .filter(|id| !present.contains(id))
            .collect())
    }

    /// Replace the team's lineup for a match in one transaction.
    pub async fn replace_lineup(
        &self,
        match_id: Uuid,
        team_id: Uuid,
        slots: &[LineupSlot],
    ) -> Result<Vec<LineupEntry>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM match_lineups WHERE match_id = $1 AND team_id = $2")
            .bind(match_id)
            .bind(team_id)
            .execute(&mut *tx)
            .await?;

        let mut entries = Vec::with_capacity(slots.len());
        for slot in slots {
            let entry = sqlx::query_as::<_, LineupEntry>(
                r#"
                INSERT INTO match_lineups (id, match_id, team_id, player_id, number)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, match_id, team_id, player_id, number
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(match_id)
            .bind(team_id)
            .bind(slot.player_id)
            .bind(slot.number)
            .fetch_one(&mut *tx)
            .await?;
            entries.push(entry);
        }

        tx.commit().await?;
        info!("Lineup of team {} for match {} set to {} players", team_id, match_id, entries.len());
        Ok(entries)
    }
}
