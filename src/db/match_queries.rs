use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::common::TeamSide;
use crate::models::rugby_match::{
    CreateMatchRequest, EndingStatus, HalfTime, Match, MatchResult, MatchStatus, MatchWithClubs,
};

const MATCH_COLUMNS: &str = "
    id, scheduled_at, status, ending_status, home_team_id, away_team_id,
    home_score, away_score, result, created_at, updated_at
";

#[derive(Debug, Clone)]
pub struct MatchQueries {
    pool: PgPool,
}

impl MatchQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_match(&self, request: &CreateMatchRequest) -> Result<Match, sqlx::Error> {
        let sql = format!(
            "INSERT INTO matches (id, scheduled_at, home_team_id, away_team_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            MATCH_COLUMNS
        );
        let created = sqlx::query_as::<_, Match>(&sql)
            .bind(Uuid::new_v4())
            .bind(request.scheduled_at)
            .bind(request.home_team_id)
            .bind(request.away_team_id)
            .fetch_one(&self.pool)
            .await?;

        info!("Created match {} ({} vs {})", created.id, created.home_team_id, created.away_team_id);
        Ok(created)
    }

    pub async fn get_match(&self, match_id: Uuid) -> Result<Option<Match>, sqlx::Error> {
        let sql = format!("SELECT {} FROM matches WHERE id = $1", MATCH_COLUMNS);
        sqlx::query_as::<_, Match>(&sql)
            .bind(match_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Match plus team names and owning clubs.
    pub async fn get_match_with_clubs(&self, match_id: Uuid) -> Result<Option<MatchWithClubs>, sqlx::Error> {
        sqlx::query_as::<_, MatchWithClubs>(
            r#"
            SELECT
                m.id, m.scheduled_at, m.status, m.ending_status,
                m.home_team_id, m.away_team_id, m.home_score, m.away_score,
                m.result, m.created_at, m.updated_at,
                ht.name AS home_team_name,
                awt.name AS away_team_name,
                ht.club_id AS home_club_id,
                awt.club_id AS away_club_id
            FROM matches m
            JOIN teams ht ON ht.id = m.home_team_id
            JOIN teams awt ON awt.id = m.away_team_id
            WHERE m.id = $1
            "#,
        )
        .bind(match_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Move the status forward only if it still is `from`. `None` means
    /// another request changed it first.
    pub async fn transition_status(
        &self,
        match_id: Uuid,
        from: MatchStatus,
        to: MatchStatus,
    ) -> Result<Option<Match>, sqlx::Error> {
        let sql = format!(
            "UPDATE matches SET status = $3, updated_at = NOW()
             WHERE id = $1 AND status = $2
             RETURNING {}",
            MATCH_COLUMNS
        );
        sqlx::query_as::<_, Match>(&sql)
            .bind(match_id)
            .bind(from)
            .bind(to)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn transition_ending_status(
        &self,
        match_id: Uuid,
        from: EndingStatus,
        to: EndingStatus,
    ) -> Result<Option<Match>, sqlx::Error> {
        let sql = format!(
            "UPDATE matches SET ending_status = $3, updated_at = NOW()
             WHERE id = $1 AND ending_status = $2
             RETURNING {}",
            MATCH_COLUMNS
        );
        sqlx::query_as::<_, Match>(&sql)
            .bind(match_id)
            .bind(from)
            .bind(to)
            .fetch_optional(&self.pool)
            .await
    }

    /// Add points to one side's running score, guarded on the match still being Live.
    pub async fn add_points(
        &self,
        match_id: Uuid,
        side: TeamSide,
        points: i32,
    ) -> Result<Option<Match>, sqlx::Error> {
        let column = match side {
            TeamSide::Home => "home_score",
            TeamSide::Away => "away_score",
        };
        let sql = format!(
            "UPDATE matches SET {col} = {col} + $2, updated_at = NOW()
             WHERE id = $1 AND status = $3
             RETURNING {cols}",
            col = column,
            cols = MATCH_COLUMNS
        );
        sqlx::query_as::<_, Match>(&sql)
            .bind(match_id)
            .bind(points)
            .bind(MatchStatus::Live)
            .fetch_optional(&self.pool)
            .await
    }

    /// Store the final score and close the match, guarded on it still being Live.
    pub async fn finish_match(
        &self,
        match_id: Uuid,
        home_score: i32,
        away_score: i32,
        result: MatchResult,
    ) -> Result<Option<Match>, sqlx::Error> {
        let sql = format!(
            "UPDATE matches
             SET home_score = $2, away_score = $3, result = $4,
                 status = $5, ending_status = $6, updated_at = NOW()
             WHERE id = $1 AND status = $7 AND ending_status = $8
             RETURNING {}",
            MATCH_COLUMNS
        );
        sqlx::query_as::<_, Match>(&sql)
            .bind(match_id)
            .bind(home_score)
            .bind(away_score)
            .bind(result)
            .bind(MatchStatus::Finish)
            .bind(EndingStatus::StatNotSending)
            .bind(MatchStatus::Live)
            .bind(EndingStatus::WaitingEnd)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn upsert_half_time(
        &self,
        match_id: Uuid,
        home_score: i32,
        away_score: i32,
    ) -> Result<HalfTime, sqlx::Error> {
        sqlx::query_as::<_, HalfTime>(
            r#"
            INSERT INTO half_times (match_id, home_score, away_score)
            VALUES ($1, $2, $3)
            ON CONFLICT (match_id) DO UPDATE
            SET home_score = EXCLUDED.home_score,
                away_score = EXCLUDED.away_score,
                updated_at = NOW()
            RETURNING match_id, home_score, away_score, updated_at
            "#,
        )
        .bind(match_id)
        .bind(home_score)
        .bind(away_score)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn get_half_time(&self, match_id: Uuid) -> Result<Option<HalfTime>, sqlx::Error> {
        sqlx::query_as::<_, HalfTime>(
            "SELECT match_id, home_score, away_score, updated_at FROM half_times WHERE match_id = $1",
        )
        .bind(match_id)
        .fetch_optional(&self.pool)
        .await
    }
}
