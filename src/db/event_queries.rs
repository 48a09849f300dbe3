use sqlx::PgPool;
use uuid::Uuid;

use crate::models::match_event::{EventType, MatchEvent, MatchEventView};

/// Fields of an event row about to be inserted.
#[derive(Debug, Clone)]
pub struct NewMatchEvent {
    pub match_id: Uuid,
    pub event_type_id: Uuid,
    pub team_id: Uuid,
    pub minute: i32,
    pub main_player_id: Option<Uuid>,
    pub second_player_id: Option<Uuid>,
    pub description: Option<String>,
    pub created_by: Uuid,
}

#[derive(Debug, Clone)]
pub struct EventQueries {
    pool: PgPool,
}

impl EventQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_event_type_by_code(&self, code: &str) -> Result<Option<EventType>, sqlx::Error> {
        sqlx::query_as::<_, EventType>("SELECT id, code, label, points FROM event_types WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn insert_event(&self, event: &NewMatchEvent) -> Result<MatchEvent, sqlx::Error> {
        sqlx::query_as::<_, MatchEvent>(
            r#"
            INSERT INTO match_events (
                id, match_id, event_type_id, team_id, minute,
                main_player_id, second_player_id, description, created_by
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING
                id, match_id, event_type_id, team_id, minute,
                main_player_id, second_player_id, description, created_by, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(event.match_id)
        .bind(event.event_type_id)
        .bind(event.team_id)
        .bind(event.minute)
        .bind(event.main_player_id)
        .bind(event.second_player_id)
        .bind(&event.description)
        .bind(event.created_by)
        .fetch_one(&self.pool)
        .await
    }

    /// Timeline of a match, oldest first.
    pub async fn list_events(&self, match_id: Uuid) -> Result<Vec<MatchEventView>, sqlx::Error> {
        sqlx::query_as::<_, MatchEventView>(
            r#"
            SELECT
                e.id, e.match_id,
                et.code AS event_code, et.label AS event_label, et.points,
                e.team_id, t.name AS team_name, e.minute,
                e.main_player_id, e.second_player_id, e.description, e.created_at
            FROM match_events e
            JOIN event_types et ON et.id = e.event_type_id
            JOIN teams t ON t.id = e.team_id
            WHERE e.match_id = $1
            ORDER BY e.minute ASC, e.created_at ASC
            "#,
        )
        .bind(match_id)
        .fetch_all(&self.pool)
        .await
    }
}
