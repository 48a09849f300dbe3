use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::lineup::LineupPlayer;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar")]
pub enum ElectionKind {
    Best,
    Worst,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Election {
    pub id: Uuid,
    pub match_id: Uuid,
    pub team_id: Uuid,
    pub player_id: Uuid,
    pub kind: ElectionKind,
    pub elected_by: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ElectionRequest {
    pub team_id: Uuid,
    pub best_player_id: Uuid,
    pub worst_player_id: Uuid,
}

/// Read model for the election dialog: who can be elected and what was chosen.
#[derive(Debug, Serialize)]
pub struct ElectionView {
    pub match_id: Uuid,
    pub candidates: Vec<LineupPlayer>,
    pub elections: Vec<Election>,
}
