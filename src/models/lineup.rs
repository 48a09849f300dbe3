use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct LineupEntry {
    pub id: Uuid,
    pub match_id: Uuid,
    pub team_id: Uuid,
    pub player_id: Uuid,
    pub number: i32,
}

#[derive(Debug, FromRow, Serialize, Clone)]
pub struct LineupPlayer {
    pub team_id: Uuid,
    pub player_id: Uuid,
    pub number: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LineupSlot {
    pub player_id: Uuid,
    pub number: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SetLineupRequest {
    pub team_id: Uuid,
    pub players: Vec<LineupSlot>,
}

#[derive(Debug, Serialize)]
pub struct LineupView {
    pub match_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home: Vec<LineupPlayer>,
    pub away: Vec<LineupPlayer>,
}
