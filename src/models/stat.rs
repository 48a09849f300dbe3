use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// `Number` stats are raw counters, `Percentage` stats are derived.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar")]
pub enum StatCategory {
    Number,
    Percentage,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct StatType {
    pub id: Uuid,
    pub name: String,
    pub category: StatCategory,
}

/// One counter keyed by (match, team, player-or-null, stat type).
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Stat {
    pub id: Uuid,
    pub match_id: Uuid,
    pub team_id: Uuid,
    pub player_id: Option<Uuid>,
    pub stat_type_id: Uuid,
    pub value: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Stat row joined with its type for read models.
#[derive(Debug, FromRow, Serialize, Clone)]
pub struct StatView {
    pub team_id: Uuid,
    pub player_id: Option<Uuid>,
    pub stat_name: String,
    pub category: StatCategory,
    pub value: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StatDelta {
    pub stat_type: String,
    pub value: i32,
}

impl StatDelta {
    pub fn new(stat_type: impl Into<String>, value: i32) -> Self {
        Self {
            stat_type: stat_type.into(),
            value,
        }
    }
}

/// Who a batch of deltas applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatSubject {
    pub match_id: Uuid,
    pub team_id: Uuid,
    pub player_id: Option<Uuid>,
}

impl StatSubject {
    pub fn team(match_id: Uuid, team_id: Uuid) -> Self {
        Self { match_id, team_id, player_id: None }
    }

    pub fn player(match_id: Uuid, team_id: Uuid, player_id: Uuid) -> Self {
        Self { match_id, team_id, player_id: Some(player_id) }
    }
}

/// Manual stat entry by a coach.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StatEditRequest {
    pub team_id: Uuid,
    pub player_id: Option<Uuid>,
    pub deltas: Vec<StatDelta>,
}

#[derive(Debug, Serialize)]
pub struct StatEditResponse {
    pub counters: Vec<Stat>,
    pub percentages: Vec<Stat>,
}
