use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

use crate::models::common::TeamSide;

/// Event types the recorder knows how to score and count.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Try,
    ConvertedTry,
    ConversionSuccess,
    ConversionMiss,
    PenaltyGoal,
    PenaltyMiss,
    DropGoal,
    DropMiss,
    YellowCard,
    RedCard,
    Substitution,
}

impl EventKind {
    pub const ALL: [EventKind; 11] = [
        EventKind::Try,
        EventKind::ConvertedTry,
        EventKind::ConversionSuccess,
        EventKind::ConversionMiss,
        EventKind::PenaltyGoal,
        EventKind::PenaltyMiss,
        EventKind::DropGoal,
        EventKind::DropMiss,
        EventKind::YellowCard,
        EventKind::RedCard,
        EventKind::Substitution,
    ];

    /// Code stored in `event_types.code`.
    pub fn code(&self) -> &'static str {
        match self {
            EventKind::Try => "try",
            EventKind::ConvertedTry => "converted_try",
            EventKind::ConversionSuccess => "conversion_success",
            EventKind::ConversionMiss => "conversion_miss",
            EventKind::PenaltyGoal => "penalty_goal",
            EventKind::PenaltyMiss => "penalty_miss",
            EventKind::DropGoal => "drop_goal",
            EventKind::DropMiss => "drop_miss",
            EventKind::YellowCard => "yellow_card",
            EventKind::RedCard => "red_card",
            EventKind::Substitution => "substitution",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.iter().copied().find(|kind| kind.code().eq_ignore_ascii_case(code))
    }

    pub fn is_substitution(&self) -> bool {
        matches!(self, EventKind::Substitution)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Row of the seeded `event_types` catalog.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct EventType {
    pub id: Uuid,
    pub code: String,
    pub label: String,
    pub points: i32,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchEvent {
    pub id: Uuid,
    pub match_id: Uuid,
    pub event_type_id: Uuid,
    pub team_id: Uuid,
    pub minute: i32,
    pub main_player_id: Option<Uuid>,
    pub second_player_id: Option<Uuid>,
    pub description: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Event row joined with its type for timelines.
#[derive(Debug, FromRow, Serialize, Clone)]
pub struct MatchEventView {
    pub id: Uuid,
    pub match_id: Uuid,
    pub event_code: String,
    pub event_label: String,
    pub points: i32,
    pub team_id: Uuid,
    pub team_name: String,
    pub minute: i32,
    pub main_player_id: Option<Uuid>,
    pub second_player_id: Option<Uuid>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateMatchEventRequest {
    pub event_type: String,
    pub team_side: TeamSide,
    pub minute: i32,
    pub main_player_id: Option<Uuid>,
    pub second_player_id: Option<Uuid>,
    pub description: Option<String>,
}

/// What the recorder did for one event.
#[derive(Debug, Serialize)]
pub struct RecordedEvent {
    pub event: MatchEvent,
    pub kind: EventKind,
    pub points_awarded: i32,
    pub home_score: i32,
    pub away_score: i32,
}
