use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

use crate::models::common::TeamSide;

/// Main match lifecycle. Only moves forward: Planned -> Live -> Finish.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar")]
pub enum MatchStatus {
    Planned,
    Live,
    Finish,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Planned => "Planned",
            MatchStatus::Live => "Live",
            MatchStatus::Finish => "Finish",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks whether post-match statistics have been validated.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar")]
pub enum EndingStatus {
    #[serde(rename = "Waiting_End")]
    #[sqlx(rename = "Waiting_End")]
    WaitingEnd,
    #[serde(rename = "Stat_Not_Sending")]
    #[sqlx(rename = "Stat_Not_Sending")]
    StatNotSending,
    #[serde(rename = "Stat_Send")]
    #[sqlx(rename = "Stat_Send")]
    StatSend,
}

impl EndingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndingStatus::WaitingEnd => "Waiting_End",
            EndingStatus::StatNotSending => "Stat_Not_Sending",
            EndingStatus::StatSend => "Stat_Send",
        }
    }
}

impl fmt::Display for EndingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar")]
pub enum MatchResult {
    #[serde(rename = "Home_Win")]
    #[sqlx(rename = "Home_Win")]
    HomeWin,
    #[serde(rename = "Away_Win")]
    #[sqlx(rename = "Away_Win")]
    AwayWin,
    Draw,
}

impl MatchResult {
    /// The only result consistent with a final score.
    pub fn from_score(home_score: i32, away_score: i32) -> Self {
        match home_score.cmp(&away_score) {
            std::cmp::Ordering::Greater => MatchResult::HomeWin,
            std::cmp::Ordering::Less => MatchResult::AwayWin,
            std::cmp::Ordering::Equal => MatchResult::Draw,
        }
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Match {
    pub id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub status: MatchStatus,
    pub ending_status: EndingStatus,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home_score: i32,
    pub away_score: i32,
    pub result: Option<MatchResult>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Match {
    pub fn side_of(&self, team_id: Uuid) -> Option<TeamSide> {
        if team_id == self.home_team_id {
            Some(TeamSide::Home)
        } else if team_id == self.away_team_id {
            Some(TeamSide::Away)
        } else {
            None
        }
    }

    pub fn team_id(&self, side: TeamSide) -> Uuid {
        match side {
            TeamSide::Home => self.home_team_id,
            TeamSide::Away => self.away_team_id,
        }
    }
}

/// A match together with the clubs owning both teams, which is what
/// access checks need.
#[derive(Debug, FromRow, Serialize, Clone)]
pub struct MatchWithClubs {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub inner: Match,
    pub home_team_name: String,
    pub away_team_name: String,
    pub home_club_id: Uuid,
    pub away_club_id: Uuid,
}

impl MatchWithClubs {
    pub fn club_of(&self, side: TeamSide) -> Uuid {
        match side {
            TeamSide::Home => self.home_club_id,
            TeamSide::Away => self.away_club_id,
        }
    }

    pub fn club_ids(&self) -> [Uuid; 2] {
        [self.home_club_id, self.away_club_id]
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct HalfTime {
    pub match_id: Uuid,
    pub home_score: i32,
    pub away_score: i32,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateMatchRequest {
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HalfTimeRequest {
    pub home_score: i32,
    pub away_score: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FullTimeRequest {
    pub home_score: i32,
    pub away_score: i32,
    pub result: MatchResult,
}

/// Read model for the half-time dialog.
#[derive(Debug, Serialize)]
pub struct HalfTimeView {
    pub match_id: Uuid,
    pub status: MatchStatus,
    pub home_team_name: String,
    pub away_team_name: String,
    pub half_time: Option<HalfTime>,
}

/// Read model for the full-time dialog.
#[derive(Debug, Serialize)]
pub struct FullTimeView {
    pub match_id: Uuid,
    pub status: MatchStatus,
    pub ending_status: EndingStatus,
    pub home_team_name: String,
    pub away_team_name: String,
    pub home_score: i32,
    pub away_score: i32,
    pub result: Option<MatchResult>,
    pub suggested_result: MatchResult,
}
