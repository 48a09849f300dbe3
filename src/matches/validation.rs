use std::collections::HashSet;

use crate::error::AppError;
use crate::models::election::ElectionRequest;
use crate::models::lineup::SetLineupRequest;
use crate::models::match_event::{CreateMatchEventRequest, EventKind};
use crate::models::rugby_match::{CreateMatchRequest, FullTimeRequest, HalfTimeRequest, MatchResult};
use crate::models::stat::StatDelta;
use crate::stats::catalog::is_percentage_stat;

pub const MAX_MINUTE: i32 = 120;
pub const MAX_SCORE: i32 = 200;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MAX_DELTAS_PER_REQUEST: usize = 50;
pub const MAX_DELTA_VALUE: i32 = 1000;
pub const MAX_LINEUP_SIZE: usize = 30;

/// Input checks for every match action. Runs before any database access.
#[derive(Debug, Clone, Copy)]
pub struct MatchValidator;

impl MatchValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_create_match(&self, request: &CreateMatchRequest) -> Result<(), AppError> {
        if request.home_team_id.is_nil() || request.away_team_id.is_nil() {
            return Err(AppError::validation("Nil UUID not allowed for team ID"));
        }
        if request.home_team_id == request.away_team_id {
            return Err(AppError::validation("A team cannot play against itself"));
        }
        Ok(())
    }

    pub fn validate_scores(&self, home_score: i32, away_score: i32) -> Result<(), AppError> {
        for score in [home_score, away_score] {
            if score < 0 {
                return Err(AppError::validation("Scores cannot be negative"));
            }
            if score > MAX_SCORE {
                return Err(AppError::validation(format!(
                    "Score {} is not plausible (maximum {})",
                    score, MAX_SCORE
                )));
            }
        }
        Ok(())
    }

    pub fn validate_half_time(&self, request: &HalfTimeRequest) -> Result<(), AppError> {
        self.validate_scores(request.home_score, request.away_score)
    }

    /// The submitted result must be the one the score implies.
    pub fn validate_full_time(&self, request: &FullTimeRequest) -> Result<(), AppError> {
        self.validate_scores(request.home_score, request.away_score)?;

        let expected = MatchResult::from_score(request.home_score, request.away_score);
        if request.result != expected {
            return Err(AppError::validation(format!(
                "Result does not match the score {}-{}",
                request.home_score, request.away_score
            )));
        }
        Ok(())
    }

    /// Check an event request and resolve its type code.
    pub fn validate_event(&self, request: &CreateMatchEventRequest) -> Result<EventKind, AppError> {
        let kind = EventKind::from_code(&request.event_type)
            .ok_or_else(|| AppError::validation(format!("Unknown event type: {}", request.event_type)))?;

        if request.minute < 0 || request.minute > MAX_MINUTE {
            return Err(AppError::validation(format!(
                "Minute must be between 0 and {}",
                MAX_MINUTE
            )));
        }

        if let Some(description) = &request.description {
            if description.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(AppError::validation(format!(
                    "Description too long (maximum {} characters)",
                    MAX_DESCRIPTION_LEN
                )));
            }
        }

        match (kind.is_substitution(), request.main_player_id, request.second_player_id) {
            (true, Some(main), Some(second)) if main == second => {
                Err(AppError::validation("A player cannot replace themselves"))
            }
            (true, Some(_), Some(_)) => Ok(kind),
            (true, _, _) => Err(AppError::validation("A substitution needs both the leaving and the entering player")),
            (false, _, Some(_)) => Err(AppError::validation("Only substitutions can name a second player")),
            (false, _, None) => Ok(kind),
        }
    }

    pub fn validate_stat_deltas(&self, deltas: &[StatDelta]) -> Result<(), AppError> {
        if deltas.is_empty() {
            return Err(AppError::validation("At least one statistic is required"));
        }
        if deltas.len() > MAX_DELTAS_PER_REQUEST {
            return Err(AppError::validation(format!(
                "Too many statistics in one request (maximum {})",
                MAX_DELTAS_PER_REQUEST
            )));
        }

        for delta in deltas {
            let name = delta.stat_type.trim();
            if name.is_empty() {
                return Err(AppError::validation("Statistic name cannot be empty"));
            }
            if is_percentage_stat(name) {
                return Err(AppError::validation(format!(
                    "{} is derived and cannot be edited directly",
                    name
                )));
            }
            if delta.value.abs() > MAX_DELTA_VALUE {
                return Err(AppError::validation(format!(
                    "Value for {} is out of range",
                    name
                )));
            }
        }
        Ok(())
    }

    pub fn validate_lineup(&self, request: &SetLineupRequest) -> Result<(), AppError> {
        if request.players.len() > MAX_LINEUP_SIZE {
            return Err(AppError::validation(format!(
                "A lineup holds at most {} players",
                MAX_LINEUP_SIZE
            )));
        }

        let mut players = HashSet::new();
        let mut numbers = HashSet::new();
        for slot in &request.players {
            if !(1..=99).contains(&slot.number) {
                return Err(AppError::validation(format!(
                    "Shirt number {} must be between 1 and 99",
                    slot.number
                )));
            }
            if !players.insert(slot.player_id) {
                return Err(AppError::validation(format!(
                    "Player {} appears twice in the lineup",
                    slot.player_id
                )));
            }
            if !numbers.insert(slot.number) {
                return Err(AppError::validation(format!(
                    "Shirt number {} is used twice",
                    slot.number
                )));
            }
        }
        Ok(())
    }

    pub fn validate_election(&self, request: &ElectionRequest) -> Result<(), AppError> {
        if request.best_player_id == request.worst_player_id {
            return Err(AppError::validation("Best and worst player must be different"));
        }
        Ok(())
    }

    /// Trim, strip NUL bytes, and drop empty descriptions.
    pub fn sanitize_description(&self, input: Option<&str>) -> Option<String> {
        input
            .map(|s| s.trim().replace('\0', ""))
            .filter(|s| !s.is_empty())
    }
}

impl Default for MatchValidator {
    fn default() -> Self {
        Self::new()
    }
}
