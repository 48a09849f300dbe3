use std::fmt;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::user::Principal;

/// Mutating actions that go through the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    CreateMatch,
    StartMatch,
    RecordEvent,
    RecordHalfTime,
    RecordFullTime,
    EditStats,
    EditLineup,
    ElectPlayers,
    ValidateStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessScope {
    /// Only global admins.
    AdminOnly,
    /// Members of the clubs passed to [`authorize`].
    Clubs,
}

#[derive(Debug, Clone, Copy)]
pub struct AccessPolicy {
    pub scope: AccessScope,
    pub requires_staff_job: bool,
}

impl MatchAction {
    pub fn policy(&self) -> AccessPolicy {
        match self {
            MatchAction::CreateMatch | MatchAction::ValidateStats => AccessPolicy {
                scope: AccessScope::AdminOnly,
                requires_staff_job: false,
            },
            MatchAction::StartMatch
            | MatchAction::RecordEvent
            | MatchAction::RecordHalfTime
            | MatchAction::RecordFullTime
            | MatchAction::EditStats
            | MatchAction::EditLineup
            | MatchAction::ElectPlayers => AccessPolicy {
                scope: AccessScope::Clubs,
                requires_staff_job: true,
            },
        }
    }
}

impl fmt::Display for MatchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchAction::CreateMatch => "create matches",
            MatchAction::StartMatch => "start this match",
            MatchAction::RecordEvent => "record events for this match",
            MatchAction::RecordHalfTime => "enter the half-time score",
            MatchAction::RecordFullTime => "enter the full-time score",
            MatchAction::EditStats => "edit statistics for this team",
            MatchAction::EditLineup => "edit the lineup of this team",
            MatchAction::ElectPlayers => "elect players for this team",
            MatchAction::ValidateStats => "validate match statistics",
        };
        f.write_str(label)
    }
}

/// Decide whether `principal` may perform `action` on a match owned by
/// `clubs`. Global admins always pass; everyone else needs a club in
/// `clubs` and, for staff actions, a Coach or Admin job.
pub fn authorize(principal: &Principal, action: MatchAction, clubs: &[Uuid]) -> Result<(), AppError> {
    if principal.is_admin() {
        return Ok(());
    }

    let policy = action.policy();
    if policy.scope == AccessScope::AdminOnly {
        return Err(AppError::forbidden(format!(
            "Only administrators can {}",
            action
        )));
    }

    if !clubs.iter().any(|club_id| principal.belongs_to_club(*club_id)) {
        return Err(AppError::forbidden(format!(
            "You must belong to one of the clubs involved to {}",
            action
        )));
    }

    if policy.requires_staff_job && !principal.job.is_staff() {
        return Err(AppError::forbidden(format!(
            "Only coaches and club administrators can {}",
            action
        )));
    }

    Ok(())
}
