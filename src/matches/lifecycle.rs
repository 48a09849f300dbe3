use crate::error::AppError;
use crate::models::rugby_match::{EndingStatus, Match, MatchStatus};

/// Status a match moves to when started.
pub fn start_transition(m: &Match) -> Result<MatchStatus, AppError> {
    match m.status {
        MatchStatus::Planned => Ok(MatchStatus::Live),
        MatchStatus::Live => Err(AppError::precondition("Match is already live")),
        MatchStatus::Finish => Err(AppError::precondition("Match is already finished")),
    }
}

/// Status pair a match moves to when the full-time score is entered.
pub fn finish_transition(m: &Match) -> Result<(MatchStatus, EndingStatus), AppError> {
    ensure_live(m)?;
    if m.ending_status != EndingStatus::WaitingEnd {
        return Err(AppError::precondition(format!(
            "Match ending status is {}, expected {}",
            m.ending_status,
            EndingStatus::WaitingEnd
        )));
    }
    Ok((MatchStatus::Finish, EndingStatus::StatNotSending))
}

/// Ending status after the admin validates statistics. Irreversible.
pub fn validate_stats_transition(m: &Match) -> Result<EndingStatus, AppError> {
    if m.status != MatchStatus::Finish {
        return Err(AppError::precondition("Statistics can only be validated once the match is finished"));
    }
    match m.ending_status {
        EndingStatus::StatNotSending => Ok(EndingStatus::StatSend),
        EndingStatus::StatSend => Err(AppError::precondition("Statistics have already been validated")),
        EndingStatus::WaitingEnd => Err(AppError::precondition("Match has not been closed yet")),
    }
}

pub fn ensure_live(m: &Match) -> Result<(), AppError> {
    if m.status != MatchStatus::Live {
        return Err(AppError::precondition(format!(
            "Match is {}, it must be Live",
            m.status
        )));
    }
    Ok(())
}

/// Stats are writable during the match and after it until validated.
pub fn ensure_stats_editable(m: &Match) -> Result<(), AppError> {
    match (m.status, m.ending_status) {
        (MatchStatus::Live, _) => Ok(()),
        (MatchStatus::Finish, EndingStatus::StatNotSending) => Ok(()),
        (MatchStatus::Finish, EndingStatus::StatSend) => {
            Err(AppError::precondition("Statistics have been validated and can no longer be edited"))
        }
        _ => Err(AppError::precondition(format!(
            "Statistics cannot be edited while the match is {}",
            m.status
        ))),
    }
}

pub fn ensure_lineup_editable(m: &Match) -> Result<(), AppError> {
    if m.status == MatchStatus::Finish {
        return Err(AppError::precondition("Lineup cannot change once the match is finished"));
    }
    Ok(())
}

pub fn ensure_election_open(m: &Match) -> Result<(), AppError> {
    if m.status != MatchStatus::Finish {
        return Err(AppError::precondition("Players can only be elected after the match is finished"));
    }
    Ok(())
}
