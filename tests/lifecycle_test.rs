use chrono::Utc;
use rugby_club_backend::error::AppError;
use rugby_club_backend::matches::lifecycle::*;
use rugby_club_backend::models::rugby_match::{EndingStatus, Match, MatchStatus};
use uuid::Uuid;

fn rugby_match(status: MatchStatus, ending_status: EndingStatus) -> Match {
    Match {
        id: Uuid::new_v4(),
        scheduled_at: Utc::now(),
        status,
        ending_status,
        home_team_id: Uuid::new_v4(),
        away_team_id: Uuid::new_v4(),
        home_score: 0,
        away_score: 0,
        result: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn is_precondition<T: std::fmt::Debug>(result: Result<T, AppError>) -> bool {
    matches!(result, Err(AppError::Precondition(_)))
}

#[test]
fn test_planned_match_starts_live() {
    let m = rugby_match(MatchStatus::Planned, EndingStatus::WaitingEnd);
    assert_eq!(start_transition(&m).ok(), Some(MatchStatus::Live));
}

#[test]
fn test_start_is_rejected_once_started() {
    assert!(is_precondition(start_transition(&rugby_match(MatchStatus::Live, EndingStatus::WaitingEnd))));
    assert!(is_precondition(start_transition(&rugby_match(MatchStatus::Finish, EndingStatus::StatNotSending))));
}

#[test]
fn test_events_require_a_live_match() {
    assert!(ensure_live(&rugby_match(MatchStatus::Live, EndingStatus::WaitingEnd)).is_ok());
    assert!(is_precondition(ensure_live(&rugby_match(MatchStatus::Planned, EndingStatus::WaitingEnd))));
    assert!(is_precondition(ensure_live(&rugby_match(MatchStatus::Finish, EndingStatus::StatNotSending))));
}

#[test]
fn test_full_time_closes_the_match() {
    let m = rugby_match(MatchStatus::Live, EndingStatus::WaitingEnd);
    assert_eq!(
        finish_transition(&m).ok(),
        Some((MatchStatus::Finish, EndingStatus::StatNotSending))
    );
    assert!(is_precondition(finish_transition(&rugby_match(MatchStatus::Planned, EndingStatus::WaitingEnd))));
}

#[test]
fn test_stats_validation_is_one_way() {
    let closed = rugby_match(MatchStatus::Finish, EndingStatus::StatNotSending);
    assert_eq!(validate_stats_transition(&closed).ok(), Some(EndingStatus::StatSend));

    let validated = rugby_match(MatchStatus::Finish, EndingStatus::StatSend);
    assert!(is_precondition(validate_stats_transition(&validated)));

    let live = rugby_match(MatchStatus::Live, EndingStatus::WaitingEnd);
    assert!(is_precondition(validate_stats_transition(&live)));
}

#[test]
fn test_stats_editable_until_validated() {
    assert!(ensure_stats_editable(&rugby_match(MatchStatus::Live, EndingStatus::WaitingEnd)).is_ok());
    assert!(ensure_stats_editable(&rugby_match(MatchStatus::Finish, EndingStatus::StatNotSending)).is_ok());
    assert!(is_precondition(ensure_stats_editable(&rugby_match(MatchStatus::Finish, EndingStatus::StatSend))));
    assert!(is_precondition(ensure_stats_editable(&rugby_match(MatchStatus::Planned, EndingStatus::WaitingEnd))));
}

#[test]
fn test_lineup_and_election_windows() {
    let planned = rugby_match(MatchStatus::Planned, EndingStatus::WaitingEnd);
    let live = rugby_match(MatchStatus::Live, EndingStatus::WaitingEnd);
    let finished = rugby_match(MatchStatus::Finish, EndingStatus::StatNotSending);

    assert!(ensure_lineup_editable(&planned).is_ok());
    assert!(ensure_lineup_editable(&live).is_ok());
    assert!(is_precondition(ensure_lineup_editable(&finished)));

    assert!(is_precondition(ensure_election_open(&live)));
    assert!(ensure_election_open(&finished).is_ok());
}
