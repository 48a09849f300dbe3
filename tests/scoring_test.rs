use rugby_club_backend::models::match_event::EventKind;
use rugby_club_backend::stats::catalog::*;
use rugby_club_backend::stats::scoring::{points_for, stat_deltas_for};

fn delta_value(kind: EventKind, stat: &str) -> Option<i32> {
    stat_deltas_for(kind)
        .into_iter()
        .find(|d| d.stat_type == stat)
        .map(|d| d.value)
}

#[test]
fn test_try_awards_five_points_and_one_try() {
    assert_eq!(points_for(EventKind::Try), 5);
    assert_eq!(delta_value(EventKind::Try, TRIES), Some(1));
    assert_eq!(delta_value(EventKind::Try, POINTS_SCORED), Some(5));
}

#[test]
fn test_point_values() {
    assert_eq!(points_for(EventKind::ConvertedTry), 7);
    assert_eq!(points_for(EventKind::ConversionSuccess), 2);
    assert_eq!(points_for(EventKind::PenaltyGoal), 3);
    assert_eq!(points_for(EventKind::DropGoal), 3);

    for kind in [
        EventKind::ConversionMiss,
        EventKind::PenaltyMiss,
        EventKind::DropMiss,
        EventKind::YellowCard,
        EventKind::RedCard,
        EventKind::Substitution,
    ] {
        assert_eq!(points_for(kind), 0, "{} should not score", kind);
    }
}

#[test]
fn test_points_scored_delta_matches_points_for_every_kind() {
    for kind in EventKind::ALL {
        let expected = match points_for(kind) {
            0 => None,
            points => Some(points),
        };
        assert_eq!(delta_value(kind, POINTS_SCORED), expected, "kind {}", kind);
    }
}

#[test]
fn test_kicks_count_attempts_and_successes() {
    assert_eq!(delta_value(EventKind::PenaltyGoal, PENALTIES_ATTEMPTED), Some(1));
    assert_eq!(delta_value(EventKind::PenaltyGoal, PENALTIES_SUCCESSFUL), Some(1));
    assert_eq!(delta_value(EventKind::PenaltyMiss, PENALTIES_ATTEMPTED), Some(1));
    assert_eq!(delta_value(EventKind::PenaltyMiss, PENALTIES_SUCCESSFUL), None);

    assert_eq!(delta_value(EventKind::DropGoal, DROPS_SUCCESSFUL), Some(1));
    assert_eq!(delta_value(EventKind::DropMiss, DROPS_ATTEMPTED), Some(1));
    assert_eq!(delta_value(EventKind::DropMiss, DROPS_SUCCESSFUL), None);

    assert_eq!(delta_value(EventKind::ConversionMiss, CONVERSIONS_ATTEMPTED), Some(1));
    assert_eq!(delta_value(EventKind::ConversionMiss, CONVERSIONS_SUCCESSFUL), None);
}

#[test]
fn test_cards_and_substitutions_only_touch_their_counter() {
    assert_eq!(
        stat_deltas_for(EventKind::YellowCard).iter().map(|d| d.stat_type.as_str()).collect::<Vec<_>>(),
        vec![YELLOW_CARDS]
    );
    assert_eq!(
        stat_deltas_for(EventKind::RedCard).iter().map(|d| d.stat_type.as_str()).collect::<Vec<_>>(),
        vec![RED_CARDS]
    );
    assert_eq!(
        stat_deltas_for(EventKind::Substitution).iter().map(|d| d.stat_type.as_str()).collect::<Vec<_>>(),
        vec![SUBSTITUTIONS]
    );
}

#[test]
fn test_event_deltas_never_name_a_percentage_stat() {
    for kind in EventKind::ALL {
        for delta in stat_deltas_for(kind) {
            assert!(!is_percentage_stat(&delta.stat_type));
            assert!(NUMBER_STATS.contains(&delta.stat_type.as_str()));
        }
    }
}

#[test]
fn test_event_codes_parse_case_insensitively() {
    for kind in EventKind::ALL {
        assert_eq!(EventKind::from_code(kind.code()), Some(kind));
        assert_eq!(EventKind::from_code(&kind.code().to_uppercase()), Some(kind));
    }
    assert_eq!(EventKind::from_code("  try "), Some(EventKind::Try));
    assert_eq!(EventKind::from_code("scrum"), None);
}
