use crate::models::match_event::EventKind;
use crate::models::stat::StatDelta;
use crate::stats::catalog::*;

pub const TRY_POINTS: i32 = 5;
pub const CONVERSION_POINTS: i32 = 2;
pub const PENALTY_GOAL_POINTS: i32 = 3;
pub const DROP_GOAL_POINTS: i32 = 3;

/// Points the scoring team receives for an event.
pub fn points_for(kind: EventKind) -> i32 {
    match kind {
        EventKind::Try => TRY_POINTS,
        EventKind::ConvertedTry => TRY_POINTS + CONVERSION_POINTS,
        EventKind::ConversionSuccess => CONVERSION_POINTS,
        EventKind::PenaltyGoal => PENALTY_GOAL_POINTS,
        EventKind::DropGoal => DROP_GOAL_POINTS,
        EventKind::ConversionMiss
        | EventKind::PenaltyMiss
        | EventKind::DropMiss
        | EventKind::YellowCard
        | EventKind::RedCard
        | EventKind::Substitution => 0,
    }
}

/// Named counter increments one event produces, in the order they are applied.
pub fn stat_deltas_for(kind: EventKind) -> Vec<StatDelta> {
    let points = points_for(kind);
    let mut deltas = match kind {
        EventKind::Try => vec![StatDelta::new(TRIES, 1)],
        EventKind::ConvertedTry => vec![
            StatDelta::new(TRIES, 1),
            StatDelta::new(CONVERSIONS_ATTEMPTED, 1),
            StatDelta::new(CONVERSIONS_SUCCESSFUL, 1),
        ],
        EventKind::ConversionSuccess => vec![
            StatDelta::new(CONVERSIONS_ATTEMPTED, 1),
            StatDelta::new(CONVERSIONS_SUCCESSFUL, 1),
        ],
        EventKind::ConversionMiss => vec![StatDelta::new(CONVERSIONS_ATTEMPTED, 1)],
        EventKind::PenaltyGoal => vec![
            StatDelta::new(PENALTIES_ATTEMPTED, 1),
            StatDelta::new(PENALTIES_SUCCESSFUL, 1),
        ],
        EventKind::PenaltyMiss => vec![StatDelta::new(PENALTIES_ATTEMPTED, 1)],
        EventKind::DropGoal => vec![
            StatDelta::new(DROPS_ATTEMPTED, 1),
            StatDelta::new(DROPS_SUCCESSFUL, 1),
        ],
        EventKind::DropMiss => vec![StatDelta::new(DROPS_ATTEMPTED, 1)],
        EventKind::YellowCard => vec![StatDelta::new(YELLOW_CARDS, 1)],
        EventKind::RedCard => vec![StatDelta::new(RED_CARDS, 1)],
        EventKind::Substitution => vec![StatDelta::new(SUBSTITUTIONS, 1)],
    };

    if points > 0 {
        deltas.push(StatDelta::new(POINTS_SCORED, points));
    }
    deltas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converted_try_counts_everything_in_one_batch() {
        let deltas = stat_deltas_for(EventKind::ConvertedTry);
        let names: Vec<&str> = deltas.iter().map(|d| d.stat_type.as_str()).collect();
        assert_eq!(
            names,
            vec![TRIES, CONVERSIONS_ATTEMPTED, CONVERSIONS_SUCCESSFUL, POINTS_SCORED]
        );
        assert_eq!(deltas.last().map(|d| d.value), Some(7));
    }

    #[test]
    fn misses_never_award_points() {
        for kind in [EventKind::ConversionMiss, EventKind::PenaltyMiss, EventKind::DropMiss] {
            assert_eq!(points_for(kind), 0);
            assert!(stat_deltas_for(kind).iter().all(|d| d.stat_type != POINTS_SCORED));
        }
    }
}
