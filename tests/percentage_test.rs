use std::collections::HashMap;

use rugby_club_backend::stats::catalog::*;
use rugby_club_backend::stats::percentage::{affected_by, percentage, DERIVATIONS};

fn totals(entries: &[(&str, i32)]) -> HashMap<String, i32> {
    entries.iter().map(|(name, value)| (name.to_string(), *value)).collect()
}

#[test]
fn test_percentage_is_zero_without_attempts() {
    assert_eq!(percentage(0, 0), 0);
    assert_eq!(percentage(5, 0), 0);
}

#[test]
fn test_percentage_rounds_to_nearest() {
    assert_eq!(percentage(1, 3), 33);
    assert_eq!(percentage(2, 3), 67);
    assert_eq!(percentage(1, 8), 13); // 12.5 rounds away from zero
    assert_eq!(percentage(7, 10), 70);
    assert_eq!(percentage(10, 10), 100);
}

#[test]
fn test_percentage_stays_in_range() {
    for attempted in 0..=20_i64 {
        for successful in 0..=25_i64 {
            let value = percentage(successful, attempted);
            assert!((0..=100).contains(&value), "{}/{} gave {}", successful, attempted, value);
        }
    }
    // More successes than attempts must not escape the range
    assert_eq!(percentage(12, 10), 100);
}

#[test]
fn test_pass_percentage_from_totals() {
    let derivation = DERIVATIONS
        .iter()
        .find(|d| d.percentage == PASS_PERCENTAGE)
        .expect("pass derivation");
    let values = totals(&[(PASSES_SUCCESSFUL, 7), (PASSES_ATTEMPTED, 10)]);
    assert_eq!(derivation.compute(&values), 70);
}

#[test]
fn test_missing_counters_count_as_zero() {
    for derivation in DERIVATIONS.iter() {
        assert_eq!(derivation.compute(&HashMap::new()), 0);
    }
}

#[test]
fn test_kicking_percentage_sums_all_kicks() {
    let derivation = DERIVATIONS
        .iter()
        .find(|d| d.percentage == KICKING_PERCENTAGE)
        .expect("kicking derivation");
    let values = totals(&[
        (CONVERSIONS_SUCCESSFUL, 2),
        (CONVERSIONS_ATTEMPTED, 3),
        (PENALTIES_SUCCESSFUL, 1),
        (PENALTIES_ATTEMPTED, 2),
        (DROPS_SUCCESSFUL, 0),
        (DROPS_ATTEMPTED, 1),
    ]);
    // 3 of 6
    assert_eq!(derivation.compute(&values), 50);
}

#[test]
fn test_recomputing_twice_gives_the_same_value() {
    let values = totals(&[(TACKLES_SUCCESSFUL, 9), (TACKLES_ATTEMPTED, 11)]);
    for derivation in DERIVATIONS.iter() {
        assert_eq!(derivation.compute(&values), derivation.compute(&values));
    }
}

#[test]
fn test_affected_by_selects_dependent_percentages() {
    let affected: Vec<&str> = affected_by([PASSES_ATTEMPTED]).iter().map(|d| d.percentage).collect();
    assert_eq!(affected, vec![PASS_PERCENTAGE]);

    let affected: Vec<&str> = affected_by([PENALTIES_SUCCESSFUL, RUCKS_WON])
        .iter()
        .map(|d| d.percentage)
        .collect();
    assert_eq!(affected, vec![RUCK_PERCENTAGE, KICKING_PERCENTAGE]);

    assert!(affected_by([TRIES, POINTS_SCORED, YELLOW_CARDS]).is_empty());
}

#[test]
fn test_affected_by_lists_each_derivation_once() {
    let affected = affected_by([CONVERSIONS_ATTEMPTED, CONVERSIONS_SUCCESSFUL, DROPS_ATTEMPTED]);
    assert_eq!(affected.len(), 1);
    assert_eq!(affected[0].percentage, KICKING_PERCENTAGE);
}

#[test]
fn test_every_derivation_targets_a_percentage_stat() {
    for derivation in DERIVATIONS.iter() {
        assert!(is_percentage_stat(derivation.percentage));
        for input in derivation.inputs() {
            assert!(NUMBER_STATS.contains(&input));
        }
    }
}
