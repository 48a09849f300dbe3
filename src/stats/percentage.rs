use std::collections::HashMap;

use crate::stats::catalog::*;

/// A percentage stat and the counters it is derived from. Multiple names on a
/// side are summed before dividing.
#[derive(Debug, Clone, Copy)]
pub struct Derivation {
    pub percentage: &'static str,
    pub successful: &'static [&'static str],
    pub attempted: &'static [&'static str],
}

impl Derivation {
    /// True when a change to `stat_name` can move this percentage.
    pub fn depends_on(&self, stat_name: &str) -> bool {
        self.successful.contains(&stat_name) || self.attempted.contains(&stat_name)
    }

    pub fn inputs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.successful.iter().chain(self.attempted.iter()).copied()
    }

    /// Compute from current counter totals; missing counters count as zero.
    pub fn compute(&self, totals: &HashMap<String, i32>) -> i32 {
        let sum = |names: &[&str]| -> i64 {
            names
                .iter()
                .map(|name| totals.get(*name).copied().unwrap_or(0) as i64)
                .sum()
        };
        percentage(sum(self.successful), sum(self.attempted))
    }
}

pub const DERIVATIONS: [Derivation; 4] = [
    Derivation {
        percentage: PASS_PERCENTAGE,
        successful: &[PASSES_SUCCESSFUL],
        attempted: &[PASSES_ATTEMPTED],
    },
    Derivation {
        percentage: TACKLE_PERCENTAGE,
        successful: &[TACKLES_SUCCESSFUL],
        attempted: &[TACKLES_ATTEMPTED],
    },
    Derivation {
        percentage: RUCK_PERCENTAGE,
        successful: &[RUCKS_WON],
        attempted: &[RUCKS_ATTEMPTED],
    },
    Derivation {
        percentage: KICKING_PERCENTAGE,
        successful: &[CONVERSIONS_SUCCESSFUL, PENALTIES_SUCCESSFUL, DROPS_SUCCESSFUL],
        attempted: &[CONVERSIONS_ATTEMPTED, PENALTIES_ATTEMPTED, DROPS_ATTEMPTED],
    },
];

/// `round(successful / attempted * 100)`, 0 when nothing was attempted,
/// clamped to `0..=100` so inconsistent counters cannot escape the range.
pub fn percentage(successful: i64, attempted: i64) -> i32 {
    if attempted <= 0 {
        return 0;
    }
    let raw = (successful as f64 / attempted as f64 * 100.0).round();
    raw.clamp(0.0, 100.0) as i32
}

/// Derivations touched by a batch of changed counters, each listed once.
pub fn affected_by<'a, I>(changed: I) -> Vec<&'static Derivation>
where
    I: IntoIterator<Item = &'a str>,
{
    let changed: Vec<&str> = changed.into_iter().collect();
    DERIVATIONS
        .iter()
        .filter(|d| changed.iter().any(|name| d.depends_on(name)))
        .collect()
}
