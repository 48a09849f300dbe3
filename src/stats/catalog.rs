//! Names of the seeded stat types. They must match `stat_types.name` rows
//! inserted by the migrations.

pub const TRIES: &str = "Essais";
pub const POINTS_SCORED: &str = "Points inscrits";

pub const CONVERSIONS_ATTEMPTED: &str = "Transformations tentées";
pub const CONVERSIONS_SUCCESSFUL: &str = "Transformations réussies";
pub const PENALTIES_ATTEMPTED: &str = "Pénalités tentées";
pub const PENALTIES_SUCCESSFUL: &str = "Pénalités réussies";
pub const DROPS_ATTEMPTED: &str = "Drops tentés";
pub const DROPS_SUCCESSFUL: &str = "Drops réussis";

pub const PASSES_ATTEMPTED: &str = "Passes tentées";
pub const PASSES_SUCCESSFUL: &str = "Passes réussies";
pub const TACKLES_ATTEMPTED: &str = "Plaquages tentés";
pub const TACKLES_SUCCESSFUL: &str = "Plaquages réussis";
pub const RUCKS_ATTEMPTED: &str = "Rucks tentés";
pub const RUCKS_WON: &str = "Rucks gagnés";

pub const YELLOW_CARDS: &str = "Cartons jaunes";
pub const RED_CARDS: &str = "Cartons rouges";
pub const SUBSTITUTIONS: &str = "Remplacements";

pub const PASS_PERCENTAGE: &str = "% réussite des passes";
pub const TACKLE_PERCENTAGE: &str = "% réussite des plaquages";
pub const RUCK_PERCENTAGE: &str = "% rucks gagnés";
pub const KICKING_PERCENTAGE: &str = "% réussite au pied";

pub const NUMBER_STATS: [&str; 17] = [
    TRIES,
    POINTS_SCORED,
    CONVERSIONS_ATTEMPTED,
    CONVERSIONS_SUCCESSFUL,
    PENALTIES_ATTEMPTED,
    PENALTIES_SUCCESSFUL,
    DROPS_ATTEMPTED,
    DROPS_SUCCESSFUL,
    PASSES_ATTEMPTED,
    PASSES_SUCCESSFUL,
    TACKLES_ATTEMPTED,
    TACKLES_SUCCESSFUL,
    RUCKS_ATTEMPTED,
    RUCKS_WON,
    YELLOW_CARDS,
    RED_CARDS,
    SUBSTITUTIONS,
];

pub const PERCENTAGE_STATS: [&str; 4] = [
    PASS_PERCENTAGE,
    TACKLE_PERCENTAGE,
    RUCK_PERCENTAGE,
    KICKING_PERCENTAGE,
];

pub fn is_percentage_stat(name: &str) -> bool {
    PERCENTAGE_STATS.contains(&name)
}
