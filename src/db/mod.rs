pub mod club_queries;
pub mod election_queries;
pub mod event_queries;
pub mod helpers;
pub mod lineup_queries;
pub mod match_queries;
pub mod stat_queries;

pub use club_queries::ClubQueries;
pub use election_queries::ElectionQueries;
pub use event_queries::EventQueries;
pub use lineup_queries::LineupQueries;
pub use match_queries::MatchQueries;
pub use stat_queries::StatQueries;
