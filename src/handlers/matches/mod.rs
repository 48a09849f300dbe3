pub mod election_handler;
pub mod event_handler;
pub mod lineup_handler;
pub mod match_handler;
pub mod score_handler;
pub mod stat_handler;
