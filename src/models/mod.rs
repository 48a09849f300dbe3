pub mod club;
pub mod common;
pub mod election;
pub mod lineup;
pub mod match_event;
pub mod rugby_match;
pub mod stat;
pub mod user;
