pub mod election_service;
pub mod event_recorder;
pub mod lineup_service;
pub mod match_service;
pub mod percentage_deriver;
pub mod stat_accumulator;
pub mod stat_service;

pub use election_service::ElectionService;
pub use event_recorder::EventRecorder;
pub use lineup_service::LineupService;
pub use match_service::MatchService;
pub use percentage_deriver::PercentageDeriver;
pub use stat_accumulator::StatAccumulator;
pub use stat_service::StatService;
