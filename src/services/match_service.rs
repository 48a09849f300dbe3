use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::db::helpers::{require_record, require_transition};
use crate::db::{ClubQueries, MatchQueries};
use crate::error::AppError;
use crate::matches::access::{authorize, MatchAction};
use crate::matches::lifecycle::{ensure_live, finish_transition, start_transition, validate_stats_transition};
use crate::matches::validation::MatchValidator;
use crate::models::rugby_match::{
    CreateMatchRequest, EndingStatus, FullTimeRequest, FullTimeView, HalfTime, HalfTimeRequest,
    HalfTimeView, Match, MatchResult, MatchWithClubs,
};
use crate::models::user::Principal;

/// Match creation and the Planned -> Live -> Finish lifecycle.
#[derive(Debug, Clone)]
pub struct MatchService {
    match_queries: MatchQueries,
    club_queries: ClubQueries,
    validator: MatchValidator,
}

impl MatchService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            match_queries: MatchQueries::new(pool.clone()),
            club_queries: ClubQueries::new(pool),
            validator: MatchValidator::new(),
        }
    }

    pub async fn create_match(&self, principal: &Principal, request: &CreateMatchRequest) -> Result<Match, AppError> {
        authorize(principal, MatchAction::CreateMatch, &[])?;
        self.validator.validate_create_match(request)?;

        for team_id in [request.home_team_id, request.away_team_id] {
            require_record(
                self.club_queries.get_team(team_id).await,
                &format!("Team {} not found", team_id),
            )?;
        }

        Ok(self.match_queries.create_match(request).await?)
    }

    pub async fn get_match(&self, match_id: Uuid) -> Result<MatchWithClubs, AppError> {
        require_record(
            self.match_queries.get_match_with_clubs(match_id).await,
            "Match not found",
        )
    }

    pub async fn start_match(&self, principal: &Principal, match_id: Uuid) -> Result<Match, AppError> {
        let rugby_match = self.get_match(match_id).await?;
        authorize(principal, MatchAction::StartMatch, &rugby_match.club_ids())?;
        let next = start_transition(&rugby_match.inner)?;

        let started = require_transition(
            self.match_queries
                .transition_status(match_id, rugby_match.inner.status, next)
                .await,
            "Match status changed, reload and try again",
        )?;
        info!("Match {} is now {} by {}", match_id, started.status, principal.username);
        Ok(started)
    }

    pub async fn record_half_time(
        &self,
        principal: &Principal,
        match_id: Uuid,
        request: &HalfTimeRequest,
    ) -> Result<HalfTime, AppError> {
        self.validator.validate_half_time(request)?;
        let rugby_match = self.get_match(match_id).await?;
        authorize(principal, MatchAction::RecordHalfTime, &rugby_match.club_ids())?;
        ensure_live(&rugby_match.inner)?;

        Ok(self
            .match_queries
            .upsert_half_time(match_id, request.home_score, request.away_score)
            .await?)
    }

    pub async fn half_time_view(&self, match_id: Uuid) -> Result<HalfTimeView, AppError> {
        let rugby_match = self.get_match(match_id).await?;
        let half_time = self.match_queries.get_half_time(match_id).await?;
        Ok(HalfTimeView {
            match_id,
            status: rugby_match.inner.status,
            home_team_name: rugby_match.home_team_name,
            away_team_name: rugby_match.away_team_name,
            half_time,
        })
    }

    /// Enter the final score and result, closing the match.
    pub async fn record_full_time(
        &self,
        principal: &Principal,
        match_id: Uuid,
        request: &FullTimeRequest,
    ) -> Result<Match, AppError> {
        self.validator.validate_full_time(request)?;
        let rugby_match = self.get_match(match_id).await?;
        authorize(principal, MatchAction::RecordFullTime, &rugby_match.club_ids())?;
        finish_transition(&rugby_match.inner)?;

        let finished = require_transition(
            self.match_queries
                .finish_match(match_id, request.home_score, request.away_score, request.result)
                .await,
            "Match status changed, reload and try again",
        )?;
        info!(
            "Match {} finished {}-{} ({:?})",
            match_id, finished.home_score, finished.away_score, request.result
        );
        Ok(finished)
    }

    pub async fn full_time_view(&self, match_id: Uuid) -> Result<FullTimeView, AppError> {
        let rugby_match = self.get_match(match_id).await?;
        let m = &rugby_match.inner;
        Ok(FullTimeView {
            match_id,
            status: m.status,
            ending_status: m.ending_status,
            home_score: m.home_score,
            away_score: m.away_score,
            result: m.result,
            suggested_result: MatchResult::from_score(m.home_score, m.away_score),
            home_team_name: rugby_match.home_team_name.clone(),
            away_team_name: rugby_match.away_team_name.clone(),
        })
    }

    /// Admin sign-off on post-match statistics. Stats are frozen afterwards.
    pub async fn validate_stats(&self, principal: &Principal, match_id: Uuid) -> Result<Match, AppError> {
        authorize(principal, MatchAction::ValidateStats, &[])?;
        let rugby_match = require_record(self.match_queries.get_match(match_id).await, "Match not found")?;
        let next = validate_stats_transition(&rugby_match)?;

        let validated = require_transition(
            self.match_queries
                .transition_ending_status(match_id, EndingStatus::StatNotSending, next)
                .await,
            "Match ending status changed, reload and try again",
        )?;
        info!("Statistics of match {} validated by {}", match_id, principal.username);
        Ok(validated)
    }
}
