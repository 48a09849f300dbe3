use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::db::helpers::require_record;
use crate::db::{LineupQueries, MatchQueries, StatQueries};
use crate::error::AppError;
use crate::matches::access::{authorize, MatchAction};
use crate::matches::lifecycle::ensure_stats_editable;
use crate::matches::validation::MatchValidator;
use crate::models::stat::{StatEditRequest, StatEditResponse, StatSubject, StatView};
use crate::models::user::Principal;
use crate::services::percentage_deriver::PercentageDeriver;
use crate::services::stat_accumulator::StatAccumulator;

/// Manual statistics entry by coaches, and stat read models.
#[derive(Debug, Clone)]
pub struct StatService {
    match_queries: MatchQueries,
    lineup_queries: LineupQueries,
    stat_queries: StatQueries,
    accumulator: StatAccumulator,
    deriver: PercentageDeriver,
    validator: MatchValidator,
}

impl StatService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            match_queries: MatchQueries::new(pool.clone()),
            lineup_queries: LineupQueries::new(pool.clone()),
            stat_queries: StatQueries::new(pool.clone()),
            accumulator: StatAccumulator::new(pool.clone()),
            deriver: PercentageDeriver::new(pool),
            validator: MatchValidator::new(),
        }
    }

    /// Add coach-entered deltas. Player deltas roll up into the team
    /// aggregate as well. Percentages are recomputed for every counter that
    /// was written, even when a later delta in the batch is rejected.
    pub async fn edit_stats(
        &self,
        principal: &Principal,
        match_id: Uuid,
        request: &StatEditRequest,
    ) -> Result<StatEditResponse, AppError> {
        self.validator.validate_stat_deltas(&request.deltas)?;

        let rugby_match = require_record(
            self.match_queries.get_match_with_clubs(match_id).await,
            "Match not found",
        )?;
        let side = rugby_match
            .inner
            .side_of(request.team_id)
            .ok_or_else(|| AppError::validation("Team does not play in this match"))?;
        authorize(principal, MatchAction::EditStats, &[rugby_match.club_of(side)])?;
        ensure_stats_editable(&rugby_match.inner)?;

        // Player rows go first so a rejected player correction leaves the
        // team aggregate untouched.
        let mut subjects = Vec::with_capacity(2);
        if let Some(player_id) = request.player_id {
            let missing = self
                .lineup_queries
                .missing_from_lineup(match_id, request.team_id, &[player_id])
                .await?;
            if !missing.is_empty() {
                return Err(AppError::validation("Player is not in the lineup of this team"));
            }
            subjects.push(StatSubject::player(match_id, request.team_id, player_id));
        }
        subjects.push(StatSubject::team(match_id, request.team_id));

        let mut response = StatEditResponse {
            counters: Vec::new(),
            percentages: Vec::new(),
        };
        for subject in &subjects {
            let batch = self.accumulator.accumulate(subject, &request.deltas).await;
            response
                .percentages
                .extend(self.deriver.recompute_affected(subject, &batch.applied_names()).await?);
            response.counters.extend(batch.into_result()?);
        }

        info!(
            "{} edited {} stats for team {} (player {:?}) in match {}",
            principal.username,
            request.deltas.len(),
            request.team_id,
            request.player_id,
            match_id
        );
        Ok(response)
    }

    pub async fn list_stats(&self, match_id: Uuid) -> Result<Vec<StatView>, AppError> {
        require_record(self.match_queries.get_match(match_id).await, "Match not found")?;
        Ok(self.stat_queries.list_for_match(match_id).await?)
    }
}
