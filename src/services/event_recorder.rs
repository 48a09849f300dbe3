use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::event_queries::NewMatchEvent;
use crate::db::helpers::{require_record, require_transition};
use crate::db::{EventQueries, LineupQueries, MatchQueries};
use crate::error::AppError;
use crate::matches::access::{authorize, MatchAction};
use crate::matches::lifecycle::ensure_live;
use crate::matches::validation::MatchValidator;
use crate::models::match_event::{CreateMatchEventRequest, MatchEventView, RecordedEvent};
use crate::models::stat::{StatDelta, StatSubject};
use crate::models::user::Principal;
use crate::services::percentage_deriver::PercentageDeriver;
use crate::services::stat_accumulator::StatAccumulator;
use crate::stats::scoring::{points_for, stat_deltas_for};

/// Records live match events and fans them out into score and stat updates.
#[derive(Debug, Clone)]
pub struct EventRecorder {
    match_queries: MatchQueries,
    event_queries: EventQueries,
    lineup_queries: LineupQueries,
    accumulator: StatAccumulator,
    deriver: PercentageDeriver,
    validator: MatchValidator,
}

impl EventRecorder {
    pub fn new(pool: PgPool) -> Self {
        Self {
            match_queries: MatchQueries::new(pool.clone()),
            event_queries: EventQueries::new(pool.clone()),
            lineup_queries: LineupQueries::new(pool.clone()),
            accumulator: StatAccumulator::new(pool.clone()),
            deriver: PercentageDeriver::new(pool),
            validator: MatchValidator::new(),
        }
    }

    pub async fn record_event(
        &self,
        principal: &Principal,
        match_id: Uuid,
        request: &CreateMatchEventRequest,
    ) -> Result<RecordedEvent, AppError> {
        let kind = self.validator.validate_event(request)?;

        let rugby_match = require_record(
            self.match_queries.get_match_with_clubs(match_id).await,
            "Match not found",
        )?;
        authorize(principal, MatchAction::RecordEvent, &rugby_match.club_ids())?;
        ensure_live(&rugby_match.inner)?;

        let team_id = rugby_match.inner.team_id(request.team_side);
        let named_players: Vec<Uuid> = request
            .main_player_id
            .into_iter()
            .chain(request.second_player_id)
            .collect();
        if !named_players.is_empty() {
            let missing = self
                .lineup_queries
                .missing_from_lineup(match_id, team_id, &named_players)
                .await?;
            if !missing.is_empty() {
                return Err(AppError::validation(format!(
                    "Players not in the {} lineup: {:?}",
                    request.team_side, missing
                )));
            }
        }

        let event_type = require_record(
            self.event_queries.get_event_type_by_code(kind.code()).await,
            "Event type is not configured",
        )?;

        let event = self
            .event_queries
            .insert_event(&NewMatchEvent {
                match_id,
                event_type_id: event_type.id,
                team_id,
                minute: request.minute,
                main_player_id: request.main_player_id,
                second_player_id: request.second_player_id,
                description: self.validator.sanitize_description(request.description.as_deref()),
                created_by: principal.user_id,
            })
            .await?;

        let points = points_for(kind);
        let current = if points > 0 {
            require_transition(
                self.match_queries
                    .add_points(match_id, request.team_side, points)
                    .await,
                "Match is no longer live",
            )?
        } else {
            rugby_match.inner.clone()
        };

        let deltas = stat_deltas_for(kind);
        self.apply_stats(StatSubject::team(match_id, team_id), &deltas).await?;
        if let (Some(player_id), false) = (request.main_player_id, kind.is_substitution()) {
            self.apply_stats(StatSubject::player(match_id, team_id, player_id), &deltas)
                .await?;
        }

        info!(
            "Recorded {} at {}' for {} in match {} ({} - {})",
            kind, request.minute, request.team_side, match_id, current.home_score, current.away_score
        );

        Ok(RecordedEvent {
            event,
            kind,
            points_awarded: points,
            home_score: current.home_score,
            away_score: current.away_score,
        })
    }

    pub async fn list_events(&self, match_id: Uuid) -> Result<Vec<MatchEventView>, AppError> {
        require_record(self.match_queries.get_match(match_id).await, "Match not found")?;
        Ok(self.event_queries.list_events(match_id).await?)
    }

    async fn apply_stats(&self, subject: StatSubject, deltas: &[StatDelta]) -> Result<(), AppError> {
        let batch = self.accumulator.accumulate(&subject, deltas).await;
        self.deriver
            .recompute_affected(&subject, &batch.applied_names())
            .await?;

        // The event row is already stored; a failing stat write is surfaced
        // but does not roll the event back.
        if let Some(e) = batch.failure {
            warn!("Event stored but stats for {:?} were not fully applied: {}", subject, e);
            return Err(e);
        }
        Ok(())
    }
}
