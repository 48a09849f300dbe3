use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::db::helpers::{ensure_not_exists, require_record};
use crate::db::{ElectionQueries, LineupQueries, MatchQueries};
use crate::error::AppError;
use crate::matches::access::{authorize, MatchAction};
use crate::matches::lifecycle::ensure_election_open;
use crate::matches::validation::MatchValidator;
use crate::models::election::{Election, ElectionRequest, ElectionView};
use crate::models::user::Principal;

/// Best/worst player election, one per team per match.
#[derive(Debug, Clone)]
pub struct ElectionService {
    match_queries: MatchQueries,
    lineup_queries: LineupQueries,
    election_queries: ElectionQueries,
    validator: MatchValidator,
}

impl ElectionService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            match_queries: MatchQueries::new(pool.clone()),
            lineup_queries: LineupQueries::new(pool.clone()),
            election_queries: ElectionQueries::new(pool),
            validator: MatchValidator::new(),
        }
    }

    pub async fn elect(
        &self,
        principal: &Principal,
        match_id: Uuid,
        request: &ElectionRequest,
    ) -> Result<Vec<Election>, AppError> {
        self.validator.validate_election(request)?;

        let rugby_match = require_record(
            self.match_queries.get_match_with_clubs(match_id).await,
            "Match not found",
        )?;
        let side = rugby_match
            .inner
            .side_of(request.team_id)
            .ok_or_else(|| AppError::validation("Team does not play in this match"))?;
        authorize(principal, MatchAction::ElectPlayers, &[rugby_match.club_of(side)])?;
        ensure_election_open(&rugby_match.inner)?;

        let missing = self
            .lineup_queries
            .missing_from_lineup(
                match_id,
                request.team_id,
                &[request.best_player_id, request.worst_player_id],
            )
            .await?;
        if !missing.is_empty() {
            return Err(AppError::validation("Elected players must be in the team's lineup"));
        }

        ensure_not_exists(
            self.election_queries.exists_for_team(match_id, request.team_id).await,
            "Players have already been elected for this team",
        )?;

        let elections = self
            .election_queries
            .create_pair(
                match_id,
                request.team_id,
                request.best_player_id,
                request.worst_player_id,
                principal.user_id,
            )
            .await?;
        info!("{} elected players for team {} in match {}", principal.username, request.team_id, match_id);
        Ok(elections)
    }

    pub async fn election_view(&self, match_id: Uuid) -> Result<ElectionView, AppError> {
        require_record(self.match_queries.get_match(match_id).await, "Match not found")?;
        Ok(ElectionView {
            match_id,
            candidates: self.lineup_queries.list_for_match(match_id).await?,
            elections: self.election_queries.list_for_match(match_id).await?,
        })
    }
}
