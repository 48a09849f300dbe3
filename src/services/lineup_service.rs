use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::require_record;
use crate::db::{ClubQueries, LineupQueries, MatchQueries};
use crate::error::AppError;
use crate::matches::access::{authorize, MatchAction};
use crate::matches::lifecycle::ensure_lineup_editable;
use crate::matches::validation::MatchValidator;
use crate::models::common::TeamSide;
use crate::models::lineup::{LineupEntry, LineupView, SetLineupRequest};
use crate::models::user::Principal;

#[derive(Debug, Clone)]
pub struct LineupService {
    match_queries: MatchQueries,
    club_queries: ClubQueries,
    lineup_queries: LineupQueries,
    validator: MatchValidator,
}

impl LineupService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            match_queries: MatchQueries::new(pool.clone()),
            club_queries: ClubQueries::new(pool.clone()),
            lineup_queries: LineupQueries::new(pool),
            validator: MatchValidator::new(),
        }
    }

    pub async fn set_lineup(
        &self,
        principal: &Principal,
        match_id: Uuid,
        request: &SetLineupRequest,
    ) -> Result<Vec<LineupEntry>, AppError> {
        self.validator.validate_lineup(request)?;

        let rugby_match = require_record(
            self.match_queries.get_match_with_clubs(match_id).await,
            "Match not found",
        )?;
        let side = rugby_match
            .inner
            .side_of(request.team_id)
            .ok_or_else(|| AppError::validation("Team does not play in this match"))?;
        let club_id = rugby_match.club_of(side);
        authorize(principal, MatchAction::EditLineup, &[club_id])?;
        ensure_lineup_editable(&rugby_match.inner)?;

        let player_ids: Vec<Uuid> = request.players.iter().map(|slot| slot.player_id).collect();
        let outsiders = self.club_queries.players_outside_club(club_id, &player_ids).await?;
        if !outsiders.is_empty() {
            return Err(AppError::validation(format!(
                "Players do not belong to the team's club: {:?}",
                outsiders
            )));
        }

        Ok(self
            .lineup_queries
            .replace_lineup(match_id, request.team_id, &request.players)
            .await?)
    }

    pub async fn get_lineup(&self, match_id: Uuid) -> Result<LineupView, AppError> {
        let rugby_match = require_record(self.match_queries.get_match(match_id).await, "Match not found")?;
        let players = self.lineup_queries.list_for_match(match_id).await?;

        let (home, away): (Vec<_>, Vec<_>) = players
            .into_iter()
            .partition(|p| rugby_match.side_of(p.team_id) == Some(TeamSide::Home));

        Ok(LineupView {
            match_id,
            home_team_id: rugby_match.home_team_id,
            away_team_id: rugby_match.away_team_id,
            home,
            away,
        })
    }
}
