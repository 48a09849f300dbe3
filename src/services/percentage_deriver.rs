use sqlx::PgPool;
use tracing::debug;

use crate::db::StatQueries;
use crate::error::AppError;
use crate::models::stat::{Stat, StatSubject};
use crate::stats::percentage::{affected_by, Derivation};

/// Recomputes percentage stats from the latest counter totals.
#[derive(Debug, Clone)]
pub struct PercentageDeriver {
    stat_queries: StatQueries,
}

impl PercentageDeriver {
    pub fn new(pool: PgPool) -> Self {
        Self {
            stat_queries: StatQueries::new(pool),
        }
    }

    /// Recompute every percentage that depends on one of `changed`.
    pub async fn recompute_affected(&self, subject: &StatSubject, changed: &[&str]) -> Result<Vec<Stat>, AppError> {
        let mut results = Vec::new();
        for derivation in affected_by(changed.iter().copied()) {
            results.push(self.recompute(subject, derivation).await?);
        }
        Ok(results)
    }

    async fn recompute(&self, subject: &StatSubject, derivation: &Derivation) -> Result<Stat, AppError> {
        let inputs: Vec<&str> = derivation.inputs().collect();
        let totals = self.stat_queries.totals(subject, &inputs).await?;
        let value = derivation.compute(&totals);

        let stat_type = self
            .stat_queries
            .get_stat_type_by_name(derivation.percentage)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Unknown stat type: {}", derivation.percentage)))?;

        debug!(
            "{} = {} (match {}, team {}, player {:?})",
            derivation.percentage, value, subject.match_id, subject.team_id, subject.player_id
        );
        Ok(self.stat_queries.set_value(subject, stat_type.id, value).await?)
    }
}
