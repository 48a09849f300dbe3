use sqlx::PgPool;
use tracing::{debug, warn};

use crate::db::StatQueries;
use crate::error::AppError;
use crate::models::stat::{Stat, StatCategory, StatDelta, StatSubject};

/// Outcome of one `accumulate` call.
#[derive(Debug, Default)]
pub struct StatBatch {
    pub counters: Vec<Stat>,
    /// Stat type names that were written, in request order.
    pub applied: Vec<String>,
    pub failure: Option<AppError>,
}

impl StatBatch {
    pub fn applied_names(&self) -> Vec<&str> {
        self.applied.iter().map(String::as_str).collect()
    }

    pub fn into_result(self) -> Result<Vec<Stat>, AppError> {
        match self.failure {
            Some(e) => Err(e),
            None => Ok(self.counters),
        }
    }
}

/// Adds named deltas to per-(match, team, player, stat type) counters.
#[derive(Debug, Clone)]
pub struct StatAccumulator {
    stat_queries: StatQueries,
}

impl StatAccumulator {
    pub fn new(pool: PgPool) -> Self {
        Self {
            stat_queries: StatQueries::new(pool),
        }
    }

    /// Apply each delta in order with its own statement. There is no
    /// surrounding transaction: if delta N fails, deltas before it stay applied
    /// and are reported in the returned batch next to the failure.
    pub async fn accumulate(&self, subject: &StatSubject, deltas: &[StatDelta]) -> StatBatch {
        let mut batch = StatBatch::default();

        for delta in deltas {
            match self.apply(subject, delta).await {
                Ok(stat) => {
                    batch.counters.push(stat);
                    batch.applied.push(delta.stat_type.trim().to_string());
                }
                Err(e) => {
                    if !batch.applied.is_empty() {
                        warn!(
                            "Stat batch for match {} team {} stopped after {} of {} deltas: {}",
                            subject.match_id,
                            subject.team_id,
                            batch.applied.len(),
                            deltas.len(),
                            e
                        );
                    }
                    batch.failure = Some(e);
                    break;
                }
            }
        }

        batch
    }

    async fn apply(&self, subject: &StatSubject, delta: &StatDelta) -> Result<Stat, AppError> {
        let name = delta.stat_type.trim();
        let stat_type = self
            .stat_queries
            .get_stat_type_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Unknown stat type: {}", name)))?;

        if stat_type.category == StatCategory::Percentage {
            return Err(AppError::validation(format!(
                "{} is derived and cannot be incremented",
                stat_type.name
            )));
        }

        let stat = self
            .stat_queries
            .increment(subject, stat_type.id, delta.value)
            .await?
            .ok_or_else(|| {
                AppError::validation(format!("Stat value cannot become negative ({})", stat_type.name))
            })?;

        debug!(
            "{} {:+} -> {} (match {}, team {}, player {:?})",
            stat_type.name, delta.value, stat.value, subject.match_id, subject.team_id, subject.player_id
        );
        Ok(stat)
    }
}
