use std::collections::HashMap;

use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::stat::{Stat, StatSubject, StatType, StatView};

const STAT_COLUMNS: &str =
    "id, match_id, team_id, player_id, stat_type_id, value, created_at, updated_at";

// Must match the expression of idx_stats_unique_key.
const STAT_KEY_CONFLICT: &str = "ON CONFLICT (
    match_id,
    team_id,
    COALESCE(player_id, '00000000-0000-0000-0000-000000000000'::uuid),
    stat_type_id
)";

#[derive(Debug, Clone)]
pub struct StatQueries {
    pool: PgPool,
}

impl StatQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_stat_type_by_name(&self, name: &str) -> Result<Option<StatType>, sqlx::Error> {
        sqlx::query_as::<_, StatType>("SELECT id, name, category FROM stat_types WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
    }

    /// Add `delta` to the counter for `subject`, creating it on a positive
    /// delta. Returns `None` when the counter would drop below zero, which
    /// includes a negative delta on a counter that does not exist yet.
    pub async fn increment(
        &self,
        subject: &StatSubject,
        stat_type_id: Uuid,
        delta: i32,
    ) -> Result<Option<Stat>, sqlx::Error> {
        if delta < 0 {
            return self.decrement(subject, stat_type_id, delta).await;
        }

        let sql = format!(
            "INSERT INTO stats (id, match_id, team_id, player_id, stat_type_id, value)
             VALUES ($1, $2, $3, $4, $5, $6)
             {}
             DO UPDATE SET value = stats.value + EXCLUDED.value, updated_at = NOW()
             RETURNING {}",
            STAT_KEY_CONFLICT, STAT_COLUMNS
        );
        sqlx::query_as::<_, Stat>(&sql)
            .bind(Uuid::new_v4())
            .bind(subject.match_id)
            .bind(subject.team_id)
            .bind(subject.player_id)
            .bind(stat_type_id)
            .bind(delta)
            .fetch_optional(&self.pool)
            .await
    }

    // The CHECK on `value` is evaluated against the proposed INSERT row before
    // ON CONFLICT is resolved, so corrections go through a guarded UPDATE.
    async fn decrement(
        &self,
        subject: &StatSubject,
        stat_type_id: Uuid,
        delta: i32,
    ) -> Result<Option<Stat>, sqlx::Error> {
        let sql = format!(
            "UPDATE stats SET value = value + $5, updated_at = NOW()
             WHERE match_id = $1
               AND team_id = $2
               AND player_id IS NOT DISTINCT FROM $3
               AND stat_type_id = $4
               AND value + $5 >= 0
             RETURNING {}",
            STAT_COLUMNS
        );
        sqlx::query_as::<_, Stat>(&sql)
            .bind(subject.match_id)
            .bind(subject.team_id)
            .bind(subject.player_id)
            .bind(stat_type_id)
            .bind(delta)
            .fetch_optional(&self.pool)
            .await
    }

    /// Find-or-create the row for `subject` and overwrite its value.
    pub async fn set_value(
        &self,
        subject: &StatSubject,
        stat_type_id: Uuid,
        value: i32,
    ) -> Result<Stat, sqlx::Error> {
        let sql = format!(
            "INSERT INTO stats (id, match_id, team_id, player_id, stat_type_id, value)
             VALUES ($1, $2, $3, $4, $5, $6)
             {}
             DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
             RETURNING {}",
            STAT_KEY_CONFLICT, STAT_COLUMNS
        );
        sqlx::query_as::<_, Stat>(&sql)
            .bind(Uuid::new_v4())
            .bind(subject.match_id)
            .bind(subject.team_id)
            .bind(subject.player_id)
            .bind(stat_type_id)
            .bind(value)
            .fetch_one(&self.pool)
            .await
    }

    /// Current values of the named counters for `subject`. Counters that
    /// were never incremented are absent from the map.
    pub async fn totals(
        &self,
        subject: &StatSubject,
        names: &[&str],
    ) -> Result<HashMap<String, i32>, sqlx::Error> {
        let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        let rows = sqlx::query(
            r#"
            SELECT st.name, s.value
            FROM stats s
            JOIN stat_types st ON st.id = s.stat_type_id
            WHERE s.match_id = $1
              AND s.team_id = $2
              AND s.player_id IS NOT DISTINCT FROM $3
              AND st.name = ANY($4)
            "#,
        )
        .bind(subject.match_id)
        .bind(subject.team_id)
        .bind(subject.player_id)
        .bind(&names)
        .fetch_all(&self.pool)
        .await?;

        let mut totals = HashMap::with_capacity(rows.len());
        for row in rows {
            let name: String = row.try_get("name")?;
            let value: i32 = row.try_get("value")?;
            totals.insert(name, value);
        }
        Ok(totals)
    }

    pub async fn list_for_match(&self, match_id: Uuid) -> Result<Vec<StatView>, sqlx::Error> {
        sqlx::query_as::<_, StatView>(
            r#"
            SELECT s.team_id, s.player_id, st.name AS stat_name, st.category, s.value
            FROM stats s
            JOIN stat_types st ON st.id = s.stat_type_id
            WHERE s.match_id = $1
            ORDER BY s.team_id, s.player_id NULLS FIRST, st.name
            "#,
        )
        .bind(match_id)
        .fetch_all(&self.pool)
        .await
    }
}
