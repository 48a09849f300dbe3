use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A team is owned by exactly one club; players are registered with the club.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Team {
    pub id: Uuid,
    pub club_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
