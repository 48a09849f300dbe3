use std::fmt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Platform-wide role. `Admin` bypasses club membership checks.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    User,
}

/// Function a user holds inside their club.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum UserJob {
    Coach,
    Admin,
    Staff,
    Player,
}

impl UserJob {
    /// Coaches and club administrators may write match data for their club.
    pub fn is_staff(&self) -> bool {
        matches!(self, UserJob::Coach | UserJob::Admin)
    }
}

/// The authenticated user a request acts on behalf of.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    pub user_id: Uuid,
    pub username: String,
    pub role: UserRole,
    pub job: UserJob,
    pub club_id: Option<Uuid>,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn belongs_to_club(&self, club_id: Uuid) -> bool {
        self.club_id == Some(club_id)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?}/{:?})", self.username, self.role, self.job)
    }
}
