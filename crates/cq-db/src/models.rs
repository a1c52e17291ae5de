use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public user profile
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    /// Unique user identifier
    pub id: Uuid,
    /// Login email (unique)
    pub email: String,
    /// Name shown on the leaderboard
    pub display_name: String,
    /// Avatar URL (https or data:image)
    pub photo_url: Option<String>,
    /// Running total of points earned from completed exercises
    pub points: i64,
    /// When the account was created
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated
    pub updated_at: DateTime<Utc>,
}

/// Login lookup result
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserCredentials {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

/// One leaderboard line, ranked by points
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: i64,
    pub user_id: Uuid,
    pub display_name: String,
    pub photo_url: Option<String>,
    pub points: i64,
}

/// Raw `exercise_progress` row; topic and level key are stored as text
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExerciseProgressRow {
    pub user_id: Uuid,
    pub topic: String,
    pub level_key: String,
    pub content: String,
    pub is_completed: bool,
    pub points: i64,
    pub last_modified: DateTime<Utc>,
    pub submitted_at: Option<DateTime<Utc>>,
}
