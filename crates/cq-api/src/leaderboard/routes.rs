use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use cq_db::{models::LeaderboardEntry, repositories::user as user_repo};
use serde::Deserialize;

use crate::{ApiState, error::ApiError};

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

pub fn routes() -> Router<ApiState> {
    Router::new().route("/leaderboard", get(leaderboard))
}

#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<i64>,
}

impl LeaderboardQuery {
    /// Requested size, clamped to `1..=MAX_LIMIT`.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }
}

async fn leaderboard(
    State(state): State<ApiState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let entries = user_repo::leaderboard(&state.pool, query.limit()).await?;
    Ok(Json(entries))
}
