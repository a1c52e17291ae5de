use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use cq_exercises::{RevealedSolution, catalog::TopicSummary};
use serde::Deserialize;

use super::model::{ExerciseView, SetPath, SetView};
use crate::{ApiState, auth::AuthUser, error::ApiError, metrics, middleware::rate_limit};

/// Catalog routes. Everything but solutions is public and read-only.
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/topics", get(list_topics))
        .route("/topics/{topic}/{level}/exercises", get(list_exercises))
        .route("/topics/{topic}/{level}/exercises/{index}", get(get_exercise))
        .merge(solution_routes())
}

fn solution_routes() -> Router<ApiState> {
    use crate::make_rate_limit_layer;

    Router::new()
        .route(
            "/topics/{topic}/{level}/exercises/{index}/solution",
            get(get_solution),
        )
        .layer(make_rate_limit_layer!(
            rate_limit::GENERAL_RATE_PER_SECOND,
            rate_limit::GENERAL_BURST_SIZE
        ))
}

#[derive(Debug, Default, Deserialize)]
pub struct SolutionQuery {
    /// Show the solution of an unlocked exercise that is not completed yet.
    #[serde(default)]
    pub reveal: bool,
}

async fn list_topics(State(state): State<ApiState>) -> Json<Vec<TopicSummary>> {
    Json(state.catalog().topics())
}

async fn list_exercises(
    State(state): State<ApiState>,
    path: SetPath,
) -> Result<Json<SetView>, ApiError> {
    let set = state.catalog().set(path.topic, path.level)?;
    Ok(Json(SetView::from(set)))
}

async fn get_exercise(
    State(state): State<ApiState>,
    Path((topic, level, index)): Path<(String, String, usize)>,
) -> Result<Json<ExerciseView>, ApiError> {
    let path = SetPath::parse(&topic, &level)?;
    let exercise = state.catalog().set(path.topic, path.level)?.get(index)?;
    Ok(Json(ExerciseView::from(exercise)))
}

async fn get_solution(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Path((topic, level, index)): Path<(String, String, usize)>,
    Query(query): Query<SolutionQuery>,
) -> Result<Json<RevealedSolution>, ApiError> {
    let path = SetPath::parse(&topic, &level)?;
    let solution = state
        .progression
        .solution(auth_user.user_id, path.topic, path.level, index, query.reveal)
        .await?;

    if query.reveal {
        metrics::record_progression_event("reveal", path.topic.as_str());
    }
    Ok(Json(solution))
}
