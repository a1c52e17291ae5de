use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
};
use cq_exercises::{CompletionStats, DraftSaved, ProgressionSnapshot, SubmissionOutcome};
use serde::Deserialize;

use crate::{
    ApiState, auth::AuthUser, catalog::SetPath, error::ApiError, metrics, middleware::rate_limit,
};

/// Submissions larger than this are rejected before judging.
pub const MAX_CONTENT_BYTES: usize = 64 * 1024;

pub fn routes() -> Router<ApiState> {
    use crate::make_rate_limit_layer;

    Router::new()
        .route("/progress/stats", get(stats))
        .route(
            "/progress/{topic}/{level}",
            get(snapshot).delete(reset),
        )
        .route("/progress/{topic}/{level}/select", post(select))
        .route("/progress/{topic}/{level}/submit", post(submit))
        .route("/progress/{topic}/{level}/draft", put(save_draft))
        .layer(make_rate_limit_layer!(
            rate_limit::GENERAL_RATE_PER_SECOND,
            rate_limit::GENERAL_BURST_SIZE
        ))
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct ContentRequest {
    pub content: String,
}

impl ContentRequest {
    fn checked(&self) -> Result<&str, ApiError> {
        if self.content.len() > MAX_CONTENT_BYTES {
            return Err(ApiError::Validation(format!(
                "Content must be at most {MAX_CONTENT_BYTES} bytes"
            )));
        }
        Ok(&self.content)
    }
}

async fn snapshot(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    path: SetPath,
) -> Result<Json<ProgressionSnapshot>, ApiError> {
    let snapshot = state
        .progression
        .load(auth_user.user_id, path.topic, path.level)
        .await?;

    Ok(Json(snapshot))
}

async fn select(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    path: SetPath,
    Json(body): Json<SelectRequest>,
) -> Result<Json<ProgressionSnapshot>, ApiError> {
    let snapshot = state
        .progression
        .select(auth_user.user_id, path.topic, path.level, body.index)
        .await?;
    metrics::record_progression_event("select", path.topic.as_str());

    Ok(Json(snapshot))
}

/// An incorrect answer is a normal outcome (`correct: false`), not an error.
async fn submit(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    path: SetPath,
    Json(body): Json<ContentRequest>,
) -> Result<Json<SubmissionOutcome>, ApiError> {
    let content = body.checked()?;
    let outcome = state
        .progression
        .submit(auth_user.user_id, path.topic, path.level, content)
        .await?;

    metrics::record_submission(path.topic.as_str(), path.level.as_str(), outcome.correct);
    if outcome.completed_index.is_some() {
        metrics::record_progression_event("complete", path.topic.as_str());
    }
    if outcome.correct && outcome.progress.finished {
        metrics::record_progression_event("finish", path.topic.as_str());
    }
    if !outcome.persisted {
        metrics::record_unpersisted("submit");
    }

    Ok(Json(outcome))
}

async fn save_draft(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    path: SetPath,
    Json(body): Json<ContentRequest>,
) -> Result<Json<DraftSaved>, ApiError> {
    let content = body.checked()?;
    let saved = state
        .progression
        .save_draft(auth_user.user_id, path.topic, path.level, content)
        .await?;

    if !saved.persisted {
        metrics::record_unpersisted("draft");
    }

    Ok(Json(saved))
}

async fn reset(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    path: SetPath,
) -> Result<StatusCode, ApiError> {
    state
        .progression
        .reset(auth_user.user_id, path.topic, path.level)
        .await?;
    metrics::record_progression_event("reset", path.topic.as_str());

    Ok(StatusCode::NO_CONTENT)
}

async fn stats(
    auth_user: AuthUser,
    State(state): State<ApiState>,
) -> Json<CompletionStats> {
    Json(state.progression.stats(auth_user.user_id).await)
}
