use axum::{Json, Router, extract::State, routing::get};
use cq_db::{models::UserProfile, repositories::user as user_repo};
use serde::{Deserialize, Serialize};

use crate::{
    ApiState,
    auth::{AuthUser, validation},
    error::ApiError,
    middleware::rate_limit,
};

pub fn routes() -> Router<ApiState> {
    use crate::make_rate_limit_layer;

    Router::new()
        .route("/users/me", get(get_me).patch(update_me))
        .layer(make_rate_limit_layer!(
            rate_limit::GENERAL_RATE_PER_SECOND,
            rate_limit::GENERAL_BURST_SIZE
        ))
}

/// The signed-in user's profile with their leaderboard position.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    #[serde(flatten)]
    pub profile: UserProfile,
    /// 1-based, ordered like `GET /leaderboard`.
    pub rank: i64,
}

/// Fields left out are unchanged. An empty `photo_url` clears the avatar.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.display_name.is_none() && self.photo_url.is_none() {
            return Err(ApiError::Validation("Nothing to update".to_string()));
        }

        if let Some(name) = &self.display_name {
            validation::validate_display_name(name)?;
        }
        if let Some(url) = &self.photo_url {
            validation::validate_photo_url(url)?;
        }

        Ok(())
    }
}

async fn get_me(
    auth_user: AuthUser,
    State(state): State<ApiState>,
) -> Result<Json<MeResponse>, ApiError> {
    let not_found = || ApiError::NotFound("User not found".to_string());

    let profile = user_repo::find_profile_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(not_found)?;
    let rank = user_repo::find_rank(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(MeResponse { profile, rank }))
}

async fn update_me(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    body.validate()?;

    let display_name = body.display_name.as_deref().map(str::trim);
    let user = user_repo::update_profile(
        &state.pool,
        auth_user.user_id,
        display_name,
        body.photo_url.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    tracing::info!(user_id = %user.id, "Profile updated");
    Ok(Json(user))
}
