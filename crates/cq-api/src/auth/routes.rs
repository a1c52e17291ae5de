use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use axum_extra::extract::PrivateCookieJar;
use cq_db::{models::UserProfile, repositories::user as user_repo};
use serde::Deserialize;
use serde_json::{Value, json};

use super::{cookies, jwt, middleware::AuthUser, service};
use crate::{ApiState, error::ApiError, metrics, middleware::rate_limit};

pub fn routes() -> Router<ApiState> {
    use crate::make_rate_limit_layer;

    // Credential checks get the strict limiter
    let credential_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .layer(make_rate_limit_layer!(
            rate_limit::AUTH_RATE_PER_SECOND,
            rate_limit::AUTH_BURST_SIZE
        ));

    let session_routes = Router::new()
        .route("/auth/me", get(auth_me))
        .route("/auth/logout", post(logout))
        .layer(make_rate_limit_layer!(
            rate_limit::GENERAL_RATE_PER_SECOND,
            rate_limit::GENERAL_BURST_SIZE
        ));

    Router::new().merge(credential_routes).merge(session_routes)
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

fn start_session(
    state: &ApiState,
    jar: PrivateCookieJar,
    user_id: uuid::Uuid,
    email: &str,
) -> Result<PrivateCookieJar, ApiError> {
    let token = jwt::generate_jwt_token(
        user_id,
        email,
        &state.auth.jwt_secret,
        state.auth.jwt_expiry_hours,
    )?;

    Ok(jar.add(cookies::create_auth_cookie(token, &state.auth)))
}

async fn register(
    State(state): State<ApiState>,
    jar: PrivateCookieJar,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, PrivateCookieJar, Json<UserProfile>), ApiError> {
    let result = service::register(
        &state.pool,
        &body.email,
        &body.password,
        body.display_name.as_deref(),
        state.bcrypt_cost,
    )
    .await;
    metrics::record_auth_event("register", result.is_ok());

    let user = result?;
    let jar = start_session(&state, jar, user.id, &user.email)?;

    Ok((StatusCode::CREATED, jar, Json(user)))
}

async fn login(
    State(state): State<ApiState>,
    jar: PrivateCookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(PrivateCookieJar, Json<UserProfile>), ApiError> {
    let result = service::login(&state.pool, &body.email, &body.password).await;
    metrics::record_auth_event("login", result.is_ok());

    let credentials = result?;
    let user = user_repo::find_profile_by_id(&state.pool, credentials.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    tracing::info!(user_id = %user.id, "User logged in");
    let jar = start_session(&state, jar, user.id, &user.email)?;

    Ok((jar, Json(user)))
}

async fn auth_me(
    auth_user: AuthUser,
    State(state): State<ApiState>,
) -> Result<Json<UserProfile>, ApiError> {
    let user = user_repo::find_profile_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| ApiError::Auth("User not found".to_string()))?;

    Ok(Json(user))
}

async fn logout(State(state): State<ApiState>, jar: PrivateCookieJar) -> (PrivateCookieJar, Json<Value>) {
    let jar = jar.remove(cookies::removal_cookie(&state.auth));

    (
        jar,
        Json(json!({ "message": "Logged out successfully" })),
    )
}
