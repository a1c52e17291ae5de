use axum::{Router, http::StatusCode, middleware, routing::get};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::{
    ApiConfig, auth, catalog, error::ApiError, leaderboard, metrics,
    middleware::{cors, request_id, security_headers},
    progress,
    state::ApiState,
    user,
};

/// All API routes, without cross-cutting layers.
pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .merge(auth::routes())
        .merge(user::routes())
        .merge(leaderboard::routes())
        .merge(catalog::routes())
        .merge(progress::routes())
        .fallback(handler_404)
}

/// The served application: routes, optional `/metrics`, and the middleware
/// stack (CORS, HTTP tracing, metrics, request IDs, security headers).
pub fn app(state: ApiState, config: &ApiConfig, metrics_handle: Option<PrometheusHandle>) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let mut app = router().with_state(state);

    if let Some(handle) = metrics_handle {
        let metrics_app = Router::new()
            .route("/metrics", get(metrics::metrics_handler))
            .with_state(handle);
        app = app.merge(metrics_app);
    }

    let app = app
        .layer(cors::create_cors_layer(&config.allowed_origins))
        .layer(trace_layer)
        .layer(middleware::from_fn(metrics::track_metrics))
        .layer(middleware::from_fn(request_id::request_id_middleware));

    security_headers::apply_security_headers(app, config.environment)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> ApiError {
    ApiError::NotFound("The requested resource was not found".to_string())
}
