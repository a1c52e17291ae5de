//! Prometheus metrics: HTTP traffic plus learner-facing events.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use uuid::Uuid;

pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[
                0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
            ],
        )?
        .install_recorder()?;

    Ok(handle)
}

/// Records request count, latency and in-flight requests.
///
/// Routes are labelled by their matched pattern when available, otherwise by
/// the normalized path.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| normalize_path(req.uri().path()), |p| p.as_str().to_string());

    gauge!("http_requests_in_flight", "method" => method.clone(), "path" => path.clone())
        .increment(1.0);

    let response = next.run(req).await;

    gauge!("http_requests_in_flight", "method" => method.clone(), "path" => path.clone())
        .decrement(1.0);

    let status = response.status().as_u16().to_string();
    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.clone()
    )
    .increment(1);
    histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());

    response
}

/// Replace IDs and numeric indices with placeholders to bound label
/// cardinality.
fn normalize_path(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                ":id"
            } else if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
                ":index"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (StatusCode::OK, handle.render())
}

pub fn record_auth_event(event_type: &'static str, success: bool) {
    let status = if success { "success" } else { "failure" };
    counter!("auth_events_total", "type" => event_type, "status" => status).increment(1);
}

pub fn record_submission(topic: &'static str, level: &'static str, correct: bool) {
    let result = if correct { "correct" } else { "incorrect" };
    counter!(
        "exercise_submissions_total",
        "topic" => topic,
        "level" => level,
        "result" => result
    )
    .increment(1);
}

/// Progression transitions: `select`, `complete`, `finish`, `reset`.
pub fn record_progression_event(event: &'static str, topic: &'static str) {
    counter!("progression_events_total", "event" => event, "topic" => topic).increment(1);
}

/// Counts responses that could not be persisted.
pub fn record_unpersisted(operation: &'static str) {
    counter!("progress_unpersisted_total", "operation" => operation).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path("/users/550e8400-e29b-41d4-a716-446655440000"),
            "/users/:id"
        );
        assert_eq!(
            normalize_path("/topics/css/advanced/exercises/3"),
            "/topics/css/advanced/exercises/:index"
        );
        assert_eq!(normalize_path("/progress/html/beginner"), "/progress/html/beginner");
        assert_eq!(normalize_path("/health"), "/health");
    }
}
