use axum::http::StatusCode;
use cq_api::{Environment, middleware::rate_limit, router};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::common::{TestClient, TestStateBuilder, session_token};

fn client() -> TestClient {
    let state = TestStateBuilder::new().build_in_memory();
    TestClient::new(router::router().with_state(state))
}

#[tokio::test]
async fn test_register_rejects_invalid_input_before_touching_the_database() {
    let client = client();

    let cases = [
        json!({ "email": "not-an-email", "password": "password123" }),
        json!({ "email": "", "password": "password123" }),
        json!({ "email": "learner@example.com", "password": "short1" }),
        json!({ "email": "learner@example.com", "password": "noDigitsHere" }),
        json!({
            "email": "learner@example.com",
            "password": "password123",
            "display_name": "<script>alert(1)</script>"
        }),
    ];

    for body in cases {
        let response = client.post_json("/auth/register", &body).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let error: Value = response.json();
        assert!(error["error"].is_string(), "{body}");
        assert!(response.set_cookie("auth_token").is_none());
    }
}

#[tokio::test]
async fn test_auth_routes_are_rate_limited_per_client() {
    let client = client();
    let body = json!({ "email": "bad", "password": "x" });

    for _ in 0..rate_limit::AUTH_BURST_SIZE {
        let response = client.post_json("/auth/register", &body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    let response = client.post_json("/auth/register", &body).await;
    response.assert_status(StatusCode::TOO_MANY_REQUESTS);

    // Another address has its own budget
    let response = client
        .from_ip("203.0.113.7")
        .post_json("/auth/register", &body)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_removes_the_session_cookie() {
    let state = TestStateBuilder::new().build_in_memory();
    let cookie_key = state.cookie_key.clone();
    let client = TestClient::new(router::router().with_state(state));
    let token = session_token(Uuid::new_v4(), "learner@example.com");

    let response = client
        .authenticated(&token, &cookie_key)
        .post("/auth/logout")
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["message"], "Logged out successfully");

    let removal = response
        .headers
        .get_all("set-cookie")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|cookie| cookie.starts_with("auth_token="))
        .expect("logout should clear the auth cookie");
    assert!(removal.contains("Max-Age=0") || removal.contains("Expires="));
}

#[tokio::test]
async fn test_tampered_and_expired_tokens_are_rejected() {
    let state = TestStateBuilder::new().build_in_memory();
    let cookie_key = state.cookie_key.clone();
    let client = TestClient::new(router::router().with_state(state));
    let user_id = Uuid::new_v4();

    let forged = cq_api::auth::jwt::generate_jwt_token(
        user_id,
        "learner@example.com",
        "some_other_secret_that_is_32_chars_long",
        24,
    )
    .unwrap();
    let response = client
        .authenticated(&forged, &cookie_key)
        .get("/progress/stats")
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let expired = cq_api::auth::jwt::generate_jwt_token(
        user_id,
        "learner@example.com",
        crate::common::JWT_SECRET,
        -2,
    )
    .unwrap();
    let response = client
        .authenticated(&expired, &cookie_key)
        .get("/progress/stats")
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_update_is_validated_before_the_database() {
    let state = TestStateBuilder::new().build_in_memory();
    let cookie_key = state.cookie_key.clone();
    let client = TestClient::new(router::router().with_state(state));
    let token = session_token(Uuid::new_v4(), "learner@example.com");
    let client = client.authenticated(&token, &cookie_key);

    for body in [
        json!({}),
        json!({ "display_name": "   " }),
        json!({ "photo_url": "javascript:alert(1)" }),
        json!({ "photo_url": "http://example.com/me.png" }),
    ] {
        let response = client.patch_json("/users/me", &body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_production_adds_hsts() {
    let builder = TestStateBuilder::new().with_environment(Environment::Production);
    let config = builder.config().clone();
    let app = router::app(builder.build_in_memory(), &config, None);

    let response = TestClient::new(app).get("/health").await;
    response.assert_status(StatusCode::OK);

    let hsts = response
        .headers
        .get("strict-transport-security")
        .expect("HSTS header in production");
    assert!(hsts.to_str().unwrap().starts_with("max-age="));
    assert_eq!(response.headers["referrer-policy"], "no-referrer");
}

#[tokio::test]
async fn test_errors_do_not_leak_internals() {
    let store = std::sync::Arc::new(cq_exercises::MemoryProgressStore::new());
    let state = TestStateBuilder::new()
        .with_store(std::sync::Arc::clone(&store))
        .build_in_memory();
    let cookie_key = state.cookie_key.clone();
    let client = TestClient::new(router::router().with_state(state));
    let token = session_token(Uuid::new_v4(), "learner@example.com");

    store.set_unavailable(true);
    let response = client
        .authenticated(&token, &cookie_key)
        .delete("/progress/css/advanced")
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["error"], "Internal server error");
}
