use axum::http::StatusCode;
use cq_api::router;
use serde_json::Value;

use crate::common::{TestClient, TestStateBuilder};

fn client() -> TestClient {
    let state = TestStateBuilder::new().build_in_memory();
    TestClient::new(router::router().with_state(state))
}

#[tokio::test]
async fn test_health() {
    let response = client().get("/health").await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_topics_are_listed_in_order() {
    let response = client().get("/topics").await;
    response.assert_status(StatusCode::OK);

    let topics: Vec<Value> = response.json();
    let names: Vec<&str> = topics
        .iter()
        .filter_map(|topic| topic["topic"].as_str())
        .collect();
    assert_eq!(
        names,
        ["html", "css", "bootstrap", "tailwind", "javascript", "php"]
    );

    let css_levels: Vec<&str> = topics[1]["levels"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|level| level["level"].as_str())
        .collect();
    assert_eq!(css_levels, ["intermediate", "advanced"]);
}

#[tokio::test]
async fn test_list_exercises() {
    let response = client().get("/topics/bootstrap/beginner/exercises").await;
    response.assert_status(StatusCode::OK);

    let set: Value = response.json();
    assert_eq!(set["topic"], "bootstrap");
    assert_eq!(set["level"], "beginner");
    assert_eq!(set["total_points"], 40);

    let exercises = set["exercises"].as_array().unwrap();
    assert_eq!(exercises.len(), 4);
    assert_eq!(exercises[0]["index"], 0);
    assert_eq!(exercises[0]["title"], "Bootstrap Grid System");
    assert_eq!(exercises[0]["kind"], "coding");
}

#[tokio::test]
async fn test_path_segments_are_case_insensitive() {
    let response = client().get("/topics/HTML/Beginner/exercises").await;
    response.assert_status(StatusCode::OK);

    let set: Value = response.json();
    assert_eq!(set["exercises"][0]["kind"], "multiple_choice");
}

#[tokio::test]
async fn test_exercise_view_hides_the_answer() {
    let response = client().get("/topics/html/beginner/exercises/0").await;
    response.assert_status(StatusCode::OK);

    let exercise: Value = response.json();
    assert_eq!(exercise["type"], "multiple_choice");
    assert_eq!(exercise["title"], "HTML Document Type");
    assert_eq!(exercise["options"].as_array().unwrap().len(), 3);
    assert!(exercise.get("answer").is_none());
    assert!(exercise.get("explanation").is_none());

    let response = client().get("/topics/css/advanced/exercises/1").await;
    response.assert_status(StatusCode::OK);

    let exercise: Value = response.json();
    assert_eq!(exercise["type"], "coding");
    assert!(exercise["starter"].is_string());
    assert!(exercise.get("solution").is_none());
}

#[tokio::test]
async fn test_unknown_sets_are_not_found() {
    let client = client();

    for uri in [
        "/topics/cobol/beginner/exercises",
        "/topics/css/expert/exercises",
        // CSS starts at intermediate
        "/topics/css/beginner/exercises",
        "/topics/javascript/advanced/exercises/5",
    ] {
        let response = client.get(uri).await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert!(body["error"].is_string(), "{uri}: {body}");
    }
}

#[tokio::test]
async fn test_fallback_returns_json_not_found() {
    let response = client().get("/no/such/route").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "The requested resource was not found");
}

#[tokio::test]
async fn test_app_adds_request_id_and_security_headers() {
    let builder = TestStateBuilder::new();
    let config = builder.config().clone();
    let app = router::app(builder.build_in_memory(), &config, None);
    let client = TestClient::new(app);

    let response = client.get("/health").await;
    response.assert_status(StatusCode::OK);

    assert!(response.headers.contains_key("x-request-id"));
    assert_eq!(response.headers["x-content-type-options"], "nosniff");
    assert_eq!(response.headers["x-frame-options"], "DENY");
    // Development builds skip HSTS
    assert!(!response.headers.contains_key("strict-transport-security"));
}
