use axum::http::StatusCode;
use cq_api::router;
use serde_json::{Value, json};

use crate::common::{TestClient, TestStateBuilder, db};

async fn database_client() -> (TestClient, sqlx::PgPool) {
    let state = TestStateBuilder::new()
        .build_with_database()
        .await
        .expect("Failed to set up test database");
    let pool = state.pool.clone();
    (TestClient::new(router::router().with_state(state)), pool)
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_register_creates_account_and_session() {
    let (client, pool) = database_client().await;
    let email = db::unique_email("register");

    let response = client
        .post_json(
            "/auth/register",
            &json!({ "email": email, "password": "password123", "display_name": "Ada" }),
        )
        .await;
    response.assert_status(StatusCode::CREATED);

    let user: Value = response.json();
    assert_eq!(user["email"], email.as_str());
    assert_eq!(user["display_name"], "Ada");
    assert_eq!(user["points"], 0);
    assert!(user.get("password_hash").is_none());

    let cookie = response
        .set_cookie("auth_token")
        .expect("register should start a session");

    let me = client.with_cookie(&cookie).get("/auth/me").await;
    me.assert_status(StatusCode::OK);
    let me: Value = me.json();
    assert_eq!(me["id"], user["id"]);

    db::delete_user_by_email(&pool, &email).await.unwrap();
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_register_defaults_display_name_and_normalizes_email() {
    let (client, pool) = database_client().await;
    let email = db::unique_email("mixedcase");

    let response = client
        .post_json(
            "/auth/register",
            &json!({ "email": email.to_uppercase(), "password": "password123" }),
        )
        .await;
    response.assert_status(StatusCode::CREATED);

    let user: Value = response.json();
    assert_eq!(user["email"], email.as_str());
    let local_part = email.split('@').next().unwrap();
    assert_eq!(user["display_name"], local_part);

    db::delete_user_by_email(&pool, &email).await.unwrap();
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_duplicate_registration_conflicts() {
    let (client, pool) = database_client().await;
    let email = db::unique_email("duplicate");
    let body = json!({ "email": email, "password": "password123" });

    client
        .post_json("/auth/register", &body)
        .await
        .assert_status(StatusCode::CREATED);

    let response = client.post_json("/auth/register", &body).await;
    response.assert_status(StatusCode::CONFLICT);

    db::delete_user_by_email(&pool, &email).await.unwrap();
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_login() {
    let (client, pool) = database_client().await;
    let email = db::unique_email("login");

    client
        .post_json(
            "/auth/register",
            &json!({ "email": email, "password": "password123" }),
        )
        .await
        .assert_status(StatusCode::CREATED);

    let response = client
        .post_json(
            "/auth/login",
            &json!({ "email": email, "password": "password124" }),
        )
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let wrong_password: Value = response.json();

    // Unknown accounts look exactly like wrong passwords
    let response = client
        .post_json(
            "/auth/login",
            &json!({ "email": db::unique_email("nobody"), "password": "password123" }),
        )
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let unknown: Value = response.json();
    assert_eq!(wrong_password, unknown);

    let response = client
        .post_json(
            "/auth/login",
            &json!({ "email": email, "password": "password123" }),
        )
        .await;
    response.assert_status(StatusCode::OK);
    assert!(response.set_cookie("auth_token").is_some());

    let user: Value = response.json();
    assert_eq!(user["email"], email.as_str());

    db::delete_user_by_email(&pool, &email).await.unwrap();
}
