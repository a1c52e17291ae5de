use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::{LeaderboardEntry, UserCredentials, UserProfile};

pub async fn find_profile_by_id<'e, E>(
    executor: E,
    user_id: Uuid,
) -> Result<Option<UserProfile>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, email, display_name, photo_url, points, created_at, updated_at
            FROM users
            WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await
}

pub async fn find_credentials_by_email<'e, E>(
    executor: E,
    email: &str,
) -> Result<Option<UserCredentials>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, email, password_hash
            FROM users
            WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(executor)
    .await
}

pub async fn email_exists<'e, E>(executor: E, email: &str) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
        "#,
    )
    .bind(email)
    .fetch_one(executor)
    .await
}

pub async fn create_user<'e, E>(
    executor: E,
    email: &str,
    display_name: &str,
    password_hash: &str,
) -> Result<UserProfile, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO users (id, email, display_name, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, display_name, photo_url, points, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(display_name)
    .bind(password_hash)
    .fetch_one(executor)
    .await
}

/// Update the provided profile fields, leaving `None` fields untouched.
/// An empty photo URL clears the avatar.
pub async fn update_profile<'e, E>(
    executor: E,
    user_id: Uuid,
    display_name: Option<&str>,
    photo_url: Option<&str>,
) -> Result<Option<UserProfile>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            UPDATE users
            SET display_name = COALESCE($2, display_name),
                photo_url = CASE WHEN $3::TEXT IS NULL THEN photo_url ELSE NULLIF($3, '') END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, display_name, photo_url, points, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(display_name)
    .bind(photo_url)
    .fetch_optional(executor)
    .await
}

pub async fn add_points<'e, E>(executor: E, user_id: Uuid, points: i64) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE users
            SET points = points + $2, updated_at = NOW()
            WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(points)
    .execute(executor)
    .await?;
    Ok(())
}

/// Take points back, never going below zero.
pub async fn remove_points<'e, E>(executor: E, user_id: Uuid, points: i64) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE users
            SET points = GREATEST(points - $2, 0), updated_at = NOW()
            WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(points)
    .execute(executor)
    .await?;
    Ok(())
}

/// 1-based leaderboard position of one user, `None` for an unknown id.
pub async fn find_rank<'e, E>(executor: E, user_id: Uuid) -> Result<Option<i64>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT rank
            FROM (
                SELECT id, ROW_NUMBER() OVER (ORDER BY points DESC, created_at ASC) AS rank
                FROM users
            ) ranked
            WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await
}

/// Users ordered by points, ties broken by the earliest account.
pub async fn leaderboard<'e, E>(executor: E, limit: i64) -> Result<Vec<LeaderboardEntry>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT ROW_NUMBER() OVER (ORDER BY points DESC, created_at ASC) AS rank,
                   id AS user_id, display_name, photo_url, points
            FROM users
            ORDER BY points DESC, created_at ASC
            LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(executor)
    .await
}
