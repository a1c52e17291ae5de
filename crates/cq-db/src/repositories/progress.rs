use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::ExerciseProgressRow;

pub async fn find_record<'e, E>(
    executor: E,
    user_id: Uuid,
    topic: &str,
    level_key: &str,
) -> Result<Option<ExerciseProgressRow>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT user_id, topic, level_key, content, is_completed, points, last_modified, submitted_at
            FROM exercise_progress
            WHERE user_id = $1 AND topic = $2 AND level_key = $3
        "#,
    )
    .bind(user_id)
    .bind(topic)
    .bind(level_key)
    .fetch_optional(executor)
    .await
}

/// Lock one record until the end of the transaction, creating an empty one
/// when missing, and return whether it is completed.
///
/// Concurrent callers for the same key queue on the row lock, so each sees
/// the completion flag left by the one before it.
pub async fn lock_record<'e, E>(
    executor: E,
    user_id: Uuid,
    topic: &str,
    level: &str,
    level_key: &str,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            INSERT INTO exercise_progress (user_id, topic, level, level_key)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, topic, level_key)
            DO UPDATE SET level = exercise_progress.level
            RETURNING is_completed
        "#,
    )
    .bind(user_id)
    .bind(topic)
    .bind(level)
    .bind(level_key)
    .fetch_one(executor)
    .await
}

/// Insert or update a record. Content always follows the latest save; a
/// completed record keeps its flag, points and `submitted_at`.
#[allow(clippy::too_many_arguments)]
pub async fn upsert_record<'e, E>(
    executor: E,
    user_id: Uuid,
    topic: &str,
    level: &str,
    level_key: &str,
    content: &str,
    is_completed: bool,
    points: i64,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            INSERT INTO exercise_progress (user_id, topic, level, level_key, content, is_completed, points, last_modified, submitted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), CASE WHEN $6 THEN NOW() END)
            ON CONFLICT (user_id, topic, level_key)
            DO UPDATE SET
                content = EXCLUDED.content,
                last_modified = EXCLUDED.last_modified,
                is_completed = exercise_progress.is_completed OR EXCLUDED.is_completed,
                points = CASE WHEN exercise_progress.is_completed
                    THEN exercise_progress.points ELSE EXCLUDED.points END,
                submitted_at = CASE WHEN exercise_progress.is_completed
                    THEN exercise_progress.submitted_at ELSE EXCLUDED.submitted_at END
        "#,
    )
    .bind(user_id)
    .bind(topic)
    .bind(level)
    .bind(level_key)
    .bind(content)
    .bind(is_completed)
    .bind(points)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn list_for_user<'e, E>(
    executor: E,
    user_id: Uuid,
) -> Result<Vec<ExerciseProgressRow>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT user_id, topic, level_key, content, is_completed, points, last_modified, submitted_at
            FROM exercise_progress
            WHERE user_id = $1
            ORDER BY topic, level_key
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}

pub async fn list_for_level<'e, E>(
    executor: E,
    user_id: Uuid,
    topic: &str,
    level: &str,
) -> Result<Vec<ExerciseProgressRow>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT user_id, topic, level_key, content, is_completed, points, last_modified, submitted_at
            FROM exercise_progress
            WHERE user_id = $1 AND topic = $2 AND level = $3
        "#,
    )
    .bind(user_id)
    .bind(topic)
    .bind(level)
    .fetch_all(executor)
    .await
}

/// Delete a level's records and return the points its completed records
/// carried.
pub async fn delete_level<'e, E>(
    executor: E,
    user_id: Uuid,
    topic: &str,
    level: &str,
) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            WITH deleted AS (
                DELETE FROM exercise_progress
                WHERE user_id = $1 AND topic = $2 AND level = $3
                RETURNING is_completed, points
            )
            SELECT COALESCE(SUM(points) FILTER (WHERE is_completed), 0)::BIGINT
            FROM deleted
        "#,
    )
    .bind(user_id)
    .bind(topic)
    .bind(level)
    .fetch_one(executor)
    .await
}

pub async fn find_current_index<'e, E>(
    executor: E,
    user_id: Uuid,
    topic: &str,
    level: &str,
) -> Result<Option<i32>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT current_index
            FROM exercise_position
            WHERE user_id = $1 AND topic = $2 AND level = $3
        "#,
    )
    .bind(user_id)
    .bind(topic)
    .bind(level)
    .fetch_optional(executor)
    .await
}

pub async fn upsert_current_index<'e, E>(
    executor: E,
    user_id: Uuid,
    topic: &str,
    level: &str,
    index: i32,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            INSERT INTO exercise_position (user_id, topic, level, current_index, updated_at)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (user_id, topic, level)
            DO UPDATE SET current_index = EXCLUDED.current_index, updated_at = NOW()
        "#,
    )
    .bind(user_id)
    .bind(topic)
    .bind(level)
    .bind(index)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn delete_current_index<'e, E>(
    executor: E,
    user_id: Uuid,
    topic: &str,
    level: &str,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM exercise_position
            WHERE user_id = $1 AND topic = $2 AND level = $3
        "#,
    )
    .bind(user_id)
    .bind(topic)
    .bind(level)
    .execute(executor)
    .await?;
    Ok(())
}
