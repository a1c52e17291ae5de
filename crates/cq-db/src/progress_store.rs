use cq_exercises::{ExerciseProgressRecord, Level, ProgressKey, ProgressStore, StoreError, Topic};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    models::ExerciseProgressRow,
    repositories::{progress as progress_repo, user as user_repo},
};

/// PostgreSQL-backed [`ProgressStore`].
#[derive(Debug, Clone)]
pub struct PgProgressStore {
    pool: PgPool,
}

impl PgProgressStore {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl TryFrom<ExerciseProgressRow> for ExerciseProgressRecord {
    type Error = StoreError;

    fn try_from(row: ExerciseProgressRow) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: row.user_id,
            topic: row.topic.parse().map_err(StoreError::backend)?,
            level_key: row.level_key.parse().map_err(StoreError::backend)?,
            content: row.content,
            is_completed: row.is_completed,
            points: u32::try_from(row.points).map_err(StoreError::backend)?,
            last_modified: row.last_modified,
            submitted_at: row.submitted_at,
        })
    }
}

impl ProgressStore for PgProgressStore {
    async fn load_completion(
        &self,
        key: ProgressKey,
    ) -> Result<Option<ExerciseProgressRecord>, StoreError> {
        let row = progress_repo::find_record(
            &self.pool,
            key.user_id,
            key.topic.as_str(),
            &key.level_key.to_string(),
        )
        .await
        .map_err(StoreError::backend)?;

        row.map(ExerciseProgressRecord::try_from).transpose()
    }

    async fn save_completion(
        &self,
        key: ProgressKey,
        content: &str,
        completed: bool,
        points: u32,
    ) -> Result<bool, StoreError> {
        let topic = key.topic.as_str();
        let level = key.level_key.level.as_str();
        let level_key = key.level_key.to_string();

        let mut tx = self.pool.begin().await.map_err(StoreError::backend)?;

        let was_completed =
            progress_repo::lock_record(&mut *tx, key.user_id, topic, level, &level_key)
                .await
                .map_err(StoreError::backend)?;
        progress_repo::upsert_record(
            &mut *tx,
            key.user_id,
            topic,
            level,
            &level_key,
            content,
            completed,
            i64::from(points),
        )
        .await
        .map_err(StoreError::backend)?;

        tx.commit().await.map_err(StoreError::backend)?;
        Ok(completed && !was_completed)
    }

    async fn list_level(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
    ) -> Result<Vec<ExerciseProgressRecord>, StoreError> {
        let mut records = progress_repo::list_for_level(
            &self.pool,
            user_id,
            topic.as_str(),
            level.as_str(),
        )
        .await
        .map_err(StoreError::backend)?
        .into_iter()
        .map(ExerciseProgressRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;

        // level_key sorts as text, so "beginner-10" would precede "beginner-2"
        records.sort_by_key(|record| record.level_key.index);
        Ok(records)
    }

    async fn load_current_index(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
    ) -> Result<Option<usize>, StoreError> {
        let index =
            progress_repo::find_current_index(&self.pool, user_id, topic.as_str(), level.as_str())
                .await
                .map_err(StoreError::backend)?;

        index
            .map(|index| usize::try_from(index).map_err(StoreError::backend))
            .transpose()
    }

    async fn save_current_index(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
        index: usize,
    ) -> Result<(), StoreError> {
        let index = i32::try_from(index).map_err(StoreError::backend)?;
        progress_repo::upsert_current_index(
            &self.pool,
            user_id,
            topic.as_str(),
            level.as_str(),
            index,
        )
        .await
        .map_err(StoreError::backend)
    }

    async fn list_progress(&self, user_id: Uuid) -> Result<Vec<ExerciseProgressRecord>, StoreError> {
        progress_repo::list_for_user(&self.pool, user_id)
            .await
            .map_err(StoreError::backend)?
            .into_iter()
            .map(ExerciseProgressRecord::try_from)
            .collect()
    }

    async fn award_points(&self, user_id: Uuid, points: u32) -> Result<(), StoreError> {
        user_repo::add_points(&self.pool, user_id, i64::from(points))
            .await
            .map_err(StoreError::backend)
    }

    async fn reset(&self, user_id: Uuid, topic: Topic, level: Level) -> Result<u64, StoreError> {
        let mut tx = self.pool.begin().await.map_err(StoreError::backend)?;

        let revoked =
            progress_repo::delete_level(&mut *tx, user_id, topic.as_str(), level.as_str())
                .await
                .map_err(StoreError::backend)?;
        progress_repo::delete_current_index(&mut *tx, user_id, topic.as_str(), level.as_str())
            .await
            .map_err(StoreError::backend)?;
        if revoked > 0 {
            user_repo::remove_points(&mut *tx, user_id, revoked)
                .await
                .map_err(StoreError::backend)?;
        }

        tx.commit().await.map_err(StoreError::backend)?;
        u64::try_from(revoked).map_err(StoreError::backend)
    }
}
