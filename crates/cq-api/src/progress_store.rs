//! Progress store wiring for the HTTP layer: a moka-backed cache in front of
//! any [`ProgressStore`], and the backend enum the application state holds.

use std::{sync::Arc, time::Duration};

use cq_db::PgProgressStore;
use cq_exercises::{
    ExerciseProgressRecord, Level, MemoryProgressStore, ProgressKey, ProgressStore, StoreError,
    Topic,
};
use moka::future::Cache;
use uuid::Uuid;

type LevelId = (Uuid, Topic, Level);

/// Read-through cache over another store, one entry per (user, topic, level).
///
/// Concurrent misses for the same level share one backend load. Writes go to
/// the backend and then drop the affected entry, so the next read reloads
/// what the backend actually stored. The cache is per process: run a single
/// instance, or set a short TTL, when another process may write the same
/// learner's progress. First-completion detection happens in the backend and
/// never depends on cached state.
#[derive(Clone)]
pub struct CachedProgressStore<S> {
    inner: S,
    levels: Cache<LevelId, Arc<Vec<ExerciseProgressRecord>>>,
    indices: Cache<LevelId, Option<usize>>,
}

impl<S> std::fmt::Debug for CachedProgressStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedProgressStore")
            .field("levels", &self.levels.entry_count())
            .field("indices", &self.indices.entry_count())
            .finish_non_exhaustive()
    }
}

/// Errors from a shared load are handed to every waiter.
fn unshare(err: Arc<StoreError>) -> StoreError {
    Arc::try_unwrap(err).unwrap_or_else(StoreError::backend)
}

impl<S: ProgressStore> CachedProgressStore<S> {
    pub fn new(inner: S, capacity: u64, ttl: Duration) -> Self {
        let levels = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();
        let indices = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();

        Self {
            inner,
            levels,
            indices,
        }
    }

    pub const fn inner(&self) -> &S {
        &self.inner
    }

    async fn level(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
    ) -> Result<Arc<Vec<ExerciseProgressRecord>>, StoreError> {
        self.levels
            .try_get_with((user_id, topic, level), async {
                tracing::trace!(user_id = %user_id, topic = %topic, level = %level, "Progress cache miss");
                self.inner.list_level(user_id, topic, level).await.map(Arc::new)
            })
            .await
            .map_err(unshare)
    }
}

impl<S: ProgressStore> ProgressStore for CachedProgressStore<S> {
    async fn load_completion(
        &self,
        key: ProgressKey,
    ) -> Result<Option<ExerciseProgressRecord>, StoreError> {
        let records = self
            .level(key.user_id, key.topic, key.level_key.level)
            .await?;

        Ok(records
            .iter()
            .find(|record| record.level_key == key.level_key)
            .cloned())
    }

    async fn save_completion(
        &self,
        key: ProgressKey,
        content: &str,
        completed: bool,
        points: u32,
    ) -> Result<bool, StoreError> {
        let result = self
            .inner
            .save_completion(key, content, completed, points)
            .await;

        self.levels
            .invalidate(&(key.user_id, key.topic, key.level_key.level))
            .await;
        result
    }

    async fn list_level(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
    ) -> Result<Vec<ExerciseProgressRecord>, StoreError> {
        let records = self.level(user_id, topic, level).await?;
        Ok(records.as_ref().clone())
    }

    async fn load_current_index(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
    ) -> Result<Option<usize>, StoreError> {
        self.indices
            .try_get_with(
                (user_id, topic, level),
                self.inner.load_current_index(user_id, topic, level),
            )
            .await
            .map_err(unshare)
    }

    async fn save_current_index(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
        index: usize,
    ) -> Result<(), StoreError> {
        let result = self
            .inner
            .save_current_index(user_id, topic, level, index)
            .await;

        self.indices.invalidate(&(user_id, topic, level)).await;
        result
    }

    async fn list_progress(&self, user_id: Uuid) -> Result<Vec<ExerciseProgressRecord>, StoreError> {
        self.inner.list_progress(user_id).await
    }

    async fn award_points(&self, user_id: Uuid, points: u32) -> Result<(), StoreError> {
        self.inner.award_points(user_id, points).await
    }

    async fn reset(&self, user_id: Uuid, topic: Topic, level: Level) -> Result<u64, StoreError> {
        let result = self.inner.reset(user_id, topic, level).await;

        // Dropped whether or not the backend delete went through.
        let id = (user_id, topic, level);
        self.levels.invalidate(&id).await;
        self.indices.invalidate(&id).await;

        result
    }
}

/// Progress store selected at startup.
#[derive(Debug, Clone)]
pub enum ProgressBackend {
    Postgres(CachedProgressStore<PgProgressStore>),
    Memory(Arc<MemoryProgressStore>),
}

impl ProgressBackend {
    pub fn postgres(store: PgProgressStore, capacity: u64, ttl: Duration) -> Self {
        Self::Postgres(CachedProgressStore::new(store, capacity, ttl))
    }

    pub fn memory() -> Self {
        Self::Memory(Arc::new(MemoryProgressStore::new()))
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

impl ProgressStore for ProgressBackend {
    async fn load_completion(
        &self,
        key: ProgressKey,
    ) -> Result<Option<ExerciseProgressRecord>, StoreError> {
        match self {
            Self::Postgres(store) => store.load_completion(key).await,
            Self::Memory(store) => store.load_completion(key).await,
        }
    }

    async fn save_completion(
        &self,
        key: ProgressKey,
        content: &str,
        completed: bool,
        points: u32,
    ) -> Result<bool, StoreError> {
        match self {
            Self::Postgres(store) => store.save_completion(key, content, completed, points).await,
            Self::Memory(store) => store.save_completion(key, content, completed, points).await,
        }
    }

    async fn list_level(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
    ) -> Result<Vec<ExerciseProgressRecord>, StoreError> {
        match self {
            Self::Postgres(store) => store.list_level(user_id, topic, level).await,
            Self::Memory(store) => store.list_level(user_id, topic, level).await,
        }
    }

    async fn load_current_index(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
    ) -> Result<Option<usize>, StoreError> {
        match self {
            Self::Postgres(store) => store.load_current_index(user_id, topic, level).await,
            Self::Memory(store) => store.load_current_index(user_id, topic, level).await,
        }
    }

    async fn save_current_index(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
        index: usize,
    ) -> Result<(), StoreError> {
        match self {
            Self::Postgres(store) => store.save_current_index(user_id, topic, level, index).await,
            Self::Memory(store) => store.save_current_index(user_id, topic, level, index).await,
        }
    }

    async fn list_progress(&self, user_id: Uuid) -> Result<Vec<ExerciseProgressRecord>, StoreError> {
        match self {
            Self::Postgres(store) => store.list_progress(user_id).await,
            Self::Memory(store) => store.list_progress(user_id).await,
        }
    }

    async fn award_points(&self, user_id: Uuid, points: u32) -> Result<(), StoreError> {
        match self {
            Self::Postgres(store) => store.award_points(user_id, points).await,
            Self::Memory(store) => store.award_points(user_id, points).await,
        }
    }

    async fn reset(&self, user_id: Uuid, topic: Topic, level: Level) -> Result<u64, StoreError> {
        match self {
            Self::Postgres(store) => store.reset(user_id, topic, level).await,
            Self::Memory(store) => store.reset(user_id, topic, level).await,
        }
    }
}
