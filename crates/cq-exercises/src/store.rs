//! Progress store adapter.
//!
//! Records are addressed by `(user, topic, level-index)`. Content is
//! overwritten on every save (last write wins); completion is sticky, so once
//! a record is completed it stays completed, with its points, until the level
//! is reset. The current-exercise pointer is a separate record per
//! `(user, topic, level)`.

use std::{
    collections::HashMap,
    future::Future,
    sync::{
        Arc, PoisonError, RwLock,
        atomic::{AtomicBool, Ordering},
    },
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::topic::{Level, LevelKey, ProgressKey, Topic};

/// One stored exercise attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseProgressRecord {
    pub user_id: Uuid,
    pub topic: Topic,
    pub level_key: LevelKey,
    /// Last submitted (or auto-saved) content.
    pub content: String,
    pub is_completed: bool,
    pub points: u32,
    pub last_modified: DateTime<Utc>,
    /// Set when the record is saved as completed.
    pub submitted_at: Option<DateTime<Utc>>,
}

impl ExerciseProgressRecord {
    pub const fn key(&self) -> ProgressKey {
        ProgressKey::new(self.user_id, self.topic, self.level_key)
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Progress store unavailable: {0}")]
    Unavailable(String),
    #[error("Progress store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl StoreError {
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}

/// Persistence seam for progression state.
///
/// Futures are `Send` so stores can be driven from a multi-threaded runtime.
pub trait ProgressStore: Send + Sync {
    /// Fetch one record, `None` when it was never saved.
    fn load_completion(
        &self,
        key: ProgressKey,
    ) -> impl Future<Output = Result<Option<ExerciseProgressRecord>, StoreError>> + Send;

    /// Save one record's content. `submitted_at` is stamped when the record
    /// becomes completed; a completed record keeps its flag, points and
    /// timestamp whatever `completed` says.
    ///
    /// Returns `true` only for the write that completed a record that was not
    /// completed before. Concurrent writers for the same key must agree on a
    /// single such write.
    fn save_completion(
        &self,
        key: ProgressKey,
        content: &str,
        completed: bool,
        points: u32,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Records of one (topic, level), ordered by index.
    fn list_level(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
    ) -> impl Future<Output = Result<Vec<ExerciseProgressRecord>, StoreError>> + Send;

    fn load_current_index(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
    ) -> impl Future<Output = Result<Option<usize>, StoreError>> + Send;

    fn save_current_index(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
        index: usize,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Every record of a user, across topics and levels.
    fn list_progress(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ExerciseProgressRecord>, StoreError>> + Send;

    /// Add `points` to the user's running total.
    fn award_points(
        &self,
        user_id: Uuid,
        points: u32,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Delete a level's records and its current-exercise pointer, and take
    /// back the points its completed records earned. Returns the points taken
    /// back.
    fn reset(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
    ) -> impl Future<Output = Result<u64, StoreError>> + Send;
}

impl<T: ProgressStore> ProgressStore for Arc<T> {
    fn load_completion(
        &self,
        key: ProgressKey,
    ) -> impl Future<Output = Result<Option<ExerciseProgressRecord>, StoreError>> + Send {
        (**self).load_completion(key)
    }

    fn save_completion(
        &self,
        key: ProgressKey,
        content: &str,
        completed: bool,
        points: u32,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send {
        (**self).save_completion(key, content, completed, points)
    }

    fn list_level(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
    ) -> impl Future<Output = Result<Vec<ExerciseProgressRecord>, StoreError>> + Send {
        (**self).list_level(user_id, topic, level)
    }

    fn load_current_index(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
    ) -> impl Future<Output = Result<Option<usize>, StoreError>> + Send {
        (**self).load_current_index(user_id, topic, level)
    }

    fn save_current_index(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
        index: usize,
    ) -> impl Future<Output = Result<(), StoreError>> + Send {
        (**self).save_current_index(user_id, topic, level, index)
    }

    fn list_progress(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ExerciseProgressRecord>, StoreError>> + Send {
        (**self).list_progress(user_id)
    }

    fn award_points(
        &self,
        user_id: Uuid,
        points: u32,
    ) -> impl Future<Output = Result<(), StoreError>> + Send {
        (**self).award_points(user_id, points)
    }

    fn reset(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
    ) -> impl Future<Output = Result<u64, StoreError>> + Send {
        (**self).reset(user_id, topic, level)
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    records: HashMap<ProgressKey, ExerciseProgressRecord>,
    current: HashMap<(Uuid, Topic, Level), usize>,
    points: HashMap<Uuid, u64>,
}

/// Process-local store used by tests and database-less development runs.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    state: RwLock<MemoryState>,
    unavailable: AtomicBool,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail with [`StoreError::Unavailable`] until
    /// switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Current point total of a user.
    pub fn points(&self, user_id: Uuid) -> u64 {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .points
            .get(&user_id)
            .copied()
            .unwrap_or_default()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store switched off".into()));
        }
        Ok(())
    }

    fn read<T>(&self, f: impl FnOnce(&MemoryState) -> T) -> Result<T, StoreError> {
        self.check_available()?;
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&state))
    }

    fn write<T>(&self, f: impl FnOnce(&mut MemoryState) -> T) -> Result<T, StoreError> {
        self.check_available()?;
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&mut state))
    }
}

impl ProgressStore for MemoryProgressStore {
    async fn load_completion(
        &self,
        key: ProgressKey,
    ) -> Result<Option<ExerciseProgressRecord>, StoreError> {
        self.read(|state| state.records.get(&key).cloned())
    }

    async fn save_completion(
        &self,
        key: ProgressKey,
        content: &str,
        completed: bool,
        points: u32,
    ) -> Result<bool, StoreError> {
        let now = Utc::now();
        let mut record = ExerciseProgressRecord {
            user_id: key.user_id,
            topic: key.topic,
            level_key: key.level_key,
            content: content.to_string(),
            is_completed: completed,
            points,
            last_modified: now,
            submitted_at: completed.then_some(now),
        };

        self.write(|state| {
            let previous = state.records.get(&key).filter(|record| record.is_completed);
            let newly_completed = completed && previous.is_none();
            if let Some(previous) = previous {
                record.is_completed = true;
                record.points = previous.points;
                record.submitted_at = previous.submitted_at;
            }
            state.records.insert(key, record);
            newly_completed
        })
    }

    async fn list_level(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
    ) -> Result<Vec<ExerciseProgressRecord>, StoreError> {
        self.read(|state| {
            let mut records: Vec<_> = state
                .records
                .values()
                .filter(|record| {
                    record.user_id == user_id
                        && record.topic == topic
                        && record.level_key.level == level
                })
                .cloned()
                .collect();
            records.sort_by_key(|record| record.level_key.index);
            records
        })
    }

    async fn load_current_index(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
    ) -> Result<Option<usize>, StoreError> {
        self.read(|state| state.current.get(&(user_id, topic, level)).copied())
    }

    async fn save_current_index(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
        index: usize,
    ) -> Result<(), StoreError> {
        self.write(|state| {
            state.current.insert((user_id, topic, level), index);
        })
    }

    async fn list_progress(&self, user_id: Uuid) -> Result<Vec<ExerciseProgressRecord>, StoreError> {
        self.read(|state| {
            let mut records: Vec<_> = state
                .records
                .values()
                .filter(|record| record.user_id == user_id)
                .cloned()
                .collect();
            records.sort_by_key(|record| (record.topic, record.level_key));
            records
        })
    }

    async fn award_points(&self, user_id: Uuid, points: u32) -> Result<(), StoreError> {
        self.write(|state| {
            *state.points.entry(user_id).or_default() += u64::from(points);
        })
    }

    async fn reset(&self, user_id: Uuid, topic: Topic, level: Level) -> Result<u64, StoreError> {
        self.write(|state| {
            let mut revoked = 0;
            state.records.retain(|key, record| {
                let in_level =
                    key.user_id == user_id && key.topic == topic && key.level_key.level == level;
                if in_level && record.is_completed {
                    revoked += u64::from(record.points);
                }
                !in_level
            });
            state.current.remove(&(user_id, topic, level));

            if let Some(total) = state.points.get_mut(&user_id) {
                *total = total.saturating_sub(revoked);
            }
            revoked
        })
    }
}
