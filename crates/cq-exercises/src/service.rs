//! Progression service: the state machine driven against a progress store.
//!
//! State is rebuilt from the store on every call; the service keeps nothing
//! between calls. Whether a completion is the first one (and so earns points)
//! is decided by the store's write, not by the state read before it. Store
//! reads degrade to "no progress" and store writes are logged and skipped;
//! neither is surfaced as an error, except for an explicit reset.

use std::{collections::BTreeMap, sync::Arc};

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::{
    catalog::{Catalog, ExerciseSet},
    error::ProgressionError,
    progression::{ExerciseStatus, Progression},
    store::{ExerciseProgressRecord, ProgressStore},
    topic::{Level, LevelKey, ProgressKey, Topic, current_index_path},
};

/// What a learner sees for one (topic, level).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressionSnapshot {
    pub topic: Topic,
    pub level: Level,
    pub active_index: usize,
    pub completed: Vec<usize>,
    pub statuses: Vec<ExerciseStatus>,
    pub finished: bool,
    /// Last saved content of the active exercise, for restoring the editor.
    pub saved_content: Option<String>,
}

/// Result of judging a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionOutcome {
    pub correct: bool,
    /// Labels of the checks the submission failed.
    pub missing: Vec<&'static str>,
    pub completed_index: Option<usize>,
    /// Zero unless this submission recorded the first completion of the
    /// exercise.
    pub points_awarded: u32,
    /// Why the chosen option is right, for a correct multiple-choice answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<&'static str>,
    /// `false` when a store write failed and the result lives only in this
    /// response.
    pub persisted: bool,
    pub progress: ProgressionSnapshot,
}

/// Reference answer of one exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevealedSolution {
    pub index: usize,
    pub solution: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DraftSaved {
    pub index: usize,
    pub persisted: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TopicStats {
    pub completed: usize,
    pub total: usize,
}

/// Aggregate progress of one user across the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompletionStats {
    pub total_completed: usize,
    pub total_points: u64,
    pub by_topic: BTreeMap<Topic, TopicStats>,
}

struct Restored {
    progression: Progression,
    records: Vec<Option<ExerciseProgressRecord>>,
}

impl Restored {
    fn snapshot(&self, set: &ExerciseSet) -> ProgressionSnapshot {
        let active = self.progression.active_index();
        ProgressionSnapshot {
            topic: set.topic,
            level: set.level,
            active_index: active,
            completed: self.progression.completed().iter().copied().collect(),
            statuses: self.progression.statuses(),
            finished: self.progression.is_finished(),
            saved_content: self
                .records
                .get(active)
                .and_then(Option::as_ref)
                .map(|record| record.content.clone()),
        }
    }
}

#[derive(Debug)]
pub struct ProgressionService<S> {
    store: S,
    catalog: Arc<Catalog>,
}

impl<S: ProgressStore> ProgressionService<S> {
    pub const fn new(store: S, catalog: Arc<Catalog>) -> Self {
        Self { store, catalog }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current state for a (topic, level). Only an unknown pair is an error.
    pub async fn load(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
    ) -> Result<ProgressionSnapshot, ProgressionError> {
        let set = self.catalog.set(topic, level)?;
        let restored = self.restore(user_id, set).await;
        Ok(restored.snapshot(set))
    }

    /// Make `index` the active exercise. Locked and out-of-range indices are
    /// rejected with no side effect.
    pub async fn select(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
        index: usize,
    ) -> Result<ProgressionSnapshot, ProgressionError> {
        let set = self.catalog.set(topic, level)?;
        let mut restored = self.restore(user_id, set).await;

        restored.progression.select(index)?;
        self.persist_index(user_id, topic, level, index).await;

        Ok(restored.snapshot(set))
    }

    /// Judge `content` against the active exercise and advance on success.
    pub async fn submit(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
        content: &str,
    ) -> Result<SubmissionOutcome, ProgressionError> {
        let set = self.catalog.set(topic, level)?;
        let mut restored = self.restore(user_id, set).await;
        let index = restored.progression.active_index();
        let exercise = set.get(index)?;

        let evaluation = exercise.evaluate(content);
        if !evaluation.passed {
            debug!(
                user_id = %user_id,
                topic = %topic,
                level = %level,
                index,
                missing = ?evaluation.missing,
                "Submission incorrect"
            );
            return Ok(SubmissionOutcome {
                correct: false,
                missing: evaluation.missing,
                completed_index: None,
                points_awarded: 0,
                explanation: None,
                persisted: true,
                progress: restored.snapshot(set),
            });
        }

        let advance = restored.progression.complete_active();
        let key = ProgressKey::new(user_id, topic, LevelKey::new(level, index));

        let (first_completion, mut persisted) = match self
            .store
            .save_completion(key, content, true, exercise.points)
            .await
        {
            Ok(first) => (first, true),
            Err(e) => {
                error!(path = %key.path(), error = %e, "Failed to save completion, awarding nothing");
                (false, false)
            }
        };
        if persisted && advance.newly_completed && !first_completion {
            debug!(path = %key.path(), "Completion was already recorded by another request");
        }

        let points_awarded = if first_completion {
            match self.store.award_points(user_id, exercise.points).await {
                Ok(()) => exercise.points,
                Err(e) => {
                    error!(user_id = %user_id, points = exercise.points, error = %e, "Failed to award points");
                    persisted = false;
                    0
                }
            }
        } else {
            0
        };

        if let Some(next) = advance.advanced_to {
            persisted &= self.persist_index(user_id, topic, level, next).await;
        }

        info!(
            user_id = %user_id,
            topic = %topic,
            level = %level,
            index,
            points_awarded,
            finished = restored.progression.is_finished(),
            "Exercise completed"
        );

        if let Some(slot) = restored.records.get_mut(index) {
            let now = Utc::now();
            *slot = Some(ExerciseProgressRecord {
                user_id,
                topic,
                level_key: key.level_key,
                content: content.to_string(),
                is_completed: true,
                points: exercise.points,
                last_modified: now,
                submitted_at: Some(now),
            });
        }

        Ok(SubmissionOutcome {
            correct: true,
            missing: Vec::new(),
            completed_index: Some(index),
            points_awarded,
            explanation: exercise.explanation(),
            persisted,
            progress: restored.snapshot(set),
        })
    }

    /// Auto-save the active exercise's content without judging it.
    ///
    /// The stored completion flag and points are carried forward so a draft
    /// never un-completes an exercise.
    pub async fn save_draft(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
        content: &str,
    ) -> Result<DraftSaved, ProgressionError> {
        let set = self.catalog.set(topic, level)?;
        let restored = self.restore(user_id, set).await;
        let index = restored.progression.active_index();
        let key = ProgressKey::new(user_id, topic, LevelKey::new(level, index));

        let (completed, points) = restored
            .records
            .get(index)
            .and_then(Option::as_ref)
            .map_or((false, 0), |record| (record.is_completed, record.points));

        let persisted = self.persist_completion(key, content, completed, points).await;
        Ok(DraftSaved { index, persisted })
    }

    /// Forget all progress of a (topic, level). Store failures are reported.
    pub async fn reset(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
    ) -> Result<(), ProgressionError> {
        self.catalog.set(topic, level)?;

        let revoked = self.store.reset(user_id, topic, level).await.map_err(|e| {
            error!(user_id = %user_id, topic = %topic, level = %level, error = %e, "Failed to reset progress");
            ProgressionError::Store(e.to_string())
        })?;

        info!(user_id = %user_id, topic = %topic, level = %level, points_revoked = revoked, "Progress reset");
        Ok(())
    }

    /// Reference answer of the exercise at `index`.
    ///
    /// Served once the exercise is completed, or for an unlocked exercise
    /// when the learner explicitly asks to `reveal` it. Locked exercises
    /// never show their answer.
    pub async fn solution(
        &self,
        user_id: Uuid,
        topic: Topic,
        level: Level,
        index: usize,
        reveal: bool,
    ) -> Result<RevealedSolution, ProgressionError> {
        let set = self.catalog.set(topic, level)?;
        let exercise = set.get(index)?;
        let restored = self.restore(user_id, set).await;

        if !restored.progression.can_access(index) {
            return Err(ProgressionError::Locked(index));
        }
        if !reveal && !restored.progression.is_completed(index) {
            return Err(ProgressionError::SolutionHidden(index));
        }

        debug!(user_id = %user_id, topic = %topic, level = %level, index, reveal, "Solution served");
        Ok(RevealedSolution {
            index,
            solution: exercise.solution(),
            explanation: exercise.explanation(),
        })
    }

    /// Completion counts per topic. Falls back to empty progress when the
    /// store cannot be read.
    pub async fn stats(&self, user_id: Uuid) -> CompletionStats {
        let records = self.store.list_progress(user_id).await.unwrap_or_else(|e| {
            warn!(user_id = %user_id, error = %e, "Failed to list progress, reporting none");
            Vec::new()
        });

        let mut stats = CompletionStats::default();
        for set in self.catalog.sets() {
            stats.by_topic.entry(set.topic).or_default().total += set.len();
        }

        for record in records.iter().filter(|record| record.is_completed) {
            let in_catalog = self
                .catalog
                .set(record.topic, record.level_key.level)
                .is_ok_and(|set| record.level_key.index < set.len());
            if !in_catalog {
                continue;
            }

            stats.total_completed += 1;
            stats.total_points += u64::from(record.points);
            stats.by_topic.entry(record.topic).or_default().completed += 1;
        }

        stats
    }

    async fn restore(&self, user_id: Uuid, set: &ExerciseSet) -> Restored {
        let mut records = vec![None; set.len()];

        match self.store.list_level(user_id, set.topic, set.level).await {
            Ok(stored) => {
                for record in stored {
                    if let Some(slot) = records.get_mut(record.level_key.index) {
                        *slot = Some(record);
                    }
                }
            }
            Err(e) => warn!(
                user_id = %user_id,
                topic = %set.topic,
                level = %set.level,
                error = %e,
                "Failed to load progress, treating the level as not started"
            ),
        }

        let persisted_index = match self
            .store
            .load_current_index(user_id, set.topic, set.level)
            .await
        {
            Ok(index) => index,
            Err(e) => {
                warn!(
                    path = %current_index_path(user_id, set.topic, set.level),
                    error = %e,
                    "Failed to load current exercise, starting from the first incomplete one"
                );
                None
            }
        };

        let completed = records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.as_ref().is_some_and(|r| r.is_completed))
            .map(|(index, _)| index);

        let progression = Progression::restore(set.len(), completed, persisted_index);
        if persisted_index.is_some_and(|index| index != progression.active_index()) {
            debug!(
                user_id = %user_id,
                stored = ?persisted_index,
                repaired = progression.active_index(),
                "Repaired stored exercise index"
            );
        }

        Restored {
            progression,
            records,
        }
    }

    async fn persist_completion(
        &self,
        key: ProgressKey,
        content: &str,
        completed: bool,
        points: u32,
    ) -> bool {
        match self.store.save_completion(key, content, completed, points).await {
            Ok(_) => true,
            Err(e) => {
                error!(path = %key.path(), completed, error = %e, "Failed to save progress");
                false
            }
        }
    }

    async fn persist_index(&self, user_id: Uuid, topic: Topic, level: Level, index: usize) -> bool {
        match self
            .store
            .save_current_index(user_id, topic, level, index)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                error!(
                    path = %current_index_path(user_id, topic, level),
                    index,
                    error = %e,
                    "Failed to save current exercise"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use super::*;
    use crate::store::{MemoryProgressStore, StoreError};

    /// Memory store that yields before every read, so concurrent calls
    /// interleave, and that can refuse completion writes.
    #[derive(Debug, Default)]
    struct FlakyStore {
        inner: MemoryProgressStore,
        fail_saves: AtomicBool,
        level_loads: AtomicUsize,
        record_loads: AtomicUsize,
    }

    impl ProgressStore for FlakyStore {
        async fn load_completion(
            &self,
            key: ProgressKey,
        ) -> Result<Option<ExerciseProgressRecord>, StoreError> {
            self.record_loads.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            self.inner.load_completion(key).await
        }

        async fn save_completion(
            &self,
            key: ProgressKey,
            content: &str,
            completed: bool,
            points: u32,
        ) -> Result<bool, StoreError> {
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(StoreError::Unavailable("saves switched off".into()));
            }
            self.inner.save_completion(key, content, completed, points).await
        }

        async fn list_level(
            &self,
            user_id: Uuid,
            topic: Topic,
            level: Level,
        ) -> Result<Vec<ExerciseProgressRecord>, StoreError> {
            self.level_loads.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            self.inner.list_level(user_id, topic, level).await
        }

        async fn load_current_index(
            &self,
            user_id: Uuid,
            topic: Topic,
            level: Level,
        ) -> Result<Option<usize>, StoreError> {
            tokio::task::yield_now().await;
            self.inner.load_current_index(user_id, topic, level).await
        }

        async fn save_current_index(
            &self,
            user_id: Uuid,
            topic: Topic,
            level: Level,
            index: usize,
        ) -> Result<(), StoreError> {
            self.inner.save_current_index(user_id, topic, level, index).await
        }

        async fn list_progress(
            &self,
            user_id: Uuid,
        ) -> Result<Vec<ExerciseProgressRecord>, StoreError> {
            self.inner.list_progress(user_id).await
        }

        async fn award_points(&self, user_id: Uuid, points: u32) -> Result<(), StoreError> {
            self.inner.award_points(user_id, points).await
        }

        async fn reset(&self, user_id: Uuid, topic: Topic, level: Level) -> Result<u64, StoreError> {
            self.inner.reset(user_id, topic, level).await
        }
    }

    fn flaky_service() -> ProgressionService<FlakyStore> {
        ProgressionService::new(FlakyStore::default(), Catalog::builtin())
    }

    const GRID_SOLUTION: &str = r#"<div class="container">
    <div class="row">
        <div class="col-12 col-md-6 col-lg-4">
            <div class="card"><div class="card-body">One</div></div>
        </div>
    </div>
</div>"#;

    fn service() -> ProgressionService<MemoryProgressStore> {
        ProgressionService::new(MemoryProgressStore::new(), Catalog::builtin())
    }

    fn solution(topic: Topic, level: Level, index: usize) -> &'static str {
        Catalog::builtin()
            .set(topic, level)
            .unwrap()
            .get(index)
            .unwrap()
            .solution()
    }

    #[tokio::test]
    async fn test_fresh_user_gets_defaults() {
        let service = service();
        let snapshot = service
            .load(Uuid::new_v4(), Topic::Bootstrap, Level::Beginner)
            .await
            .unwrap();

        assert_eq!(snapshot.active_index, 0);
        assert!(snapshot.completed.is_empty());
        assert!(!snapshot.finished);
        assert!(snapshot.saved_content.is_none());
        assert_eq!(snapshot.statuses[0], ExerciseStatus::Active);
        assert!(snapshot.statuses[1..].iter().all(|s| *s == ExerciseStatus::Locked));
    }

    #[tokio::test]
    async fn test_unknown_set_is_not_found() {
        let err = service()
            .load(Uuid::new_v4(), Topic::Html, Level::Advanced)
            .await
            .unwrap_err();
        assert!(matches!(err, ProgressionError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_grid_scenario() {
        let service = service();
        let user_id = Uuid::new_v4();

        let outcome = service
            .submit(user_id, Topic::Bootstrap, Level::Beginner, GRID_SOLUTION)
            .await
            .unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.completed_index, Some(0));
        assert_eq!(outcome.points_awarded, 10);
        assert!(outcome.persisted);
        assert_eq!(outcome.progress.completed, vec![0]);
        assert_eq!(outcome.progress.active_index, 1);

        // Same markup against the navbar exercise
        let outcome = service
            .submit(user_id, Topic::Bootstrap, Level::Beginner, GRID_SOLUTION)
            .await
            .unwrap();
        assert!(!outcome.correct);
        assert!(!outcome.missing.is_empty());
        assert_eq!(outcome.progress.completed, vec![0]);
        assert_eq!(outcome.progress.active_index, 1);

        let reloaded = service
            .load(user_id, Topic::Bootstrap, Level::Beginner)
            .await
            .unwrap();
        assert_eq!(reloaded.completed, vec![0]);
        assert_eq!(reloaded.active_index, 1);
        assert_eq!(service.store().points(user_id), 10);
    }

    #[tokio::test]
    async fn test_incorrect_submission_changes_nothing() {
        let service = service();
        let user_id = Uuid::new_v4();

        let outcome = service
            .submit(user_id, Topic::Bootstrap, Level::Beginner, "<p>hello</p>")
            .await
            .unwrap();
        assert!(!outcome.correct);
        assert_eq!(
            outcome.missing,
            vec!["row container", "responsive columns", "card"]
        );
        assert_eq!(outcome.points_awarded, 0);

        assert!(service.store().list_progress(user_id).await.unwrap().is_empty());
        assert_eq!(service.store().points(user_id), 0);
    }

    #[tokio::test]
    async fn test_select_locked_is_rejected() {
        let service = service();
        let user_id = Uuid::new_v4();

        let err = service
            .select(user_id, Topic::Tailwind, Level::Beginner, 2)
            .await
            .unwrap_err();
        assert_eq!(err, ProgressionError::Locked(2));

        let err = service
            .select(user_id, Topic::Tailwind, Level::Beginner, 40)
            .await
            .unwrap_err();
        assert!(matches!(err, ProgressionError::OutOfRange { index: 40, .. }));
    }

    #[tokio::test]
    async fn test_review_completed_exercise_awards_no_points() {
        let service = service();
        let user_id = Uuid::new_v4();
        let (topic, level) = (Topic::Tailwind, Level::Beginner);

        for index in 0..2 {
            let outcome = service
                .submit(user_id, topic, level, solution(topic, level, index))
                .await
                .unwrap();
            assert!(outcome.correct);
        }
        assert_eq!(service.store().points(user_id), 20);

        let snapshot = service.select(user_id, topic, level, 0).await.unwrap();
        assert_eq!(snapshot.active_index, 0);
        assert_eq!(snapshot.saved_content.as_deref(), Some(solution(topic, level, 0)));

        let outcome = service
            .submit(user_id, topic, level, solution(topic, level, 0))
            .await
            .unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.points_awarded, 0);
        assert_eq!(outcome.progress.active_index, 1);
        assert_eq!(service.store().points(user_id), 20);
    }

    #[tokio::test]
    async fn test_finishing_a_level() {
        let service = service();
        let user_id = Uuid::new_v4();
        let (topic, level) = (Topic::Html, Level::Beginner);

        let mut last = None;
        for index in 0..4 {
            last = Some(
                service
                    .submit(user_id, topic, level, solution(topic, level, index))
                    .await
                    .unwrap(),
            );
        }

        let outcome = last.unwrap();
        assert!(outcome.correct);
        assert!(outcome.progress.finished);
        assert_eq!(outcome.progress.active_index, 3);
        assert!(
            outcome
                .progress
                .statuses
                .iter()
                .all(|s| *s == ExerciseStatus::Completed)
        );
    }

    #[tokio::test]
    async fn test_draft_keeps_completion() {
        let service = service();
        let user_id = Uuid::new_v4();
        let (topic, level) = (Topic::Javascript, Level::Beginner);

        let draft = service
            .save_draft(user_id, topic, level, "function greet() {")
            .await
            .unwrap();
        assert_eq!(draft, DraftSaved { index: 0, persisted: true });
        let snapshot = service.load(user_id, topic, level).await.unwrap();
        assert_eq!(snapshot.saved_content.as_deref(), Some("function greet() {"));
        assert!(snapshot.completed.is_empty());

        service
            .submit(user_id, topic, level, solution(topic, level, 0))
            .await
            .unwrap();
        service.select(user_id, topic, level, 0).await.unwrap();
        service
            .save_draft(user_id, topic, level, "// reworking")
            .await
            .unwrap();

        let key = ProgressKey::new(user_id, topic, LevelKey::new(level, 0));
        let record = service.store().load_completion(key).await.unwrap().unwrap();
        assert!(record.is_completed);
        assert_eq!(record.points, 10);
        assert_eq!(record.content, "// reworking");
    }

    #[tokio::test]
    async fn test_unreadable_store_falls_back_to_defaults() {
        let service = service();
        let user_id = Uuid::new_v4();
        let (topic, level) = (Topic::Css, Level::Intermediate);

        service
            .submit(user_id, topic, level, solution(topic, level, 0))
            .await
            .unwrap();

        service.store().set_unavailable(true);
        let snapshot = service.load(user_id, topic, level).await.unwrap();
        assert_eq!(snapshot.active_index, 0);
        assert!(snapshot.completed.is_empty());
        assert_eq!(service.stats(user_id).await.total_completed, 0);

        service.store().set_unavailable(false);
        let snapshot = service.load(user_id, topic, level).await.unwrap();
        assert_eq!(snapshot.completed, vec![0]);
    }

    #[tokio::test]
    async fn test_failed_write_is_reported_not_raised() {
        let service = service();
        let user_id = Uuid::new_v4();
        let (topic, level) = (Topic::Css, Level::Advanced);
        service.store().set_unavailable(true);

        let outcome = service
            .submit(user_id, topic, level, solution(topic, level, 0))
            .await
            .unwrap();
        assert!(outcome.correct);
        assert!(!outcome.persisted);
        assert_eq!(outcome.points_awarded, 0);
        assert_eq!(outcome.progress.active_index, 1);

        let err = service.reset(user_id, topic, level).await.unwrap_err();
        assert!(matches!(err, ProgressionError::Store(_)));
    }

    #[tokio::test]
    async fn test_stale_index_is_repaired() {
        let service = service();
        let user_id = Uuid::new_v4();
        let (topic, level) = (Topic::Bootstrap, Level::Advanced);

        service
            .store()
            .save_current_index(user_id, topic, level, 3)
            .await
            .unwrap();
        let snapshot = service.load(user_id, topic, level).await.unwrap();
        assert_eq!(snapshot.active_index, 0);
    }

    #[tokio::test]
    async fn test_reset_and_stats() {
        let service = service();
        let user_id = Uuid::new_v4();

        for (topic, level) in [
            (Topic::Bootstrap, Level::Beginner),
            (Topic::Tailwind, Level::Advanced),
        ] {
            service
                .submit(user_id, topic, level, solution(topic, level, 0))
                .await
                .unwrap();
        }

        let stats = service.stats(user_id).await;
        assert_eq!(stats.total_completed, 2);
        assert_eq!(stats.total_points, 20);
        assert_eq!(
            stats.by_topic[&Topic::Bootstrap],
            TopicStats {
                completed: 1,
                total: 12
            }
        );
        assert_eq!(stats.by_topic[&Topic::Html].total, 8);
        assert_eq!(stats.by_topic[&Topic::Javascript].total, 15);

        service
            .reset(user_id, Topic::Bootstrap, Level::Beginner)
            .await
            .unwrap();
        let snapshot = service
            .load(user_id, Topic::Bootstrap, Level::Beginner)
            .await
            .unwrap();
        assert!(snapshot.completed.is_empty());
        assert_eq!(service.stats(user_id).await.total_completed, 1);
    }

    #[tokio::test]
    async fn test_failed_completion_write_awards_nothing() {
        let service = flaky_service();
        let user_id = Uuid::new_v4();
        let (topic, level) = (Topic::Bootstrap, Level::Beginner);
        let code = solution(topic, level, 0);

        service.store().fail_saves.store(true, Ordering::SeqCst);
        let outcome = service.submit(user_id, topic, level, code).await.unwrap();
        assert!(outcome.correct);
        assert!(!outcome.persisted);
        assert_eq!(outcome.points_awarded, 0);
        assert_eq!(service.store().inner.points(user_id), 0);

        // The completion never landed, so the exercise is still the active one
        service.store().fail_saves.store(false, Ordering::SeqCst);
        let outcome = service.submit(user_id, topic, level, code).await.unwrap();
        assert!(outcome.persisted);
        assert_eq!(outcome.points_awarded, 10);

        service.select(user_id, topic, level, 0).await.unwrap();
        let outcome = service.submit(user_id, topic, level, code).await.unwrap();
        assert_eq!(outcome.points_awarded, 0);

        assert_eq!(service.store().inner.points(user_id), 10);
        assert_eq!(service.stats(user_id).await.total_points, 10);
    }

    #[tokio::test]
    async fn test_overlapping_submissions_award_once() {
        let service = flaky_service();
        let user_id = Uuid::new_v4();
        let (topic, level) = (Topic::Tailwind, Level::Beginner);
        let code = solution(topic, level, 0);

        let (first, second) = tokio::join!(
            service.submit(user_id, topic, level, code),
            service.submit(user_id, topic, level, code),
        );
        let (first, second) = (first.unwrap(), second.unwrap());
        assert!(first.correct && second.correct);
        assert_eq!(first.points_awarded + second.points_awarded, 10);

        assert_eq!(service.store().inner.points(user_id), 10);
        assert_eq!(service.stats(user_id).await.total_points, 10);
    }

    #[tokio::test]
    async fn test_redoing_a_reset_level_does_not_farm_points() {
        let service = service();
        let user_id = Uuid::new_v4();
        let (topic, level) = (Topic::Bootstrap, Level::Beginner);

        for _ in 0..3 {
            service
                .submit(user_id, topic, level, GRID_SOLUTION)
                .await
                .unwrap();
            service.reset(user_id, topic, level).await.unwrap();
            assert_eq!(service.store().points(user_id), 0);
        }

        let outcome = service
            .submit(user_id, topic, level, GRID_SOLUTION)
            .await
            .unwrap();
        assert_eq!(outcome.points_awarded, 10);
        assert_eq!(service.store().points(user_id), 10);
        assert_eq!(service.stats(user_id).await.total_points, 10);
    }

    #[tokio::test]
    async fn test_restore_reads_a_level_in_one_query() {
        let service = flaky_service();
        let user_id = Uuid::new_v4();
        let (topic, level) = (Topic::Javascript, Level::Advanced);

        for index in 0..3 {
            service
                .submit(user_id, topic, level, solution(topic, level, index))
                .await
                .unwrap();
        }

        let before = service.store().level_loads.load(Ordering::SeqCst);
        let snapshot = service.load(user_id, topic, level).await.unwrap();
        assert_eq!(snapshot.completed, vec![0, 1, 2]);
        assert_eq!(service.store().level_loads.load(Ordering::SeqCst) - before, 1);
        assert_eq!(service.store().record_loads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_correct_choice_comes_with_its_explanation() {
        let service = service();
        let user_id = Uuid::new_v4();
        let (topic, level) = (Topic::Html, Level::Beginner);

        let wrong = service
            .submit(user_id, topic, level, "not an option")
            .await
            .unwrap();
        assert!(!wrong.correct);
        assert!(wrong.explanation.is_none());

        let right = service
            .submit(user_id, topic, level, solution(topic, level, 0))
            .await
            .unwrap();
        assert!(right.correct);
        let expected = Catalog::builtin()
            .set(topic, level)
            .unwrap()
            .get(0)
            .unwrap()
            .explanation();
        assert!(expected.is_some());
        assert_eq!(right.explanation, expected);

        let coding = service
            .submit(
                user_id,
                Topic::Bootstrap,
                Level::Beginner,
                GRID_SOLUTION,
            )
            .await
            .unwrap();
        assert!(coding.correct);
        assert!(coding.explanation.is_none());
    }

    #[tokio::test]
    async fn test_solution_is_gated_by_progress() {
        let service = service();
        let user_id = Uuid::new_v4();
        let (topic, level) = (Topic::Css, Level::Intermediate);

        let err = service
            .solution(user_id, topic, level, 0, false)
            .await
            .unwrap_err();
        assert_eq!(err, ProgressionError::SolutionHidden(0));

        let revealed = service
            .solution(user_id, topic, level, 0, true)
            .await
            .unwrap();
        assert_eq!(revealed.index, 0);
        assert_eq!(revealed.solution, solution(topic, level, 0));
        assert!(revealed.explanation.is_none());

        let err = service
            .solution(user_id, topic, level, 1, true)
            .await
            .unwrap_err();
        assert_eq!(err, ProgressionError::Locked(1));

        service
            .submit(user_id, topic, level, solution(topic, level, 0))
            .await
            .unwrap();
        assert!(service.solution(user_id, topic, level, 0, false).await.is_ok());

        let err = service
            .solution(user_id, topic, level, 99, true)
            .await
            .unwrap_err();
        assert!(matches!(err, ProgressionError::OutOfRange { index: 99, .. }));
    }
}
