//! Exercise catalog and progression core for CodeQuest.
//!
//! This crate owns everything that decides what a learner may do next:
//!
//! * [`catalog`] - the ordered, immutable exercise sets per topic and level
//! * [`predicate`] and [`normalize`] - syntactic grading of submitted code
//! * [`progression`] - the sequential unlock state machine
//! * [`store`] - the persistence seam and an in-memory store
//! * [`service`] - the state machine driven against a store
//!
//! Submitted code is only pattern-matched, never executed.

pub mod catalog;
pub mod error;
pub mod normalize;
pub mod predicate;
pub mod progression;
pub mod service;
pub mod store;
pub mod topic;

pub use catalog::{Catalog, ExerciseDefinition, ExerciseKind, ExerciseSet};
pub use error::{CatalogError, ProgressionError};
pub use normalize::normalize_submission;
pub use predicate::{Evaluation, Predicate};
pub use progression::{ExerciseStatus, Progression};
pub use service::{
    CompletionStats, DraftSaved, ProgressionService, ProgressionSnapshot, RevealedSolution,
    SubmissionOutcome, TopicStats,
};
pub use store::{ExerciseProgressRecord, MemoryProgressStore, ProgressStore, StoreError};
pub use topic::{Level, LevelKey, ProgressKey, Topic};
