use thiserror::Error;

use crate::topic::{Level, Topic};

/// Errors raised by catalog lookups and progression transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgressionError {
    #[error("Unknown topic: '{0}'")]
    UnknownTopic(String),
    #[error("Unknown level: '{0}'")]
    UnknownLevel(String),
    #[error("Invalid level key: '{0}'")]
    InvalidLevelKey(String),
    #[error("No exercises for {topic}/{level}")]
    NotFound { topic: Topic, level: Level },
    #[error("Exercise index {index} is out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },
    #[error("Exercise {0} is locked until the previous exercise is completed")]
    Locked(usize),
    #[error("The solution of exercise {0} is shown once it is completed or revealed")]
    SolutionHidden(usize),
    #[error("Progress store error: {0}")]
    Store(String),
}

/// Errors raised while building a catalog from its static tables.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid pattern '{pattern}' in exercise '{exercise}': {source}")]
    InvalidPattern {
        exercise: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Exercise set {topic}/{level} is empty")]
    EmptySet { topic: Topic, level: Level },
}
