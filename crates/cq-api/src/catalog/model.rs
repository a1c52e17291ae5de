use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use cq_exercises::{ExerciseDefinition, ExerciseKind, ExerciseSet, Level, Topic};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// `{topic}/{level}` path segments, parsed case-insensitively. Unknown
/// values are a 404.
#[derive(Debug, Clone, Copy)]
pub struct SetPath {
    pub topic: Topic,
    pub level: Level,
}

#[derive(Deserialize)]
struct RawSetPath {
    topic: String,
    level: String,
}

impl SetPath {
    pub fn parse(topic: &str, level: &str) -> Result<Self, ApiError> {
        Ok(Self {
            topic: topic.parse()?,
            level: level.parse()?,
        })
    }
}

impl<S: Send + Sync> FromRequestParts<S> for SetPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<RawSetPath>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;

        Self::parse(&raw.topic, &raw.level)
    }
}

/// One line of an exercise list.
#[derive(Debug, Serialize)]
pub struct ExerciseSummary {
    pub index: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub points: u32,
    pub kind: &'static str,
}

impl From<&ExerciseDefinition> for ExerciseSummary {
    fn from(exercise: &ExerciseDefinition) -> Self {
        Self {
            index: exercise.position,
            title: exercise.title,
            description: exercise.description,
            points: exercise.points,
            kind: match exercise.kind {
                ExerciseKind::Coding { .. } | ExerciseKind::ExactMatch { .. } => "coding",
                ExerciseKind::MultipleChoice { .. } => "multiple_choice",
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SetView {
    pub topic: Topic,
    pub level: Level,
    pub total_points: u32,
    pub exercises: Vec<ExerciseSummary>,
}

impl From<&ExerciseSet> for SetView {
    fn from(set: &ExerciseSet) -> Self {
        Self {
            topic: set.topic,
            level: set.level,
            total_points: set.total_points(),
            exercises: set.iter().map(ExerciseSummary::from).collect(),
        }
    }
}

/// What the learner needs to attempt an exercise. Reference solutions and
/// correct answers never leave the server.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExerciseBody {
    Coding {
        starter: &'static str,
    },
    MultipleChoice {
        question: &'static str,
        options: &'static [&'static str],
    },
}

#[derive(Debug, Serialize)]
pub struct ExerciseView {
    pub index: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub instructions: &'static str,
    pub hints: &'static [&'static str],
    pub points: u32,
    #[serde(flatten)]
    pub body: ExerciseBody,
}

impl From<&ExerciseDefinition> for ExerciseView {
    fn from(exercise: &ExerciseDefinition) -> Self {
        let body = match &exercise.kind {
            ExerciseKind::Coding { starter, .. } | ExerciseKind::ExactMatch { starter, .. } => {
                ExerciseBody::Coding { starter: *starter }
            }
            ExerciseKind::MultipleChoice {
                question, options, ..
            } => ExerciseBody::MultipleChoice {
                question: *question,
                options: *options,
            },
        };

        Self {
            index: exercise.position,
            title: exercise.title,
            description: exercise.description,
            instructions: exercise.instructions,
            hints: exercise.hints,
            points: exercise.points,
            body,
        }
    }
}
