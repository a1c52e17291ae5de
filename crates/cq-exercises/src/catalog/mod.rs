//! The built-in exercise catalog.
//!
//! Exercise sets are static tables compiled once into a [`Catalog`]. The
//! ordering of each set is fixed: it defines the unlock sequence and the
//! `level-index` keys under which progress is stored, so reordering a table
//! reassigns users' stored progress.

mod bootstrap;
mod css;
mod html;
mod javascript;
mod php;
mod tailwind;

use std::{
    collections::BTreeMap,
    sync::{Arc, LazyLock},
};

use serde::Serialize;

use crate::{
    error::{CatalogError, ProgressionError},
    normalize::normalize_submission,
    predicate::{CheckSpec, Evaluation, Predicate},
    topic::{Level, Topic},
};

/// Points awarded for completing an exercise unless the table says otherwise.
pub const DEFAULT_POINTS: u32 = 10;

/// Label reported when a multiple-choice answer is wrong.
pub const WRONG_CHOICE: &str = "correct answer";

/// Label reported when an exact-match submission differs from the solution.
pub const SOLUTION_MISMATCH: &str = "matching solution";

/// Static description of an exercise, as written in the tables.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseSpec {
    pub title: &'static str,
    pub description: &'static str,
    pub instructions: &'static str,
    pub hints: &'static [&'static str],
    pub points: u32,
    pub kind: KindSpec,
}

#[derive(Debug, Clone, Copy)]
pub enum KindSpec {
    Coding {
        starter: &'static str,
        solution: &'static str,
        checks: &'static [CheckSpec],
    },
    /// Judged by comparing the normalized submission with the normalized
    /// solution.
    ExactMatch {
        starter: &'static str,
        solution: &'static str,
    },
    MultipleChoice {
        question: &'static str,
        options: &'static [&'static str],
        answer: &'static str,
        explanation: &'static str,
    },
}

/// Static description of one ordered (topic, level) sequence.
#[derive(Debug, Clone, Copy)]
pub struct SetSpec {
    pub topic: Topic,
    pub level: Level,
    pub exercises: &'static [ExerciseSpec],
}

/// How an exercise is answered and judged.
#[derive(Debug, Clone)]
pub enum ExerciseKind {
    Coding {
        starter: &'static str,
        solution: &'static str,
        predicate: Predicate,
    },
    ExactMatch {
        starter: &'static str,
        solution: &'static str,
    },
    MultipleChoice {
        question: &'static str,
        options: &'static [&'static str],
        answer: &'static str,
        explanation: &'static str,
    },
}

/// A compiled, immutable exercise definition.
#[derive(Debug, Clone)]
pub struct ExerciseDefinition {
    pub position: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub instructions: &'static str,
    pub hints: &'static [&'static str],
    pub points: u32,
    pub kind: ExerciseKind,
}

impl ExerciseDefinition {
    fn compile(position: usize, spec: &ExerciseSpec) -> Result<Self, CatalogError> {
        let kind = match spec.kind {
            KindSpec::Coding {
                starter,
                solution,
                checks,
            } => ExerciseKind::Coding {
                starter,
                solution,
                predicate: Predicate::compile(spec.title, checks)?,
            },
            KindSpec::ExactMatch { starter, solution } => {
                ExerciseKind::ExactMatch { starter, solution }
            }
            KindSpec::MultipleChoice {
                question,
                options,
                answer,
                explanation,
            } => ExerciseKind::MultipleChoice {
                question,
                options,
                answer,
                explanation,
            },
        };

        Ok(Self {
            position,
            title: spec.title,
            description: spec.description,
            instructions: spec.instructions,
            hints: spec.hints,
            points: spec.points,
            kind,
        })
    }

    /// Judge raw submitted content (code, or the chosen option).
    pub fn evaluate(&self, content: &str) -> Evaluation {
        let normalized = normalize_submission(content);

        match &self.kind {
            ExerciseKind::Coding { predicate, .. } => predicate.evaluate(&normalized),
            ExerciseKind::ExactMatch { solution, .. } => {
                exact(&normalized, solution, SOLUTION_MISMATCH)
            }
            ExerciseKind::MultipleChoice { answer, .. } => exact(&normalized, answer, WRONG_CHOICE),
        }
    }

    /// Content the editor starts with. Empty for multiple-choice exercises.
    pub fn starter(&self) -> &'static str {
        match &self.kind {
            ExerciseKind::Coding { starter, .. } | ExerciseKind::ExactMatch { starter, .. } => {
                *starter
            }
            ExerciseKind::MultipleChoice { .. } => "",
        }
    }

    /// Reference solution: the code, or the correct option.
    pub fn solution(&self) -> &'static str {
        match &self.kind {
            ExerciseKind::Coding { solution, .. } | ExerciseKind::ExactMatch { solution, .. } => {
                *solution
            }
            ExerciseKind::MultipleChoice { answer, .. } => *answer,
        }
    }

    /// Why the correct option is correct. Only multiple-choice exercises
    /// carry one.
    pub fn explanation(&self) -> Option<&'static str> {
        match &self.kind {
            ExerciseKind::MultipleChoice { explanation, .. } => Some(*explanation),
            _ => None,
        }
    }
}

fn exact(normalized: &str, expected: &str, label: &'static str) -> Evaluation {
    if normalized == normalize_submission(expected) {
        Evaluation::pass()
    } else {
        Evaluation {
            passed: false,
            missing: vec![label],
        }
    }
}

/// An ordered, immutable sequence of exercises for one (topic, level).
#[derive(Debug, Clone)]
pub struct ExerciseSet {
    pub topic: Topic,
    pub level: Level,
    exercises: Vec<ExerciseDefinition>,
}

impl ExerciseSet {
    fn compile(spec: &SetSpec) -> Result<Self, CatalogError> {
        if spec.exercises.is_empty() {
            return Err(CatalogError::EmptySet {
                topic: spec.topic,
                level: spec.level,
            });
        }

        let exercises = spec
            .exercises
            .iter()
            .enumerate()
            .map(|(position, exercise)| ExerciseDefinition::compile(position, exercise))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            topic: spec.topic,
            level: spec.level,
            exercises,
        })
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Look up an exercise by position. Out-of-range is an error, never a wrap.
    pub fn get(&self, index: usize) -> Result<&ExerciseDefinition, ProgressionError> {
        self.exercises
            .get(index)
            .ok_or(ProgressionError::OutOfRange {
                index,
                len: self.exercises.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExerciseDefinition> {
        self.exercises.iter()
    }

    pub fn total_points(&self) -> u32 {
        self.exercises.iter().map(|exercise| exercise.points).sum()
    }
}

/// Overview entry for one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicSummary {
    pub topic: Topic,
    pub levels: Vec<LevelSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelSummary {
    pub level: Level,
    pub exercise_count: usize,
    pub total_points: u32,
}

/// All exercise sets, keyed by (topic, level).
#[derive(Debug, Clone)]
pub struct Catalog {
    sets: BTreeMap<(Topic, Level), ExerciseSet>,
}

static BUILTIN: LazyLock<Arc<Catalog>> = LazyLock::new(|| {
    Arc::new(Catalog::from_tables(&builtin_tables()).expect("built-in exercise tables are valid"))
});

/// Every table shipped with the crate, in display order.
pub fn builtin_tables() -> Vec<SetSpec> {
    vec![
        SetSpec {
            topic: Topic::Html,
            level: Level::Beginner,
            exercises: html::BEGINNER,
        },
        SetSpec {
            topic: Topic::Html,
            level: Level::Intermediate,
            exercises: html::INTERMEDIATE,
        },
        SetSpec {
            topic: Topic::Css,
            level: Level::Intermediate,
            exercises: css::INTERMEDIATE,
        },
        SetSpec {
            topic: Topic::Css,
            level: Level::Advanced,
            exercises: css::ADVANCED,
        },
        SetSpec {
            topic: Topic::Bootstrap,
            level: Level::Beginner,
            exercises: bootstrap::BEGINNER,
        },
        SetSpec {
            topic: Topic::Bootstrap,
            level: Level::Intermediate,
            exercises: bootstrap::INTERMEDIATE,
        },
        SetSpec {
            topic: Topic::Bootstrap,
            level: Level::Advanced,
            exercises: bootstrap::ADVANCED,
        },
        SetSpec {
            topic: Topic::Tailwind,
            level: Level::Beginner,
            exercises: tailwind::BEGINNER,
        },
        SetSpec {
            topic: Topic::Tailwind,
            level: Level::Intermediate,
            exercises: tailwind::INTERMEDIATE,
        },
        SetSpec {
            topic: Topic::Tailwind,
            level: Level::Advanced,
            exercises: tailwind::ADVANCED,
        },
        SetSpec {
            topic: Topic::Javascript,
            level: Level::Beginner,
            exercises: javascript::BEGINNER,
        },
        SetSpec {
            topic: Topic::Javascript,
            level: Level::Intermediate,
            exercises: javascript::INTERMEDIATE,
        },
        SetSpec {
            topic: Topic::Javascript,
            level: Level::Advanced,
            exercises: javascript::ADVANCED,
        },
        SetSpec {
            topic: Topic::Php,
            level: Level::Beginner,
            exercises: php::BEGINNER,
        },
        SetSpec {
            topic: Topic::Php,
            level: Level::Intermediate,
            exercises: php::INTERMEDIATE,
        },
        SetSpec {
            topic: Topic::Php,
            level: Level::Advanced,
            exercises: php::ADVANCED,
        },
    ]
}

impl Catalog {
    /// The catalog compiled from the tables shipped with this crate.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    pub fn from_tables(tables: &[SetSpec]) -> Result<Self, CatalogError> {
        let sets = tables
            .iter()
            .map(|spec| ExerciseSet::compile(spec).map(|set| ((spec.topic, spec.level), set)))
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(Self { sets })
    }

    pub fn set(&self, topic: Topic, level: Level) -> Result<&ExerciseSet, ProgressionError> {
        self.sets
            .get(&(topic, level))
            .ok_or(ProgressionError::NotFound { topic, level })
    }

    pub fn sets(&self) -> impl Iterator<Item = &ExerciseSet> {
        self.sets.values()
    }

    /// Topics with their available levels, in topic then level order.
    pub fn topics(&self) -> Vec<TopicSummary> {
        let mut summaries: Vec<TopicSummary> = Vec::new();

        for set in self.sets.values() {
            let level = LevelSummary {
                level: set.level,
                exercise_count: set.len(),
                total_points: set.total_points(),
            };

            match summaries.last_mut() {
                Some(summary) if summary.topic == set.topic => summary.levels.push(level),
                _ => summaries.push(TopicSummary {
                    topic: set.topic,
                    levels: vec![level],
                }),
            }
        }

        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_compiles() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.sets().count(), builtin_tables().len());
    }

    #[test]
    fn test_every_reference_solution_passes_its_own_predicate() {
        for set in Catalog::builtin().sets() {
            for exercise in set.iter() {
                let evaluation = exercise.evaluate(exercise.solution());
                assert!(
                    evaluation.passed,
                    "{}/{} #{} '{}' fails its own solution: missing {:?}",
                    set.topic, set.level, exercise.position, exercise.title, evaluation.missing
                );
            }
        }
    }

    #[test]
    fn test_no_starter_passes_its_predicate() {
        for set in Catalog::builtin().sets() {
            for exercise in set.iter() {
                if !matches!(exercise.kind, ExerciseKind::MultipleChoice { .. }) {
                    assert!(
                        !exercise.evaluate(exercise.starter()).passed,
                        "{}/{} #{} '{}' is solved by its starter code",
                        set.topic,
                        set.level,
                        exercise.position,
                        exercise.title
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_exercise_has_hints_and_points() {
        for set in Catalog::builtin().sets() {
            for exercise in set.iter() {
                assert!(!exercise.hints.is_empty(), "'{}' has no hints", exercise.title);
                assert!(exercise.points > 0, "'{}' awards no points", exercise.title);
            }
        }
    }

    #[test]
    fn test_out_of_range_lookup_is_rejected() {
        let catalog = Catalog::builtin();
        let set = catalog.set(Topic::Bootstrap, Level::Beginner).unwrap();
        assert_eq!(set.len(), 4);
        assert!(set.get(3).is_ok());
        assert_eq!(
            set.get(4).unwrap_err(),
            ProgressionError::OutOfRange { index: 4, len: 4 }
        );
    }

    #[test]
    fn test_missing_set_is_not_found() {
        let err = Catalog::builtin()
            .set(Topic::Css, Level::Beginner)
            .unwrap_err();
        assert_eq!(
            err,
            ProgressionError::NotFound {
                topic: Topic::Css,
                level: Level::Beginner
            }
        );
    }

    #[test]
    fn test_topics_overview_groups_levels() {
        let topics = Catalog::builtin().topics();
        let names: Vec<_> = topics.iter().map(|summary| summary.topic).collect();
        assert_eq!(names, Topic::ALL.to_vec());

        let bootstrap = topics
            .iter()
            .find(|summary| summary.topic == Topic::Bootstrap)
            .unwrap();
        let levels: Vec<_> = bootstrap.levels.iter().map(|level| level.level).collect();
        assert_eq!(levels, Level::ALL.to_vec());
        assert!(bootstrap.levels.iter().all(|level| level.total_points == 40));
    }

    #[test]
    fn test_multiple_choice_is_judged_on_normalized_answer() {
        let catalog = Catalog::builtin();
        let set = catalog.set(Topic::Html, Level::Beginner).unwrap();
        let first = set.get(0).unwrap();

        assert!(first.evaluate("<!DOCTYPE html>").passed);
        assert!(first.evaluate("  <!doctype   HTML>\n").passed);

        let wrong = first.evaluate("DOCTYPE html;");
        assert!(!wrong.passed);
        assert_eq!(wrong.missing, vec![WRONG_CHOICE]);
    }

    #[test]
    fn test_multiple_choice_carries_an_explanation() {
        let catalog = Catalog::builtin();
        let first = catalog.set(Topic::Html, Level::Beginner).unwrap().get(0).unwrap();
        assert!(first.explanation().is_some_and(|text| !text.is_empty()));

        let coding = catalog.set(Topic::Css, Level::Advanced).unwrap().get(0).unwrap();
        assert!(coding.explanation().is_none());
    }

    #[test]
    fn test_exact_match_ignores_case_and_layout_only() {
        let catalog = Catalog::builtin();
        let set = catalog.set(Topic::Php, Level::Beginner).unwrap();
        let first = set.get(0).unwrap();

        assert!(first.evaluate("<?php\n\techo \"Hello, World!\";\n?>").passed);
        assert!(first.evaluate("<?PHP\r\nECHO   \"hello, world!\";\n?>").passed);

        let wrong = first.evaluate("<?php\necho 'Hello, World!';\n?>");
        assert!(!wrong.passed);
        assert_eq!(wrong.missing, vec![SOLUTION_MISMATCH]);

        // The reference solutions keep PHP's escaped newlines literally
        let loops = set.get(4).unwrap();
        assert!(loops.solution().contains(r#""\n""#));
        assert!(loops.evaluate(loops.solution()).passed);
    }

    #[test]
    fn test_empty_set_is_rejected() {
        let err = Catalog::from_tables(&[SetSpec {
            topic: Topic::Html,
            level: Level::Advanced,
            exercises: &[],
        }])
        .unwrap_err();
        assert!(matches!(err, CatalogError::EmptySet { .. }));
    }
}
