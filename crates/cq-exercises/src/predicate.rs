//! Correctness predicates.
//!
//! A predicate is a conjunction of labelled checks. Each check passes when
//! any of its alternative patterns is found in the normalized submission at
//! least `at_least` times (counting matches of every alternative together).
//! Grading is purely syntactic: submitted code is never executed.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::error::CatalogError;

/// One check as written in the catalog tables.
#[derive(Debug, Clone, Copy)]
pub struct CheckSpec {
    pub label: &'static str,
    pub any_of: &'static [&'static str],
    pub at_least: usize,
}

impl CheckSpec {
    pub const fn new(label: &'static str, any_of: &'static [&'static str]) -> Self {
        Self {
            label,
            any_of,
            at_least: 1,
        }
    }

    /// Require at least `count` matches instead of one.
    pub const fn at_least(mut self, count: usize) -> Self {
        self.at_least = count;
        self
    }
}

/// Compiled form of a [`CheckSpec`].
#[derive(Debug, Clone)]
pub struct Check {
    label: &'static str,
    alternatives: Vec<Regex>,
    at_least: usize,
}

impl Check {
    fn compile(exercise: &str, spec: &CheckSpec) -> Result<Self, CatalogError> {
        let alternatives = spec
            .any_of
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| CatalogError::InvalidPattern {
                        exercise: exercise.to_string(),
                        pattern: (*pattern).to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            label: spec.label,
            alternatives,
            at_least: spec.at_least.max(1),
        })
    }

    pub const fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_satisfied(&self, normalized: &str) -> bool {
        if self.at_least == 1 {
            return self.alternatives.iter().any(|re| re.is_match(normalized));
        }

        let found: usize = self
            .alternatives
            .iter()
            .map(|re| re.find_iter(normalized).count())
            .sum();
        found >= self.at_least
    }
}

/// Outcome of running a predicate over a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub passed: bool,
    /// Labels of the checks that did not pass, in table order.
    pub missing: Vec<&'static str>,
}

impl Evaluation {
    pub const fn pass() -> Self {
        Self {
            passed: true,
            missing: Vec::new(),
        }
    }
}

/// Conjunction of compiled checks for one exercise.
#[derive(Debug, Clone)]
pub struct Predicate {
    checks: Vec<Check>,
}

impl Predicate {
    /// Compile the checks of `exercise`. Patterns are case-insensitive.
    pub fn compile(exercise: &str, specs: &[CheckSpec]) -> Result<Self, CatalogError> {
        let checks = specs
            .iter()
            .map(|spec| Check::compile(exercise, spec))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { checks })
    }

    /// Run every check against already-normalized text.
    pub fn evaluate(&self, normalized: &str) -> Evaluation {
        let missing: Vec<_> = self
            .checks
            .iter()
            .filter(|check| !check.is_satisfied(normalized))
            .map(Check::label)
            .collect();

        Evaluation {
            passed: missing.is_empty(),
            missing,
        }
    }

    pub fn matches(&self, normalized: &str) -> bool {
        self.checks.iter().all(|check| check.is_satisfied(normalized))
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }
}
