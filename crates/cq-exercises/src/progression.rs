//! Sequential unlock state machine for one (topic, level) sequence.
//!
//! The state is the pair (active index, completion set). Exercise `i > 0`
//! is reachable only once exercise `i - 1` is completed; exercise 0 is always
//! reachable. The machine is pure: persistence is the caller's concern.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::ProgressionError;

/// How a single exercise looks from the learner's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseStatus {
    /// The previous exercise is not completed yet.
    Locked,
    /// Reachable, not completed and not the active one.
    Available,
    /// Currently selected and not completed.
    Active,
    /// Completed. Stays selectable for review.
    Completed,
}

/// Result of a successful submission on the active exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// Index that was just completed.
    pub completed_index: usize,
    /// `false` when the exercise had already been completed before.
    pub newly_completed: bool,
    /// New active index, if the machine moved forward.
    pub advanced_to: Option<usize>,
}

/// Progression state for one user over one exercise sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progression {
    len: usize,
    active: usize,
    completed: BTreeSet<usize>,
}

impl Progression {
    /// Fresh state: nothing completed, exercise 0 active.
    ///
    /// # Arguments
    ///
    /// * `len` - Number of exercises in the sequence, at least 1
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            active: 0,
            completed: BTreeSet::new(),
        }
    }

    /// Rebuild state from persisted records.
    ///
    /// Completed indices outside the sequence are dropped. A persisted index
    /// that is out of range or points at a locked exercise is replaced by the
    /// first incomplete exercise (the last one if everything is completed).
    ///
    /// # Arguments
    ///
    /// * `len` - Number of exercises in the sequence
    /// * `completed` - Indices whose stored record is marked completed
    /// * `persisted_index` - Stored "current exercise" pointer, if any
    pub fn restore(
        len: usize,
        completed: impl IntoIterator<Item = usize>,
        persisted_index: Option<usize>,
    ) -> Self {
        let mut progression = Self::new(len);
        progression.completed = completed
            .into_iter()
            .filter(|index| *index < progression.len)
            .collect();

        progression.active = match persisted_index {
            Some(index) if progression.can_access(index) => index,
            _ => progression.resume_index(),
        };

        progression
    }

    pub const fn exercise_count(&self) -> usize {
        self.len
    }

    pub const fn active_index(&self) -> usize {
        self.active
    }

    pub const fn completed(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    /// `true` when `index` is in range and either the first exercise or the
    /// successor of a completed one.
    pub fn can_access(&self, index: usize) -> bool {
        index < self.len && (index == 0 || self.completed.contains(&(index - 1)))
    }

    /// Every exercise in the sequence is completed.
    pub fn is_finished(&self) -> bool {
        self.completed.len() == self.len
    }

    /// Where a learner should land: the first incomplete exercise, or the
    /// last one when the sequence is finished.
    pub fn resume_index(&self) -> usize {
        (0..self.len)
            .find(|index| !self.completed.contains(index))
            .unwrap_or(self.len - 1)
    }

    /// Make `index` the active exercise.
    ///
    /// Rejected without any state change when the index is out of range or
    /// still locked. Completed exercises can always be re-selected.
    pub fn select(&mut self, index: usize) -> Result<(), ProgressionError> {
        if index >= self.len {
            return Err(ProgressionError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if !self.can_access(index) {
            return Err(ProgressionError::Locked(index));
        }

        self.active = index;
        Ok(())
    }

    /// Record a correct submission for the active exercise and move to the
    /// next one unless the active exercise is the last.
    pub fn complete_active(&mut self) -> Advance {
        let completed_index = self.active;
        let newly_completed = self.completed.insert(completed_index);

        let advanced_to = (completed_index + 1 < self.len).then(|| {
            self.active = completed_index + 1;
            self.active
        });

        Advance {
            completed_index,
            newly_completed,
            advanced_to,
        }
    }

    pub fn status(&self, index: usize) -> ExerciseStatus {
        if self.completed.contains(&index) {
            ExerciseStatus::Completed
        } else if index == self.active {
            ExerciseStatus::Active
        } else if self.can_access(index) {
            ExerciseStatus::Available
        } else {
            ExerciseStatus::Locked
        }
    }

    pub fn statuses(&self) -> Vec<ExerciseStatus> {
        (0..self.len).map(|index| self.status(index)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_zero_with_nothing_completed() {
        let progression = Progression::new(4);
        assert_eq!(progression.active_index(), 0);
        assert!(progression.completed().is_empty());
        assert_eq!(
            progression.statuses(),
            vec![
                ExerciseStatus::Active,
                ExerciseStatus::Locked,
                ExerciseStatus::Locked,
                ExerciseStatus::Locked
            ]
        );
    }

    #[test]
    fn test_access_requires_previous_completion_for_every_subset() {
        const LEN: usize = 6;

        for mask in 0u32..(1 << LEN) {
            let completed: Vec<usize> = (0..LEN).filter(|i| mask & (1 << i) != 0).collect();
            let progression = Progression::restore(LEN, completed.iter().copied(), None);

            assert!(progression.can_access(0));
            for index in 1..LEN {
                assert_eq!(
                    progression.can_access(index),
                    completed.contains(&(index - 1)),
                    "mask {mask:#b}, index {index}"
                );
            }
            assert!(!progression.can_access(LEN));
        }
    }

    #[test]
    fn test_select_locked_leaves_state_unchanged() {
        let mut progression = Progression::new(4);
        let before = progression.clone();

        assert_eq!(progression.select(2), Err(ProgressionError::Locked(2)));
        assert_eq!(progression, before);
    }

    #[test]
    fn test_select_out_of_range_is_rejected() {
        let mut progression = Progression::new(4);
        assert_eq!(
            progression.select(4),
            Err(ProgressionError::OutOfRange { index: 4, len: 4 })
        );
        assert_eq!(progression.active_index(), 0);
    }

    #[test]
    fn test_completed_exercise_can_always_be_reselected() {
        let mut progression = Progression::restore(4, [0, 1, 2], Some(3));
        assert!(progression.select(0).is_ok());
        assert!(progression.select(1).is_ok());
        assert_eq!(progression.status(1), ExerciseStatus::Completed);
    }

    #[test]
    fn test_complete_active_advances() {
        let mut progression = Progression::new(4);

        let advance = progression.complete_active();
        assert_eq!(
            advance,
            Advance {
                completed_index: 0,
                newly_completed: true,
                advanced_to: Some(1)
            }
        );
        assert_eq!(progression.active_index(), 1);
        assert_eq!(progression.completed().iter().copied().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_complete_last_stays_and_finishes() {
        let mut progression = Progression::restore(3, [0, 1], Some(2));

        let advance = progression.complete_active();
        assert_eq!(advance.completed_index, 2);
        assert_eq!(advance.advanced_to, None);
        assert_eq!(progression.active_index(), 2);
        assert!(progression.is_finished());
    }

    #[test]
    fn test_recompleting_reviewed_exercise_is_not_new() {
        let mut progression = Progression::restore(3, [0, 1], Some(2));
        progression.select(0).unwrap();

        let advance = progression.complete_active();
        assert!(!advance.newly_completed);
        assert_eq!(advance.advanced_to, Some(1));
    }

    #[test]
    fn test_single_exercise_sequence() {
        let mut progression = Progression::new(1);
        let advance = progression.complete_active();
        assert_eq!(advance.advanced_to, None);
        assert!(progression.is_finished());
        assert_eq!(progression.resume_index(), 0);
    }

    #[test]
    fn test_restore_uses_valid_persisted_index() {
        let progression = Progression::restore(4, [0, 1], Some(1));
        assert_eq!(progression.active_index(), 1);
    }

    #[test]
    fn test_restore_repairs_locked_index() {
        let progression = Progression::restore(4, [0], Some(3));
        assert_eq!(progression.active_index(), 1);
    }

    #[test]
    fn test_restore_repairs_out_of_range_index() {
        let progression = Progression::restore(4, [0, 1, 2], Some(17));
        assert_eq!(progression.active_index(), 3);

        let finished = Progression::restore(4, [0, 1, 2, 3], Some(9));
        assert_eq!(finished.active_index(), 3);
    }

    #[test]
    fn test_restore_without_index_resumes_first_incomplete() {
        let progression = Progression::restore(4, [0, 1], None);
        assert_eq!(progression.active_index(), 2);
    }

    #[test]
    fn test_restore_drops_out_of_range_completions() {
        let progression = Progression::restore(2, [0, 5, 9], None);
        assert_eq!(progression.completed().len(), 1);
        assert!(!progression.is_finished());
    }

    #[test]
    fn test_statuses_mix() {
        let progression = Progression::restore(5, [0, 1], Some(1));
        assert_eq!(
            progression.statuses(),
            vec![
                ExerciseStatus::Completed,
                ExerciseStatus::Completed,
                ExerciseStatus::Available,
                ExerciseStatus::Locked,
                ExerciseStatus::Locked
            ]
        );
    }
}
