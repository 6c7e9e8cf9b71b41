//! Answer storage and progress computation.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::{QuestionKey, QUESTION_COUNT};

/// Lowest accepted scale value.
pub const SCALE_MIN: u8 = 1;
/// Highest accepted scale value.
pub const SCALE_MAX: u8 = 5;

/// Errors raised when recording an answer.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AnswerError {
    #[error("scale value {0} outside {SCALE_MIN}-{SCALE_MAX}")]
    ScaleOutOfRange(u8),
}

/// One optional 1-5 value per question. A key is either unanswered or holds
/// a valid scale value; out-of-range input is rejected before storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AnswerSet {
    work: Option<u8>,
    relationship: Option<u8>,
    health: Option<u8>,
}

impl AnswerSet {
    /// Fresh set with all three questions unanswered.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: QuestionKey) -> Option<u8> {
        match key {
            QuestionKey::Work => self.work,
            QuestionKey::Relationship => self.relationship,
            QuestionKey::Health => self.health,
        }
    }

    /// Record an answer for one question. Other keys are never touched.
    pub fn set(&mut self, key: QuestionKey, value: u8) -> Result<(), AnswerError> {
        if !(SCALE_MIN..=SCALE_MAX).contains(&value) {
            return Err(AnswerError::ScaleOutOfRange(value));
        }
        let slot = match key {
            QuestionKey::Work => &mut self.work,
            QuestionKey::Relationship => &mut self.relationship,
            QuestionKey::Health => &mut self.health,
        };
        *slot = Some(value);
        Ok(())
    }

    pub fn answered(&self, key: QuestionKey) -> bool {
        self.get(key).is_some()
    }

    /// How many of the three questions have an answer.
    pub fn answered_count(&self) -> usize {
        QuestionKey::all()
            .iter()
            .filter(|k| self.answered(**k))
            .count()
    }

    pub fn all_answered(&self) -> bool {
        self.answered_count() == QUESTION_COUNT
    }

    /// Progress as a 0-100 percentage, for the header bar width.
    pub fn progress_percent(&self) -> f64 {
        self.answered_count() as f64 / QUESTION_COUNT as f64 * 100.0
    }

    /// Drop all answers back to unanswered.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
