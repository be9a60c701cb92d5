//! Append-only store of collected answers for one session.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{DomainError, ErrorCode};

use super::{AnswerValue, QuestionKey};

/// The answers collected so far in one screening session.
///
/// # Invariants
///
/// - One answer per question key
/// - Answers are appended, never overwritten
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    answers: HashMap<QuestionKey, AnswerValue>,
}

impl AnswerSheet {
    /// Creates an empty answer sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer for a question.
    ///
    /// # Errors
    ///
    /// - `AnswerAlreadyRecorded` if the key was answered before. Once
    ///   written for a session an answer is never modified; a second write
    ///   indicates a sequencing defect, not user error.
    pub fn record(&mut self, key: QuestionKey, value: AnswerValue) -> Result<(), DomainError> {
        if self.answers.contains_key(&key) {
            return Err(DomainError::new(
                ErrorCode::AnswerAlreadyRecorded,
                format!("Answer for '{}' was already recorded", key),
            ));
        }
        self.answers.insert(key, value);
        Ok(())
    }

    /// Returns the recorded answer for a key, if any.
    pub fn get(&self, key: QuestionKey) -> Option<AnswerValue> {
        self.answers.get(&key).copied()
    }

    /// Returns true if the key has been answered.
    pub fn contains(&self, key: QuestionKey) -> bool {
        self.answers.contains_key(&key)
    }

    /// Returns the number of recorded answers.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
