//! Screening session aggregate entity.
//!
//! # Ownership
//!
//! A session is exclusively owned by one active conversation. The caller
//! serializes turns for a session; distinct sessions are fully independent.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, ErrorCode, SessionId, SessionPhase, StateMachine, Timestamp,
};
use crate::domain::questionnaire::{AnswerSheet, AnswerValue, QuestionKey};

/// One user's run through the screening questionnaire.
///
/// # Invariants
///
/// - `next_question` advances by exactly one per recorded answer
/// - the answer sheet is append-only
/// - a `Complete` session is read-only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningSession {
    /// Identifier assigned by the transport (one per conversation).
    id: SessionId,

    /// Lifecycle phase (NotStarted, InProgress, Complete).
    phase: SessionPhase,

    /// Ordinal index of the next unanswered question.
    next_question: usize,

    /// Answers collected so far.
    answers: AnswerSheet,

    /// When the session was created.
    created_at: Timestamp,

    /// When the session was last updated.
    updated_at: Timestamp,
}

impl ScreeningSession {
    /// Creates a new session awaiting its first turn.
    pub fn new(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            phase: SessionPhase::NotStarted,
            next_question: 0,
            answers: AnswerSheet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a session from persistence (no validation, no events).
    pub fn reconstitute(
        id: SessionId,
        phase: SessionPhase,
        next_question: usize,
        answers: AnswerSheet,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            phase,
            next_question,
            answers,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Returns the ordinal index of the next unanswered question.
    pub fn next_question(&self) -> usize {
        self.next_question
    }

    /// Returns the answers collected so far.
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the session was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Starts the interview: first question becomes the awaited one.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the interview already started
    pub fn begin(&mut self) -> Result<(), DomainError> {
        if !self.phase.can_transition_to(&SessionPhase::InProgress) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Interview has already started",
            ));
        }
        self.phase = SessionPhase::InProgress;
        self.next_question = 0;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Records the answer to the currently awaited question and advances
    /// the index by one.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the session does not accept answers
    /// - `AnswerAlreadyRecorded` if the key was answered before
    pub fn record_answer(
        &mut self,
        key: QuestionKey,
        value: AnswerValue,
    ) -> Result<(), DomainError> {
        if !self.phase.accepts_answer() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Session in phase {} does not accept answers", self.phase),
            ));
        }
        self.answers.record(key, value)?;
        self.next_question += 1;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Marks the interview complete once the question list is exhausted.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the session is not in progress
    pub fn complete(&mut self) -> Result<(), DomainError> {
        if !self.phase.can_transition_to(&SessionPhase::Complete) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot complete a session in phase {}", self.phase),
            ));
        }
        self.phase = SessionPhase::Complete;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}
