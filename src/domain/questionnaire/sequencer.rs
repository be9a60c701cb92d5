//! Step sequencer - drives one question per turn, in fixed order.
//!
//! The sequencer owns no state of its own; it consumes the script and
//! mutates the session passed in by the caller. The interview is linear:
//! strictly forward by one index per valid answer, no skipping, no
//! branching on answer content.

use crate::domain::foundation::{DomainError, ErrorCode, SessionPhase};
use crate::domain::session::ScreeningSession;

use super::{AnswerSheet, Question, QuestionPrompt, Script};

/// Result of feeding one inbound value to the sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutput {
    /// The answer was recorded; emit this prompt and wait for the next turn.
    AwaitingAnswer(QuestionPrompt),

    /// The value was outside the question's choice set. The session is
    /// unchanged; the identical prompt is re-emitted. Recoverable, never fatal.
    Rejected(QuestionPrompt),

    /// Every question is answered; the finished answer sheet is ready for
    /// triage evaluation.
    Complete(AnswerSheet),
}

/// Drives a [`ScreeningSession`] through the fixed question script.
#[derive(Debug, Clone, Copy)]
pub struct StepSequencer<'a> {
    script: &'a Script,
}

impl<'a> StepSequencer<'a> {
    pub fn new(script: &'a Script) -> Self {
        Self { script }
    }

    /// Starts the interview and returns the first question's prompt.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the interview already started
    /// - `QuestionOutOfRange` if the script is empty
    pub fn start(&self, session: &mut ScreeningSession) -> Result<QuestionPrompt, DomainError> {
        session.begin()?;
        Ok(self.question_at(0)?.to_prompt())
    }

    /// Feeds one inbound value to the session at its current position.
    ///
    /// A `NotStarted` session behaves as [`start`](Self::start): the inbound
    /// value only triggers the interview and is not treated as an answer.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the session is already complete
    /// - `QuestionOutOfRange`, `AnswerAlreadyRecorded` on sequencing defects
    pub fn resume(
        &self,
        session: &mut ScreeningSession,
        raw_value: &str,
    ) -> Result<TurnOutput, DomainError> {
        if session.phase() == SessionPhase::NotStarted {
            return Ok(TurnOutput::AwaitingAnswer(self.start(session)?));
        }
        if !session.phase().accepts_answer() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Session {} is already complete", session.id()),
            ));
        }

        let question = self.question_at(session.next_question())?;
        let value = match question.parse_answer(raw_value) {
            Ok(value) => value,
            // Out-of-set value: re-emit the same question, index unchanged.
            Err(_) => return Ok(TurnOutput::Rejected(question.to_prompt())),
        };

        session.record_answer(question.key(), value)?;

        match self.script.get(session.next_question()) {
            Some(next) => Ok(TurnOutput::AwaitingAnswer(next.to_prompt())),
            None => {
                session.complete()?;
                Ok(TurnOutput::Complete(session.answers().clone()))
            }
        }
    }

    fn question_at(&self, index: usize) -> Result<&Question, DomainError> {
        self.script.get(index).ok_or_else(|| {
            DomainError::new(
                ErrorCode::QuestionOutOfRange,
                format!("No question at index {}", index),
            )
        })
    }
}
