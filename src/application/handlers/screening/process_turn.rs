//! ProcessTurnHandler - the sole external entry point, invoked once per
//! inbound message.
//!
//! Locates the session for the conversation (resume) or creates one
//! (start); when the sequencer reports completion, runs the triage engine,
//! emits its outcome, and discards the session state.
//!
//! The caller serializes turns per session and delivers each inbound event
//! at most once per turn; distinct sessions may be processed concurrently.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::questionnaire::{screening_script, QuestionPrompt, StepSequencer, TurnOutput};
use crate::domain::session::ScreeningSession;
use crate::domain::triage::{self, TriageError};
use crate::ports::{SessionStore, SessionStoreError};

/// Command carrying one inbound turn: `{ sessionId, value }`.
#[derive(Debug, Clone)]
pub struct ProcessTurnCommand {
    pub session_id: SessionId,
    pub value: String,
}

/// Outbound outcome contract: emitted exactly once on completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeMessage {
    pub text: String,
}

/// What the transport should do after one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnReply {
    /// Emit this prompt and wait for the user's next message.
    Question(QuestionPrompt),

    /// The interview finished with a recommendation; emit it and end the
    /// conversation.
    Outcome(OutcomeMessage),

    /// The interview finished with the silent outcome; end the
    /// conversation without emitting anything.
    SessionClosed,
}

/// Errors from processing a turn.
///
/// None of these are user-facing: validation rejections are handled inside
/// the turn as [`TurnReply::Question`] re-prompts.
#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    IncompleteAnswers(#[from] TriageError),

    #[error(transparent)]
    Store(#[from] SessionStoreError),
}

/// Handler for inbound screening turns.
pub struct ProcessTurnHandler {
    store: Arc<dyn SessionStore>,
}

impl ProcessTurnHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Processes one inbound message for a conversation.
    ///
    /// # Errors
    ///
    /// - `Store` on persistence failure
    /// - `Domain` / `IncompleteAnswers` on sequencing contract violations;
    ///   these indicate a defect and abort the turn
    pub async fn handle(&self, cmd: ProcessTurnCommand) -> Result<TurnReply, ScreeningError> {
        let sequencer = StepSequencer::new(screening_script());

        let Some(mut session) = self.store.load(&cmd.session_id).await? else {
            return self.start_session(&sequencer, cmd.session_id).await;
        };

        match sequencer.resume(&mut session, &cmd.value)? {
            TurnOutput::Rejected(prompt) => {
                tracing::warn!(
                    session_id = %cmd.session_id,
                    value = %cmd.value,
                    "answer rejected, re-emitting current question"
                );
                // Session unchanged, nothing to persist.
                Ok(TurnReply::Question(prompt))
            }
            TurnOutput::AwaitingAnswer(prompt) => {
                self.store.save(&session).await?;
                Ok(TurnReply::Question(prompt))
            }
            TurnOutput::Complete(answers) => {
                let outcome = triage::evaluate(&answers).map_err(|err| {
                    tracing::error!(
                        session_id = %cmd.session_id,
                        error = %err,
                        "triage engine invoked with incomplete answers"
                    );
                    err
                })?;

                self.store.delete(&cmd.session_id).await?;
                tracing::info!(session_id = %cmd.session_id, %outcome, "screening complete");

                match outcome.message() {
                    Some(text) => Ok(TurnReply::Outcome(OutcomeMessage {
                        text: text.to_string(),
                    })),
                    None => Ok(TurnReply::SessionClosed),
                }
            }
        }
    }

    async fn start_session(
        &self,
        sequencer: &StepSequencer<'_>,
        session_id: SessionId,
    ) -> Result<TurnReply, ScreeningError> {
        let mut session = ScreeningSession::new(session_id);
        let prompt = sequencer.start(&mut session)?;
        self.store.save(&session).await?;
        tracing::info!(session_id = %session.id(), "screening started");
        Ok(TurnReply::Question(prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySessionStore;
    use crate::domain::triage::TriageOutcome;
    use async_trait::async_trait;

    struct FailingStore;

    #[async_trait]
    impl SessionStore for FailingStore {
        async fn load(
            &self,
            _id: &SessionId,
        ) -> Result<Option<ScreeningSession>, SessionStoreError> {
            Err(SessionStoreError::Backend("simulated load failure".to_string()))
        }

        async fn save(&self, _session: &ScreeningSession) -> Result<(), SessionStoreError> {
            Err(SessionStoreError::Backend("simulated save failure".to_string()))
        }

        async fn delete(&self, _id: &SessionId) -> Result<(), SessionStoreError> {
            Err(SessionStoreError::Backend("simulated delete failure".to_string()))
        }
    }

    fn test_id(s: &str) -> SessionId {
        SessionId::new(s).unwrap()
    }

    fn handler() -> (ProcessTurnHandler, Arc<InMemorySessionStore>) {
        let store = Arc::new(InMemorySessionStore::new());
        (ProcessTurnHandler::new(store.clone()), store)
    }

    fn turn(session: &str, value: &str) -> ProcessTurnCommand {
        ProcessTurnCommand {
            session_id: test_id(session),
            value: value.to_string(),
        }
    }

    fn first_prompt() -> QuestionPrompt {
        screening_script().get(0).unwrap().to_prompt()
    }

    /// Runs the triggering message plus the six answers for one session.
    async fn run_interview(
        handler: &ProcessTurnHandler,
        session: &str,
        answers: [&str; 6],
    ) -> TurnReply {
        let mut reply = handler.handle(turn(session, "hi")).await.unwrap();
        for answer in answers {
            reply = handler.handle(turn(session, answer)).await.unwrap();
        }
        reply
    }

    #[tokio::test]
    async fn first_message_starts_session_and_asks_first_question() {
        let (handler, store) = handler();

        let reply = handler.handle(turn("s-1", "hello")).await.unwrap();

        assert_eq!(reply, TurnReply::Question(first_prompt()));
        assert!(store.contains(&test_id("s-1")));
    }

    #[tokio::test]
    async fn each_valid_answer_advances_one_question() {
        let (handler, _store) = handler();
        handler.handle(turn("s-1", "hi")).await.unwrap();

        let reply = handler.handle(turn("s-1", "No")).await.unwrap();

        assert_eq!(
            reply,
            TurnReply::Question(screening_script().get(1).unwrap().to_prompt())
        );
    }

    #[tokio::test]
    async fn invalid_answer_re_emits_same_question_without_advancing() {
        let (handler, store) = handler();
        handler.handle(turn("s-1", "hi")).await.unwrap();

        let before = store.load(&test_id("s-1")).await.unwrap().unwrap();
        let reply = handler.handle(turn("s-1", "Maybe")).await.unwrap();
        let after = store.load(&test_id("s-1")).await.unwrap().unwrap();

        assert_eq!(reply, TurnReply::Question(first_prompt()));
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn redelivered_invalid_event_is_idempotent() {
        let (handler, store) = handler();
        handler.handle(turn("s-1", "hi")).await.unwrap();
        handler.handle(turn("s-1", "Yes")).await.unwrap();

        let before = store.load(&test_id("s-1")).await.unwrap().unwrap();
        let first = handler.handle(turn("s-1", "Maybe")).await.unwrap();
        let second = handler.handle(turn("s-1", "Maybe")).await.unwrap();
        let after = store.load(&test_id("s-1")).await.unwrap().unwrap();

        assert_eq!(first, second);
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn all_no_interview_emits_reassurance_and_deletes_session() {
        let (handler, store) = handler();

        let reply = run_interview(&handler, "s-1", ["No"; 6]).await;

        match reply {
            TurnReply::Outcome(msg) => {
                assert_eq!(
                    msg.text,
                    TriageOutcome::NoFurtherAssessment.message().unwrap()
                );
            }
            other => panic!("Expected Outcome, got {:?}", other),
        }
        assert!(!store.contains(&test_id("s-1")));
    }

    #[tokio::test]
    async fn symptoms_and_travel_emit_urgent_assessment() {
        let (handler, _store) = handler();

        let reply =
            run_interview(&handler, "s-1", ["Yes", "Yes", "No", "No", "No", "No"]).await;

        match reply {
            TurnReply::Outcome(msg) => {
                assert_eq!(msg.text, TriageOutcome::UrgentAssessment.message().unwrap());
            }
            other => panic!("Expected Outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn silent_outcome_closes_session_without_message() {
        let (handler, store) = handler();

        // Symptoms only: falls through every rule.
        let reply =
            run_interview(&handler, "s-1", ["Yes", "No", "No", "No", "No", "No"]).await;

        assert_eq!(reply, TurnReply::SessionClosed);
        assert!(!store.contains(&test_id("s-1")));
    }

    #[tokio::test]
    async fn completed_session_id_can_start_a_fresh_interview() {
        let (handler, _store) = handler();
        run_interview(&handler, "s-1", ["No"; 6]).await;

        // Session state was discarded, so the same conversation ID starts over.
        let reply = handler.handle(turn("s-1", "hello again")).await.unwrap();
        assert_eq!(reply, TurnReply::Question(first_prompt()));
    }

    #[tokio::test]
    async fn distinct_sessions_are_independent() {
        let (handler, store) = handler();

        handler.handle(turn("s-1", "hi")).await.unwrap();
        handler.handle(turn("s-1", "Yes")).await.unwrap();
        handler.handle(turn("s-2", "hi")).await.unwrap();

        let s1 = store.load(&test_id("s-1")).await.unwrap().unwrap();
        let s2 = store.load(&test_id("s-2")).await.unwrap().unwrap();

        assert_eq!(s1.next_question(), 1);
        assert_eq!(s2.next_question(), 0);
    }

    #[tokio::test]
    async fn store_failure_aborts_the_turn() {
        let handler = ProcessTurnHandler::new(Arc::new(FailingStore));

        let result = handler.handle(turn("s-1", "hi")).await;

        assert!(matches!(result, Err(ScreeningError::Store(_))));
    }
}
