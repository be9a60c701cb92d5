//! SessionPhase enum for tracking the lifecycle of a screening session.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle phase of a screening session.
///
/// Sessions move strictly forward:
/// - `NotStarted`: aggregate created, no question asked yet
/// - `InProgress`: a question has been emitted, awaiting the answer
/// - `Complete`: every question answered, ready for triage evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    NotStarted,
    InProgress,
    Complete,
}

impl SessionPhase {
    /// Returns true if an inbound answer can be recorded in this phase.
    pub fn accepts_answer(&self) -> bool {
        matches!(self, SessionPhase::InProgress)
    }
}

impl StateMachine for SessionPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionPhase::*;
        matches!((self, target), (NotStarted, InProgress) | (InProgress, Complete))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionPhase::*;
        match self {
            NotStarted => vec![InProgress],
            InProgress => vec![Complete],
            Complete => vec![],
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionPhase::NotStarted => "NotStarted",
            SessionPhase::InProgress => "InProgress",
            SessionPhase::Complete => "Complete",
        };
        write!(f, "{}", s)
    }
}
