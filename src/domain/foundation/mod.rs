//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Screening Sherpa domain.

mod errors;
mod ids;
mod session_phase;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use session_phase::SessionPhase;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
