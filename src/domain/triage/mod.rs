//! Triage domain module.
//!
//! Pure decision engine mapping a completed answer sheet to exactly one
//! recommendation outcome. Evaluated once per session, no mutation, no I/O.

mod engine;
mod outcome;

pub use engine::{evaluate, TriageError};
pub use outcome::TriageOutcome;
