//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod screening;

pub use screening::{
    OutcomeMessage, ProcessTurnCommand, ProcessTurnHandler, ScreeningError, TurnReply,
};
