//! Screening interview handlers.

mod process_turn;

pub use process_turn::{
    OutcomeMessage, ProcessTurnCommand, ProcessTurnHandler, ScreeningError, TurnReply,
};
