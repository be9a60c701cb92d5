//! Questionnaire domain module.
//!
//! The screening interview is a flat, ordered list of typed question
//! descriptors consumed by a single generic ask-record-advance loop.
//!
//! - `AnswerValue` - the closed yes/no answer type
//! - `Question` / `QuestionKey` - one step of the interview
//! - `Script` - the fixed six-question order, built once at process start
//! - `AnswerSheet` - append-only store of collected answers
//! - `StepSequencer` - drives one question per turn and detects completion

mod answer;
mod answer_sheet;
mod question;
mod script;
mod sequencer;

pub use answer::AnswerValue;
pub use answer_sheet::AnswerSheet;
pub use question::{Question, QuestionKey, QuestionPrompt};
pub use script::{screening_script, Script};
pub use sequencer::{StepSequencer, TurnOutput};
