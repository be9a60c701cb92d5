//! The closed answer value type for screening questions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A recorded answer to a screening question.
///
/// The interview is choice-only: the wire labels `"Yes"` and `"No"` are the
/// entire acceptable-value set, matched exactly. Anything else is rejected
/// before it reaches the answer store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerValue {
    Yes,
    No,
}

impl AnswerValue {
    /// Returns the wire label for this answer.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerValue::Yes => "Yes",
            AnswerValue::No => "No",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, AnswerValue::Yes)
    }

    pub fn is_no(&self) -> bool {
        matches!(self, AnswerValue::No)
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnswerValue {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(AnswerValue::Yes),
            "No" => Ok(AnswerValue::No),
            other => Err(ValidationError::invalid_format(
                "answer",
                format!("'{}' is not one of Yes/No", other),
            )),
        }
    }
}
