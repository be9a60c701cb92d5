//! Question descriptors and the outbound prompt contract.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

use super::AnswerValue;

/// Stable key identifying one screening question.
///
/// Keys are part of the persisted answer-sheet format and of the wire
/// contract, so variants serialize camelCase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionKey {
    Symptoms,
    Travel,
    InternationalTravel,
    CloseContact,
    Covid19Contact,
    Covid19LabExposure,
}

impl QuestionKey {
    /// Every question key, in the fixed interview order.
    pub const ALL: [QuestionKey; 6] = [
        QuestionKey::Symptoms,
        QuestionKey::Travel,
        QuestionKey::InternationalTravel,
        QuestionKey::CloseContact,
        QuestionKey::Covid19Contact,
        QuestionKey::Covid19LabExposure,
    ];

    /// Returns the wire/persistence name of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKey::Symptoms => "symptoms",
            QuestionKey::Travel => "travel",
            QuestionKey::InternationalTravel => "internationalTravel",
            QuestionKey::CloseContact => "closeContact",
            QuestionKey::Covid19Contact => "covid19Contact",
            QuestionKey::Covid19LabExposure => "covid19LabExposure",
        }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One step of the interview: stable key, prompt text, acceptable choices.
///
/// Immutable; the full set is defined once at process start in the
/// [`Script`](super::Script).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    key: QuestionKey,
    prompt: &'static str,
    choices: &'static [&'static str],
}

impl Question {
    pub const fn new(
        key: QuestionKey,
        prompt: &'static str,
        choices: &'static [&'static str],
    ) -> Self {
        Self { key, prompt, choices }
    }

    pub fn key(&self) -> QuestionKey {
        self.key
    }

    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    pub fn choices(&self) -> &'static [&'static str] {
        self.choices
    }

    /// Validates a raw inbound value against this question's choice set.
    ///
    /// # Errors
    ///
    /// - `RejectedChoice` if the value is not one of the acceptable labels
    pub fn parse_answer(&self, raw: &str) -> Result<AnswerValue, ValidationError> {
        if !self.choices.contains(&raw) {
            return Err(ValidationError::rejected_choice(self.key.as_str(), raw));
        }
        raw.parse()
    }

    /// Builds the outbound prompt for this question.
    pub fn to_prompt(&self) -> QuestionPrompt {
        QuestionPrompt {
            text: self.prompt.to_string(),
            choices: self.choices.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Outbound prompt contract: the question text and its ordered choices.
///
/// Emitted once per turn while the interview is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPrompt {
    pub text: String,
    pub choices: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const YES_NO: &[&str] = &["Yes", "No"];

    fn test_question() -> Question {
        Question::new(QuestionKey::Symptoms, "Any symptoms?", YES_NO)
    }

    #[test]
    fn key_order_is_fixed() {
        assert_eq!(QuestionKey::ALL[0], QuestionKey::Symptoms);
        assert_eq!(QuestionKey::ALL[5], QuestionKey::Covid19LabExposure);
        assert_eq!(QuestionKey::ALL.len(), 6);
    }

    #[test]
    fn key_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&QuestionKey::InternationalTravel).unwrap(),
            "\"internationalTravel\""
        );
        assert_eq!(
            serde_json::to_string(&QuestionKey::Covid19LabExposure).unwrap(),
            "\"covid19LabExposure\""
        );
    }

    #[test]
    fn key_display_matches_wire_name() {
        assert_eq!(QuestionKey::CloseContact.to_string(), "closeContact");
    }

    #[test]
    fn parse_answer_accepts_listed_choice() {
        let q = test_question();
        assert_eq!(q.parse_answer("Yes").unwrap(), AnswerValue::Yes);
        assert_eq!(q.parse_answer("No").unwrap(), AnswerValue::No);
    }

    #[test]
    fn parse_answer_rejects_out_of_set_value() {
        let q = test_question();
        let err = q.parse_answer("Maybe").unwrap_err();
        assert!(err.to_string().contains("Maybe"));
        assert!(err.to_string().contains("symptoms"));
    }

    #[test]
    fn to_prompt_carries_text_and_choices_in_order() {
        let prompt = test_question().to_prompt();
        assert_eq!(prompt.text, "Any symptoms?");
        assert_eq!(prompt.choices, vec!["Yes", "No"]);
    }

    #[test]
    fn prompt_round_trips_through_json() {
        let prompt = test_question().to_prompt();
        let json = serde_json::to_string(&prompt).unwrap();
        let back: QuestionPrompt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prompt);
    }
}
