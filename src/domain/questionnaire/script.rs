//! The fixed screening script.
//!
//! Prompt wording is reproduced verbatim from the screening protocol the
//! interview was transcribed from; changing it changes clinical behavior.

use once_cell::sync::Lazy;

use super::{Question, QuestionKey};

/// The choice set shared by every screening question.
const YES_NO: &[&str] = &["Yes", "No"];

static SCREENING_SCRIPT: Lazy<Script> = Lazy::new(|| {
    Script::new(vec![
        Question::new(
            QuestionKey::Symptoms,
            "Do you have any of the below symptoms ? Fever > 38 C or subjective fever, Cough,Shortness of breath/breathing diffuclties, other symptoms such as muscle aches, headache, sore throat, runny nose, diarrhea. Note symptoms in young children may be non-specific – e.g. lethargy, poor feeding.",
            YES_NO,
        ),
        Question::new(
            QuestionKey::Travel,
            "Have you travelled in the last 14 days to Hubei Province (including Wuhan) in China, Iran, or Italy?",
            YES_NO,
        ),
        Question::new(
            QuestionKey::InternationalTravel,
            "Have you travelled internationally in the last 14 days?",
            YES_NO,
        ),
        Question::new(
            QuestionKey::CloseContact,
            "Have you had close contact (face-to-face contact within 2 meters/6 feet) with someone who is ill with cough and/or fever who has traveled internationally within 14 days prior to their illness onset? (Contact may be in Canada or during travel)",
            YES_NO,
        ),
        Question::new(
            QuestionKey::Covid19Contact,
            "Have you been in contact in the last 14 days with someone that is confirmed to be a case of COVID-19?",
            YES_NO,
        ),
        Question::new(
            QuestionKey::Covid19LabExposure,
            "Have you had laboratory exposure while working directly with specimens known to contain COVID-19?",
            YES_NO,
        ),
    ])
});

/// Returns the fixed six-question screening script, built once per process.
pub fn screening_script() -> &'static Script {
    &SCREENING_SCRIPT
}

/// An ordered, immutable sequence of screening questions.
///
/// # Invariants
///
/// - Question keys are unique
/// - Order never changes after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    questions: Vec<Question>,
}

impl Script {
    pub fn new(questions: Vec<Question>) -> Self {
        debug_assert!(
            {
                let mut keys: Vec<_> = questions.iter().map(|q| q.key()).collect();
                keys.sort_by_key(|k| k.as_str());
                keys.windows(2).all(|w| w[0] != w[1])
            },
            "script question keys must be unique"
        );
        Self { questions }
    }

    /// Returns the number of questions in the script.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Returns the question at the given ordinal position.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Iterates questions in interview order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
