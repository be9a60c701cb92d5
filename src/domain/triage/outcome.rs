//! Triage recommendation outcomes.
//!
//! Recommendation wording is reproduced verbatim from the screening
//! protocol the rules were transcribed from; changing it changes clinical
//! behavior.

use serde::{Deserialize, Serialize};
use std::fmt;

const NO_FURTHER_ASSESSMENT_MESSAGE: &str = "no further assessment is required. Provide reassurance education. If they develop symptoms in the next 14 days, provide general advice";

const URGENT_ASSESSMENT_MESSAGE: &str = "Triage for medical assessment–these individuals require assessment/testing. The individual should be assessed in their local urgent care center or emergency room. Public health/ Health Links should call ahead and advise the facility that a an individual with a history of international travel in the previous 14 days or a contact of COVID-19 will be attending the facility and have symptoms of COVID-19. Inform the individual that they will be provided with a mask to wear and will be isolated upon arrival.";

const FURTHER_ASSESSMENT_MESSAGE: &str = "Further assessment is required to determine their risk of exposure to COVID-19. If symptoms are mild (e.g. upper respiratory tract symptoms), recommend observing symptoms, to call back if symptoms worsen, and self-isolate at home until symptoms are completely resolved. If symptoms worsen, they should be assessed in their local urgent care center or emergency room, and ensure they call ahead and inform them of their travel history.";

/// The terminal recommendation classification for a completed session.
///
/// Produced exactly once per completed session, never persisted beyond
/// emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageOutcome {
    /// Every screening answer was "No": reassure and educate.
    NoFurtherAssessment,

    /// Symptoms plus an explosive-risk factor (listed travel, international
    /// travel, confirmed contact, or lab exposure).
    UrgentAssessment,

    /// Symptoms plus close contact with an internationally-traveled
    /// symptomatic person.
    FurtherAssessment,

    /// No rule matched. Nothing is emitted; the session simply ends.
    NoRecommendation,
}

impl TriageOutcome {
    /// Returns the recommendation text, or `None` for the silent outcome.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            TriageOutcome::NoFurtherAssessment => Some(NO_FURTHER_ASSESSMENT_MESSAGE),
            TriageOutcome::UrgentAssessment => Some(URGENT_ASSESSMENT_MESSAGE),
            TriageOutcome::FurtherAssessment => Some(FURTHER_ASSESSMENT_MESSAGE),
            TriageOutcome::NoRecommendation => None,
        }
    }

    /// Returns true if this outcome emits no message.
    pub fn is_silent(&self) -> bool {
        matches!(self, TriageOutcome::NoRecommendation)
    }
}

impl fmt::Display for TriageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TriageOutcome::NoFurtherAssessment => "NoFurtherAssessment",
            TriageOutcome::UrgentAssessment => "UrgentAssessment",
            TriageOutcome::FurtherAssessment => "FurtherAssessment",
            TriageOutcome::NoRecommendation => "NoRecommendation",
        };
        write!(f, "{}", s)
    }
}
