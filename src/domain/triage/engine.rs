//! The triage decision engine.
//!
//! A pure function over a completed answer sheet. Rules are evaluated in a
//! fixed precedence: first match wins. The rule set privileges
//! explosive-risk factors (listed travel, international travel, confirmed
//! contact, lab exposure) over a bare symptom report, and treats "all
//! clear" as the sole positive-reassurance path. A symptom report with no
//! matching risk factor, or risk factors with no symptoms, produces the
//! silent outcome.

use thiserror::Error;

use crate::domain::questionnaire::{AnswerSheet, AnswerValue, QuestionKey};

use super::TriageOutcome;

/// Contract-violation errors from the decision engine.
///
/// These must never surface to the end user: an incomplete sheet means the
/// sequencer's completion contract was broken upstream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriageError {
    #[error("answer sheet is incomplete: missing answer for '{key}'")]
    IncompleteAnswerSet { key: QuestionKey },
}

/// Maps a completed answer sheet to exactly one recommendation outcome.
///
/// Repeated evaluation of the same sheet yields the identical outcome.
///
/// # Errors
///
/// - `IncompleteAnswerSet` if any of the six questions is unanswered
pub fn evaluate(answers: &AnswerSheet) -> Result<TriageOutcome, TriageError> {
    // Completeness is checked up front, before any rule runs: partial
    // evaluation is never attempted.
    let symptoms = require(answers, QuestionKey::Symptoms)?;
    let travel = require(answers, QuestionKey::Travel)?;
    let international_travel = require(answers, QuestionKey::InternationalTravel)?;
    let close_contact = require(answers, QuestionKey::CloseContact)?;
    let covid19_contact = require(answers, QuestionKey::Covid19Contact)?;
    let covid19_lab_exposure = require(answers, QuestionKey::Covid19LabExposure)?;

    let all_clear = [
        symptoms,
        travel,
        international_travel,
        close_contact,
        covid19_contact,
        covid19_lab_exposure,
    ]
    .iter()
    .all(AnswerValue::is_no);

    if all_clear {
        return Ok(TriageOutcome::NoFurtherAssessment);
    }

    if symptoms.is_yes()
        && (travel.is_yes()
            || international_travel.is_yes()
            || covid19_contact.is_yes()
            || covid19_lab_exposure.is_yes())
    {
        return Ok(TriageOutcome::UrgentAssessment);
    }

    if symptoms.is_yes() && close_contact.is_yes() {
        return Ok(TriageOutcome::FurtherAssessment);
    }

    Ok(TriageOutcome::NoRecommendation)
}

fn require(answers: &AnswerSheet, key: QuestionKey) -> Result<AnswerValue, TriageError> {
    answers
        .get(key)
        .ok_or(TriageError::IncompleteAnswerSet { key })
}
