//! Session domain module.
//!
//! A screening session is the lifetime of one user's run through the
//! questionnaire, from the first question to outcome emission or
//! abandonment. Abandoned sessions are the persistence collaborator's
//! concern; the aggregate simply never resumes.

mod aggregate;

pub use aggregate::ScreeningSession;
