//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Unique identifier for a screening session.
///
/// Assigned by the hosting transport (one per conversation), never
/// generated inside the crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new SessionId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("session_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_accepts_non_empty_string() {
        let id = SessionId::new("conversation-123").unwrap();
        assert_eq!(id.as_str(), "conversation-123");
    }

    #[test]
    fn session_id_rejects_empty_string() {
        let result = SessionId::new("");
        assert!(result.is_err());
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "session_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn session_id_displays_correctly() {
        let id = SessionId::new("conversation-456").unwrap();
        assert_eq!(format!("{}", id), "conversation-456");
    }

    #[test]
    fn session_id_serializes_transparently() {
        let id = SessionId::new("conversation-789").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"conversation-789\"");
    }
}
