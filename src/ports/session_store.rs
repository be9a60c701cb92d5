//! Session store port.
//!
//! Defines the contract for persisting and retrieving screening sessions
//! between turns. The core never implements durable storage itself; the
//! hosting runtime supplies the backend and is responsible for cleaning up
//! abandoned sessions.
//!
//! # Design
//!
//! - **Keyed by `SessionId`**: one session per conversation
//! - **Whole-aggregate writes**: a session is small and saved atomically
//! - **No locking**: callers serialize turns for a given session

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::session::ScreeningSession;

/// Errors that can occur during session store operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Failed to serialize session state: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session state: {0}")]
    DeserializationFailed(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Port for persisting and loading screening sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the session for a conversation.
    ///
    /// Returns `None` if no session is stored; the controller treats that
    /// as an implicit start, never as an error.
    async fn load(&self, id: &SessionId) -> Result<Option<ScreeningSession>, SessionStoreError>;

    /// Save a session, replacing any previous state for the same ID.
    ///
    /// # Errors
    ///
    /// - `Backend` / `SerializationFailed` on persistence failure
    async fn save(&self, session: &ScreeningSession) -> Result<(), SessionStoreError>;

    /// Delete the session for a conversation.
    ///
    /// Deleting an absent session is not an error.
    async fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn session_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SessionStore) {}
    }

    #[test]
    fn store_error_displays_backend_detail() {
        let err = SessionStoreError::Backend("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn store_error_displays_serialization_detail() {
        let err = SessionStoreError::SerializationFailed("bad payload".to_string());
        assert!(err.to_string().contains("serialize"));
    }
}
