//! In-memory session store implementation for testing.
//!
//! Provides synchronous, deterministic session persistence for unit tests
//! and local development.
//!
//! # Security Note
//!
//! This adapter is for **testing only** and should not be used in
//! production. It uses `.expect()` on lock operations which will panic if
//! locks are poisoned. Production deployments supply a durable
//! `SessionStore` backend behind the same port.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::SessionId;
use crate::domain::session::ScreeningSession;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory session store for testing.
///
/// Features:
/// - Deterministic, synchronous storage
/// - Assertion helpers for tests
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned. This is acceptable
/// for test code but this adapter should NOT be used in production.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, ScreeningSession>>,
}

impl InMemorySessionStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    // === Test Helpers ===

    /// Returns the number of stored sessions (for test assertions).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn session_count(&self) -> usize {
        self.sessions
            .read()
            .expect("InMemorySessionStore: sessions lock poisoned")
            .len()
    }

    /// Checks if a session is stored for the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn contains(&self, id: &SessionId) -> bool {
        self.sessions
            .read()
            .expect("InMemorySessionStore: sessions lock poisoned")
            .contains_key(id)
    }

    /// Clears all stored sessions (for test isolation).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn clear(&self) {
        self.sessions
            .write()
            .expect("InMemorySessionStore: sessions write lock poisoned")
            .clear();
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, id: &SessionId) -> Result<Option<ScreeningSession>, SessionStoreError> {
        Ok(self
            .sessions
            .read()
            .expect("InMemorySessionStore: sessions lock poisoned")
            .get(id)
            .cloned())
    }

    async fn save(&self, session: &ScreeningSession) -> Result<(), SessionStoreError> {
        self.sessions
            .write()
            .expect("InMemorySessionStore: sessions write lock poisoned")
            .insert(session.id().clone(), session.clone());
        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        self.sessions
            .write()
            .expect("InMemorySessionStore: sessions write lock poisoned")
            .remove(id);
        Ok(())
    }
}
