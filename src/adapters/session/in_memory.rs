//! In-memory session store.
//!
//! Process-local map from bearer token to session state. State lives only
//! for the lifetime of the process; logout or restart destroys it, which
//! is the intended persistence model.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionToken;
use crate::domain::session::SessionState;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory implementation of the session store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, SessionState>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops every session (test helper).
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, state: SessionState) -> SessionToken {
        let token = SessionToken::new();
        self.sessions.write().await.insert(token, state);
        token
    }

    async fn load(&self, token: SessionToken) -> Result<SessionState, SessionStoreError> {
        self.sessions
            .read()
            .await
            .get(&token)
            .cloned()
            .ok_or(SessionStoreError::NotFound)
    }

    async fn save(
        &self,
        token: SessionToken,
        state: SessionState,
    ) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&token) {
            Some(slot) => {
                *slot = state;
                Ok(())
            }
            // A save against a token that logged out in the meantime
            // must not resurrect the session.
            None => Err(SessionStoreError::NotFound),
        }
    }

    async fn exists(&self, token: SessionToken) -> bool {
        self.sessions.read().await.contains_key(&token)
    }

    async fn delete(&self, token: SessionToken) {
        self.sessions.write().await.remove(&token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_load_round_trips() {
        let store = InMemorySessionStore::new();
        let token = store.create(SessionState::new(4)).await;

        assert!(store.exists(token).await);
        let state = store.load(token).await.unwrap();
        assert!(state.recommendations.is_none());
    }

    #[tokio::test]
    async fn unknown_token_is_not_found() {
        let store = InMemorySessionStore::new();
        let result = store.load(SessionToken::new()).await;
        assert_eq!(result.unwrap_err(), SessionStoreError::NotFound);
    }

    #[tokio::test]
    async fn save_persists_mutations() {
        let store = InMemorySessionStore::new();
        let token = store.create(SessionState::new(4)).await;

        let mut state = store.load(token).await.unwrap();
        state.transcript.push_exchange(
            crate::domain::chat::ChatTurn::user("q"),
            crate::domain::chat::ChatTurn::assistant("a"),
        );
        store.save(token, state).await.unwrap();

        assert_eq!(store.load(token).await.unwrap().transcript.len(), 2);
    }

    #[tokio::test]
    async fn save_after_delete_does_not_resurrect() {
        let store = InMemorySessionStore::new();
        let token = store.create(SessionState::new(4)).await;
        let state = store.load(token).await.unwrap();

        store.delete(token).await;
        assert!(store.save(token, state).await.is_err());
        assert!(!store.exists(token).await);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = InMemorySessionStore::new();
        let token = store.create(SessionState::new(4)).await;
        store.delete(token).await;
        store.delete(token).await;
        assert_eq!(store.session_count().await, 0);
    }
}
