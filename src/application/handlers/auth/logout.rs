//! Logout command handler.

use std::sync::Arc;

use crate::domain::foundation::SessionToken;
use crate::ports::SessionStore;

/// Destroys the session for a token. Logging out an already-dead session
/// is a no-op, so logout never fails.
pub struct LogoutHandler {
    store: Arc<dyn SessionStore>,
}

impl LogoutHandler {
    /// Creates the handler.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Deletes the session.
    pub async fn handle(&self, token: SessionToken) {
        self.store.delete(token).await;
        tracing::info!(%token, "session destroyed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::domain::session::SessionState;

    #[tokio::test]
    async fn logout_removes_the_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let token = store.create(SessionState::new(4)).await;

        LogoutHandler::new(store.clone()).handle(token).await;
        assert!(!store.exists(token).await);
    }

    #[tokio::test]
    async fn double_logout_is_harmless() {
        let store = Arc::new(InMemorySessionStore::new());
        let token = store.create(SessionState::new(4)).await;

        let handler = LogoutHandler::new(store.clone());
        handler.handle(token).await;
        handler.handle(token).await;
        assert_eq!(store.session_count().await, 0);
    }
}
