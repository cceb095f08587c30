//! Clear-chat command handler.

use std::sync::Arc;

use crate::domain::foundation::SessionToken;
use crate::ports::{SessionStore, SessionStoreError};

/// Drops the session's chat history.
pub struct ClearChatHandler {
    store: Arc<dyn SessionStore>,
}

impl ClearChatHandler {
    /// Creates the handler.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Clears the transcript.
    pub async fn handle(&self, token: SessionToken) -> Result<(), SessionStoreError> {
        let mut state = self.store.load(token).await?;
        state.transcript.clear();
        self.store.save(token, state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::domain::chat::ChatTurn;
    use crate::domain::session::SessionState;

    #[tokio::test]
    async fn clear_empties_the_transcript() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut state = SessionState::new(4);
        state
            .transcript
            .push_exchange(ChatTurn::user("q"), ChatTurn::assistant("a"));
        let token = store.create(state).await;

        ClearChatHandler::new(store.clone())
            .handle(token)
            .await
            .unwrap();
        assert!(store.load(token).await.unwrap().transcript.is_empty());
    }
}
