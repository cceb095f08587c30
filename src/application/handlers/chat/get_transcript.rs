//! Transcript query handler.

use std::sync::Arc;

use crate::domain::chat::Transcript;
use crate::domain::foundation::SessionToken;
use crate::ports::{SessionStore, SessionStoreError};

/// Returns the session's chat history.
pub struct GetTranscriptHandler {
    store: Arc<dyn SessionStore>,
}

impl GetTranscriptHandler {
    /// Creates the handler.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// The full transcript, oldest turn first.
    pub async fn handle(&self, token: SessionToken) -> Result<Transcript, SessionStoreError> {
        let state = self.store.load(token).await?;
        Ok(state.transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::domain::chat::ChatTurn;
    use crate::domain::session::SessionState;

    #[tokio::test]
    async fn transcript_round_trips() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut state = SessionState::new(4);
        state
            .transcript
            .push_exchange(ChatTurn::user("q"), ChatTurn::assistant("a"));
        let token = store.create(state).await;

        let transcript = GetTranscriptHandler::new(store)
            .handle(token)
            .await
            .unwrap();
        assert_eq!(transcript.len(), 2);
    }
}
