//! Stored-recommendations query handler.

use std::sync::Arc;

use crate::domain::foundation::SessionToken;
use crate::domain::recommendation::Recommendation;
use crate::ports::{SessionStore, SessionStoreError};

/// Returns the session's stored recommendations without generating.
pub struct ListRecommendationsHandler {
    store: Arc<dyn SessionStore>,
}

impl ListRecommendationsHandler {
    /// Creates the handler.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// `None` means generation has not happened yet.
    pub async fn handle(
        &self,
        token: SessionToken,
    ) -> Result<Option<Vec<Recommendation>>, SessionStoreError> {
        let state = self.store.load(token).await?;
        Ok(state.recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::domain::session::SessionState;

    #[tokio::test]
    async fn fresh_session_has_none() {
        let store = Arc::new(InMemorySessionStore::new());
        let token = store.create(SessionState::new(4)).await;

        let result = ListRecommendationsHandler::new(store)
            .handle(token)
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
