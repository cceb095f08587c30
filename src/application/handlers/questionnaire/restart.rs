//! Restart command handler.

use std::sync::Arc;

use crate::domain::foundation::SessionToken;
use crate::ports::SessionStore;

use super::{snapshot_of, QuestionnaireOpError, QuestionnaireSnapshot};

/// Clears the questionnaire, the recommendations, and the comparison
/// selection, returning the session to the first step. This is the
/// explicit gesture that re-arms recommendation generation.
pub struct RestartHandler {
    store: Arc<dyn SessionStore>,
}

impl RestartHandler {
    /// Creates the handler.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Restarts the questionnaire.
    pub async fn handle(
        &self,
        token: SessionToken,
    ) -> Result<QuestionnaireSnapshot, QuestionnaireOpError> {
        let mut state = self.store.load(token).await?;
        state.restart_questionnaire();
        self.store.save(token, state.clone()).await?;
        Ok(snapshot_of(&state))
    }
}
