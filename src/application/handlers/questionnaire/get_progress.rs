//! Progress query handler.

use std::sync::Arc;

use crate::domain::foundation::SessionToken;
use crate::ports::SessionStore;

use super::{snapshot_of, QuestionnaireOpError, QuestionnaireSnapshot};

/// Read-only snapshot of the questionnaire.
pub struct GetProgressHandler {
    store: Arc<dyn SessionStore>,
}

impl GetProgressHandler {
    /// Creates the handler.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns the current snapshot without mutating anything.
    pub async fn handle(
        &self,
        token: SessionToken,
    ) -> Result<QuestionnaireSnapshot, QuestionnaireOpError> {
        let state = self.store.load(token).await?;
        Ok(snapshot_of(&state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::domain::questionnaire::StepId;
    use crate::domain::session::SessionState;

    #[tokio::test]
    async fn fresh_session_reports_the_first_step() {
        let store = Arc::new(InMemorySessionStore::new());
        let token = store.create(SessionState::new(4)).await;

        let snapshot = GetProgressHandler::new(store).handle(token).await.unwrap();
        assert_eq!(
            snapshot.current_step.unwrap().id,
            StepId::from("budget_gate")
        );
        assert_eq!(snapshot.progress.answered, 0);
        assert!(!snapshot.progress.complete);
    }
}
