//! Go-back command handler.

use std::sync::Arc;

use crate::domain::foundation::SessionToken;
use crate::ports::SessionStore;

use super::{snapshot_of, QuestionnaireOpError, QuestionnaireSnapshot};

/// Discards the most recent answer and restores its step.
pub struct GoBackHandler {
    store: Arc<dyn SessionStore>,
}

impl GoBackHandler {
    /// Creates the handler.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Steps back once.
    pub async fn handle(
        &self,
        token: SessionToken,
    ) -> Result<QuestionnaireSnapshot, QuestionnaireOpError> {
        let mut state = self.store.load(token).await?;
        state.engine.go_back()?;
        self.store.save(token, state.clone()).await?;
        Ok(snapshot_of(&state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::domain::questionnaire::{AnswerValue, QuestionnaireError, StepId};
    use crate::domain::session::SessionState;

    #[tokio::test]
    async fn back_restores_the_previous_step() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut state = SessionState::new(4);
        state
            .engine
            .advance(AnswerValue::choice("I have a budget in mind"))
            .unwrap();
        let token = store.create(state).await;

        let snapshot = GoBackHandler::new(store.clone()).handle(token).await.unwrap();
        assert_eq!(
            snapshot.current_step.unwrap().id,
            StepId::from("budget_gate")
        );
        assert!(snapshot.answers.is_empty());
    }

    #[tokio::test]
    async fn back_at_the_first_step_fails_cleanly() {
        let store = Arc::new(InMemorySessionStore::new());
        let token = store.create(SessionState::new(4)).await;

        let err = GoBackHandler::new(store).handle(token).await.unwrap_err();
        assert!(matches!(
            err,
            QuestionnaireOpError::Questionnaire(QuestionnaireError::AtFirstStep)
        ));
    }
}
