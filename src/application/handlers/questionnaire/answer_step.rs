//! Answer-step command handler.

use std::sync::Arc;

use crate::domain::foundation::SessionToken;
use crate::domain::questionnaire::AnswerValue;
use crate::ports::SessionStore;

use super::{snapshot_of, QuestionnaireOpError, QuestionnaireSnapshot};

/// Command to answer the current step.
#[derive(Debug, Clone)]
pub struct AnswerStepCommand {
    pub token: SessionToken,
    pub answer: AnswerValue,
}

/// Validates and records an answer, advancing the questionnaire.
pub struct AnswerStepHandler {
    store: Arc<dyn SessionStore>,
}

impl AnswerStepHandler {
    /// Creates the handler.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Applies the answer. On validation failure the session is untouched.
    pub async fn handle(
        &self,
        cmd: AnswerStepCommand,
    ) -> Result<QuestionnaireSnapshot, QuestionnaireOpError> {
        let mut state = self.store.load(cmd.token).await?;
        state.engine.advance(cmd.answer)?;
        self.store.save(cmd.token, state.clone()).await?;
        Ok(snapshot_of(&state))
    }
}
