//! Add/remove/clear commands for the comparison set.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::comparison::ComparisonError;
use crate::domain::foundation::{RecommendationId, SessionToken};
use crate::ports::{SessionStore, SessionStoreError};

/// A mutation of the comparison set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonAction {
    Add(RecommendationId),
    Remove(RecommendationId),
    Clear,
}

/// Command to mutate the comparison set.
#[derive(Debug, Clone)]
pub struct UpdateComparisonCommand {
    pub token: SessionToken,
    pub action: ComparisonAction,
}

/// Comparison mutation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateComparisonError {
    #[error(transparent)]
    Session(#[from] SessionStoreError),

    #[error(transparent)]
    Comparison(#[from] ComparisonError),
}

/// Handles comparison-set mutations.
pub struct UpdateComparisonHandler {
    store: Arc<dyn SessionStore>,
}

impl UpdateComparisonHandler {
    /// Creates the handler.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Applies the action. Adding requires the id to belong to one of the
    /// session's generated recommendations.
    pub async fn handle(
        &self,
        cmd: UpdateComparisonCommand,
    ) -> Result<usize, UpdateComparisonError> {
        let mut state = self.store.load(cmd.token).await?;

        match cmd.action {
            ComparisonAction::Add(id) => {
                if state.find_recommendation(&id).is_none() {
                    return Err(ComparisonError::UnknownRecommendation(id).into());
                }
                state.comparison.add(id)?;
            }
            ComparisonAction::Remove(id) => {
                state.comparison.remove(&id)?;
            }
            ComparisonAction::Clear => state.comparison.clear(),
        }

        let len = state.comparison.len();
        self.store.save(cmd.token, state).await?;
        Ok(len)
    }
}
