//! Submit-review command handler.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{SessionToken, ValidationError};
use crate::domain::review::{Review, ReviewDraft};
use crate::ports::{SessionStore, SessionStoreError};

/// Command to submit a review.
#[derive(Debug, Clone)]
pub struct SubmitReviewCommand {
    pub token: SessionToken,
    pub draft: ReviewDraft,
}

/// Review submission failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitReviewError {
    #[error(transparent)]
    Session(#[from] SessionStoreError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Validates and stores a review in the session.
pub struct SubmitReviewHandler {
    store: Arc<dyn SessionStore>,
}

impl SubmitReviewHandler {
    /// Creates the handler.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Publishes the review.
    pub async fn handle(&self, cmd: SubmitReviewCommand) -> Result<Review, SubmitReviewError> {
        let review = Review::from_draft(cmd.draft)?;

        let mut state = self.store.load(cmd.token).await?;
        state.reviews.push(review.clone());
        self.store.save(cmd.token, state).await?;

        Ok(review)
    }
}
