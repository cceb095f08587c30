//! Review listing and rating aggregation.

use std::sync::Arc;

use crate::domain::foundation::SessionToken;
use crate::domain::review::{RatingSummary, Review};
use crate::ports::{SessionStore, SessionStoreError};

/// Query for the session's reviews.
#[derive(Debug, Clone, Default)]
pub struct ListReviewsQuery {
    /// Filter to one car when both are set.
    pub make: Option<String>,
    pub model: Option<String>,
}

/// Listing plus aggregated ratings over the same filter.
#[derive(Debug, Clone)]
pub struct ReviewListing {
    pub reviews: Vec<Review>,
    pub summary: RatingSummary,
}

/// Lists reviews, optionally filtered by car.
pub struct ListReviewsHandler {
    store: Arc<dyn SessionStore>,
}

impl ListReviewsHandler {
    /// Creates the handler.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns the matching reviews, newest first, with their summary.
    pub async fn handle(
        &self,
        token: SessionToken,
        query: ListReviewsQuery,
    ) -> Result<ReviewListing, SessionStoreError> {
        let state = self.store.load(token).await?;

        let mut reviews: Vec<Review> = state
            .reviews
            .iter()
            .filter(|review| match (&query.make, &query.model) {
                (Some(make), Some(model)) => review.is_about(make, model),
                (Some(make), None) => review.car_make.eq_ignore_ascii_case(make),
                _ => true,
            })
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));

        let summary = RatingSummary::aggregate(reviews.iter());
        Ok(ReviewListing { reviews, summary })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::domain::session::SessionState;

    #[tokio::test]
    async fn unfiltered_listing_returns_the_seeded_samples() {
        let store = Arc::new(InMemorySessionStore::new());
        let token = store.create(SessionState::new(4)).await;

        let listing = ListReviewsHandler::new(store)
            .handle(token, ListReviewsQuery::default())
            .await
            .unwrap();

        assert_eq!(listing.reviews.len(), 3);
        assert_eq!(listing.summary.review_count, 3);
        assert!(listing.summary.overall > 0.0);
    }

    #[tokio::test]
    async fn filter_by_car_narrows_the_listing() {
        let store = Arc::new(InMemorySessionStore::new());
        let token = store.create(SessionState::new(4)).await;

        let listing = ListReviewsHandler::new(store)
            .handle(
                token,
                ListReviewsQuery {
                    make: Some("honda".to_string()),
                    model: Some("city".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(listing.reviews.len(), 1);
        assert_eq!(listing.reviews[0].car_make, "Honda");
    }

    #[tokio::test]
    async fn filter_with_no_matches_is_empty_not_an_error() {
        let store = Arc::new(InMemorySessionStore::new());
        let token = store.create(SessionState::new(4)).await;

        let listing = ListReviewsHandler::new(store)
            .handle(
                token,
                ListReviewsQuery {
                    make: Some("Ferrari".to_string()),
                    model: None,
                },
            )
            .await
            .unwrap();

        assert!(listing.reviews.is_empty());
        assert_eq!(listing.summary.review_count, 0);
    }
}
