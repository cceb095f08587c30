//! HTTP routes for review endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{list, submit, ReviewHandlers};

/// Creates the review router.
pub fn review_routes(handlers: ReviewHandlers) -> Router {
    Router::new()
        .route("/", get(list))
        .route("/", post(submit))
        .with_state(handlers)
}
