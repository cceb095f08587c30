//! HTTP routes for recommendation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{generate, list, RecommendationHandlers};

/// Creates the recommendation router.
pub fn recommendation_routes(handlers: RecommendationHandlers) -> Router {
    Router::new()
        .route("/", get(list))
        .route("/generate", post(generate))
        .with_state(handlers)
}
