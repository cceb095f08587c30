//! HTTP routes for comparison endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{add, clear, get_table, remove, ComparisonHandlers};

/// Creates the comparison router.
pub fn comparison_routes(handlers: ComparisonHandlers) -> Router {
    Router::new()
        .route("/", get(get_table))
        .route("/clear", post(clear))
        .route("/:id", post(add).delete(remove))
        .with_state(handlers)
}
