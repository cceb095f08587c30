//! HTTP routes for questionnaire endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{answer_step, get_progress, go_back, restart, QuestionnaireHandlers};

/// Creates the questionnaire router.
pub fn questionnaire_routes(handlers: QuestionnaireHandlers) -> Router {
    Router::new()
        .route("/", get(get_progress))
        .route("/answer", post(answer_step))
        .route("/back", post(go_back))
        .route("/restart", post(restart))
        .with_state(handlers)
}
