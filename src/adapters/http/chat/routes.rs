//! HTTP routes for chat endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{ask, clear, starters, transcript, ChatHandlers};

/// Creates the chat router.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/", get(transcript))
        .route("/starters", get(starters))
        .route("/ask", post(ask))
        .route("/clear", post(clear))
        .with_state(handlers)
}
