//! HTTP handlers for chat endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireSession;
use crate::application::handlers::chat::{
    AskExpertCommand, AskExpertError, AskExpertHandler, ClearChatHandler, GetTranscriptHandler,
};
use crate::domain::chat::CONVERSATION_STARTERS;

use super::dto::{AskRequest, ChatTurnResponse, TranscriptResponse};

/// Handler state for chat routes.
#[derive(Clone)]
pub struct ChatHandlers {
    ask_handler: Arc<AskExpertHandler>,
    transcript_handler: Arc<GetTranscriptHandler>,
    clear_handler: Arc<ClearChatHandler>,
}

impl ChatHandlers {
    /// Bundles the chat handlers.
    pub fn new(
        ask_handler: Arc<AskExpertHandler>,
        transcript_handler: Arc<GetTranscriptHandler>,
        clear_handler: Arc<ClearChatHandler>,
    ) -> Self {
        Self {
            ask_handler,
            transcript_handler,
            clear_handler,
        }
    }
}

/// POST /api/chat/ask - ask the expert.
pub async fn ask(
    State(handlers): State<ChatHandlers>,
    RequireSession(token): RequireSession,
    Json(req): Json<AskRequest>,
) -> Response {
    match handlers
        .ask_handler
        .handle(AskExpertCommand {
            token,
            question: req.question,
        })
        .await
    {
        Ok(turn) => (StatusCode::OK, Json(ChatTurnResponse::from(turn))).into_response(),
        Err(AskExpertError::Session(_)) => error_response(
            StatusCode::UNAUTHORIZED,
            ErrorResponse::unauthorized("Unknown or expired session; log in again"),
        ),
        Err(AskExpertError::EmptyQuestion) => error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorResponse::validation("The question cannot be empty"),
        ),
        Err(AskExpertError::Generation(e)) => error_response(
            StatusCode::BAD_GATEWAY,
            ErrorResponse::generation(e.to_string(), e.is_retryable()),
        ),
    }
}

/// GET /api/chat - the transcript so far.
pub async fn transcript(
    State(handlers): State<ChatHandlers>,
    RequireSession(token): RequireSession,
) -> Response {
    match handlers.transcript_handler.handle(token).await {
        Ok(transcript) => {
            (StatusCode::OK, Json(TranscriptResponse::from(transcript))).into_response()
        }
        Err(_) => error_response(
            StatusCode::UNAUTHORIZED,
            ErrorResponse::unauthorized("Unknown or expired session; log in again"),
        ),
    }
}

/// GET /api/chat/starters - suggested opening questions.
pub async fn starters() -> Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "starters": CONVERSATION_STARTERS })),
    )
        .into_response()
}

/// POST /api/chat/clear - drop the history.
pub async fn clear(
    State(handlers): State<ChatHandlers>,
    RequireSession(token): RequireSession,
) -> Response {
    match handlers.clear_handler.handle(token).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(_) => error_response(
            StatusCode::UNAUTHORIZED,
            ErrorResponse::unauthorized("Unknown or expired session; log in again"),
        ),
    }
}
