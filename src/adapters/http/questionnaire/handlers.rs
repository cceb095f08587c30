//! HTTP handlers for questionnaire endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireSession;
use crate::application::handlers::questionnaire::{
    AnswerStepCommand, AnswerStepHandler, GetProgressHandler, GoBackHandler,
    QuestionnaireOpError, RestartHandler,
};
use crate::domain::questionnaire::QuestionnaireError;

use super::dto::{AnswerRequest, SnapshotResponse};

/// Handler state for questionnaire routes.
#[derive(Clone)]
pub struct QuestionnaireHandlers {
    answer_handler: Arc<AnswerStepHandler>,
    go_back_handler: Arc<GoBackHandler>,
    restart_handler: Arc<RestartHandler>,
    progress_handler: Arc<GetProgressHandler>,
}

impl QuestionnaireHandlers {
    /// Bundles the questionnaire handlers.
    pub fn new(
        answer_handler: Arc<AnswerStepHandler>,
        go_back_handler: Arc<GoBackHandler>,
        restart_handler: Arc<RestartHandler>,
        progress_handler: Arc<GetProgressHandler>,
    ) -> Self {
        Self {
            answer_handler,
            go_back_handler,
            restart_handler,
            progress_handler,
        }
    }
}

/// GET /api/questionnaire - current step and progress.
pub async fn get_progress(
    State(handlers): State<QuestionnaireHandlers>,
    RequireSession(token): RequireSession,
) -> Response {
    match handlers.progress_handler.handle(token).await {
        Ok(snapshot) => ok_snapshot(snapshot),
        Err(e) => questionnaire_error(e),
    }
}

/// POST /api/questionnaire/answer - answer the current step.
pub async fn answer_step(
    State(handlers): State<QuestionnaireHandlers>,
    RequireSession(token): RequireSession,
    Json(req): Json<AnswerRequest>,
) -> Response {
    let cmd = AnswerStepCommand {
        token,
        answer: req.answer,
    };
    match handlers.answer_handler.handle(cmd).await {
        Ok(snapshot) => ok_snapshot(snapshot),
        Err(e) => questionnaire_error(e),
    }
}

/// POST /api/questionnaire/back - discard the last answer.
pub async fn go_back(
    State(handlers): State<QuestionnaireHandlers>,
    RequireSession(token): RequireSession,
) -> Response {
    match handlers.go_back_handler.handle(token).await {
        Ok(snapshot) => ok_snapshot(snapshot),
        Err(e) => questionnaire_error(e),
    }
}

/// POST /api/questionnaire/restart - start over.
pub async fn restart(
    State(handlers): State<QuestionnaireHandlers>,
    RequireSession(token): RequireSession,
) -> Response {
    match handlers.restart_handler.handle(token).await {
        Ok(snapshot) => ok_snapshot(snapshot),
        Err(e) => questionnaire_error(e),
    }
}

fn ok_snapshot(
    snapshot: crate::application::handlers::questionnaire::QuestionnaireSnapshot,
) -> Response {
    (StatusCode::OK, Json(SnapshotResponse::from(snapshot))).into_response()
}

/// Maps questionnaire failures onto the API error envelope.
///
/// Validation problems are 422 so the client re-prompts; everything else
/// on this surface is either a stale token or a misuse of the flow.
fn questionnaire_error(error: QuestionnaireOpError) -> Response {
    match error {
        QuestionnaireOpError::Session(_) => error_response(
            StatusCode::UNAUTHORIZED,
            ErrorResponse::unauthorized("Unknown or expired session; log in again"),
        ),
        QuestionnaireOpError::Questionnaire(e) => match &e {
            QuestionnaireError::Invalid(v) => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::validation(v.to_string()),
            ),
            QuestionnaireError::AlreadyComplete | QuestionnaireError::AtFirstStep => {
                error_response(StatusCode::CONFLICT, ErrorResponse::new("CONFLICT", e.to_string()))
            }
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("INTERNAL", e.to_string()),
            ),
        },
    }
}
