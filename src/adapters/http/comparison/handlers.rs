//! HTTP handlers for comparison endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireSession;
use crate::application::handlers::comparison::{
    ComparisonAction, GetComparisonHandler, UpdateComparisonCommand, UpdateComparisonError,
    UpdateComparisonHandler,
};
use crate::domain::comparison::ComparisonError;
use crate::domain::foundation::RecommendationId;

use super::dto::ComparisonTableResponse;

/// Handler state for comparison routes.
#[derive(Clone)]
pub struct ComparisonHandlers {
    update_handler: Arc<UpdateComparisonHandler>,
    get_handler: Arc<GetComparisonHandler>,
}

impl ComparisonHandlers {
    /// Bundles the comparison handlers.
    pub fn new(
        update_handler: Arc<UpdateComparisonHandler>,
        get_handler: Arc<GetComparisonHandler>,
    ) -> Self {
        Self {
            update_handler,
            get_handler,
        }
    }
}

/// GET /api/comparison - the derived table.
pub async fn get_table(
    State(handlers): State<ComparisonHandlers>,
    RequireSession(token): RequireSession,
) -> Response {
    match handlers.get_handler.handle(token).await {
        Ok(table) => {
            (StatusCode::OK, Json(ComparisonTableResponse::from(table))).into_response()
        }
        Err(_) => unauthorized(),
    }
}

/// POST /api/comparison/:id - add a car to the comparison.
pub async fn add(
    State(handlers): State<ComparisonHandlers>,
    RequireSession(token): RequireSession,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<RecommendationId>() else {
        return error_response(
            StatusCode::BAD_REQUEST,
            ErrorResponse::bad_request("Invalid recommendation id"),
        );
    };
    apply(handlers, token, ComparisonAction::Add(id)).await
}

/// DELETE /api/comparison/:id - remove a car from the comparison.
pub async fn remove(
    State(handlers): State<ComparisonHandlers>,
    RequireSession(token): RequireSession,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<RecommendationId>() else {
        return error_response(
            StatusCode::BAD_REQUEST,
            ErrorResponse::bad_request("Invalid recommendation id"),
        );
    };
    apply(handlers, token, ComparisonAction::Remove(id)).await
}

/// POST /api/comparison/clear - empty the selection.
pub async fn clear(
    State(handlers): State<ComparisonHandlers>,
    RequireSession(token): RequireSession,
) -> Response {
    apply(handlers, token, ComparisonAction::Clear).await
}

async fn apply(
    handlers: ComparisonHandlers,
    token: crate::domain::foundation::SessionToken,
    action: ComparisonAction,
) -> Response {
    match handlers
        .update_handler
        .handle(UpdateComparisonCommand { token, action })
        .await
    {
        Ok(len) => (
            StatusCode::OK,
            Json(serde_json::json!({ "selected": len })),
        )
            .into_response(),
        Err(UpdateComparisonError::Session(_)) => unauthorized(),
        Err(UpdateComparisonError::Comparison(e)) => {
            let status = match e {
                ComparisonError::Full { .. } | ComparisonError::AlreadyPresent(_) => {
                    StatusCode::CONFLICT
                }
                ComparisonError::NotPresent(_) | ComparisonError::UnknownRecommendation(_) => {
                    StatusCode::NOT_FOUND
                }
            };
            error_response(status, ErrorResponse::new("COMPARISON", e.to_string()))
        }
    }
}

fn unauthorized() -> Response {
    error_response(
        StatusCode::UNAUTHORIZED,
        ErrorResponse::unauthorized("Unknown or expired session; log in again"),
    )
}
