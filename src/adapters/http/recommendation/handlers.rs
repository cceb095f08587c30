//! HTTP handlers for recommendation endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireSession;
use crate::application::handlers::recommendation::{
    GenerateCommand, GenerateError, GenerateHandler, ListRecommendationsHandler,
};

use super::dto::{GenerateRequest, RecommendationsResponse};

/// Handler state for recommendation routes.
#[derive(Clone)]
pub struct RecommendationHandlers {
    generate_handler: Arc<GenerateHandler>,
    list_handler: Arc<ListRecommendationsHandler>,
}

impl RecommendationHandlers {
    /// Bundles the recommendation handlers.
    pub fn new(
        generate_handler: Arc<GenerateHandler>,
        list_handler: Arc<ListRecommendationsHandler>,
    ) -> Self {
        Self {
            generate_handler,
            list_handler,
        }
    }
}

/// POST /api/recommendations/generate - generate (or fetch stored) results.
pub async fn generate(
    State(handlers): State<RecommendationHandlers>,
    RequireSession(token): RequireSession,
    body: Option<Json<GenerateRequest>>,
) -> Response {
    let force = body.map(|Json(b)| b.force).unwrap_or(false);

    match handlers
        .generate_handler
        .handle(GenerateCommand { token, force })
        .await
    {
        Ok(cars) => (
            StatusCode::OK,
            Json(RecommendationsResponse {
                generated: true,
                recommendations: cars.into_iter().map(Into::into).collect(),
            }),
        )
            .into_response(),
        Err(GenerateError::Session(_)) => error_response(
            StatusCode::UNAUTHORIZED,
            ErrorResponse::unauthorized("Unknown or expired session; log in again"),
        ),
        Err(GenerateError::QuestionnaireIncomplete) => error_response(
            StatusCode::CONFLICT,
            ErrorResponse::new(
                "QUESTIONNAIRE_INCOMPLETE",
                "Complete the questionnaire before requesting recommendations",
            ),
        ),
        Err(GenerateError::Generation(e)) => error_response(
            StatusCode::BAD_GATEWAY,
            ErrorResponse::generation(e.to_string(), e.is_retryable()),
        ),
    }
}

/// GET /api/recommendations - the stored list without generating.
pub async fn list(
    State(handlers): State<RecommendationHandlers>,
    RequireSession(token): RequireSession,
) -> Response {
    match handlers.list_handler.handle(token).await {
        Ok(stored) => {
            let generated = stored.is_some();
            (
                StatusCode::OK,
                Json(RecommendationsResponse {
                    generated,
                    recommendations: stored
                        .unwrap_or_default()
                        .into_iter()
                        .map(Into::into)
                        .collect(),
                }),
            )
                .into_response()
        }
        Err(_) => error_response(
            StatusCode::UNAUTHORIZED,
            ErrorResponse::unauthorized("Unknown or expired session; log in again"),
        ),
    }
}
