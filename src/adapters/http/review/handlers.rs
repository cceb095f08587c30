//! HTTP handlers for review endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::adapters::http::error::{error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireSession;
use crate::application::handlers::review::{
    ListReviewsHandler, ListReviewsQuery, SubmitReviewCommand, SubmitReviewError,
    SubmitReviewHandler,
};

use super::dto::{ReviewListingResponse, ReviewResponse, SubmitReviewRequest};

/// Handler state for review routes.
#[derive(Clone)]
pub struct ReviewHandlers {
    submit_handler: Arc<SubmitReviewHandler>,
    list_handler: Arc<ListReviewsHandler>,
}

impl ReviewHandlers {
    /// Bundles the review handlers.
    pub fn new(
        submit_handler: Arc<SubmitReviewHandler>,
        list_handler: Arc<ListReviewsHandler>,
    ) -> Self {
        Self {
            submit_handler,
            list_handler,
        }
    }
}

/// Query parameters for listing reviews.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub make: Option<String>,
    pub model: Option<String>,
}

/// GET /api/reviews - list reviews, optionally filtered by car.
pub async fn list(
    State(handlers): State<ReviewHandlers>,
    RequireSession(token): RequireSession,
    Query(query): Query<ListQuery>,
) -> Response {
    let query = ListReviewsQuery {
        make: query.make,
        model: query.model,
    };
    match handlers.list_handler.handle(token, query).await {
        Ok(listing) => {
            (StatusCode::OK, Json(ReviewListingResponse::from(listing))).into_response()
        }
        Err(_) => error_response(
            StatusCode::UNAUTHORIZED,
            ErrorResponse::unauthorized("Unknown or expired session; log in again"),
        ),
    }
}

/// POST /api/reviews - submit a review.
pub async fn submit(
    State(handlers): State<ReviewHandlers>,
    RequireSession(token): RequireSession,
    Json(req): Json<SubmitReviewRequest>,
) -> Response {
    match handlers
        .submit_handler
        .handle(SubmitReviewCommand {
            token,
            draft: req.into(),
        })
        .await
    {
        Ok(review) => (StatusCode::CREATED, Json(ReviewResponse::from(review))).into_response(),
        Err(SubmitReviewError::Session(_)) => error_response(
            StatusCode::UNAUTHORIZED,
            ErrorResponse::unauthorized("Unknown or expired session; log in again"),
        ),
        Err(SubmitReviewError::Invalid(e)) => error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorResponse::validation(e.to_string()),
        ),
    }
}
