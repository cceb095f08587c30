//! Session-token middleware and extractor.
//!
//! The login endpoint issues a bearer token; this middleware resolves it
//! against the session store and injects the token into request
//! extensions. Handlers declare `RequireSession` to receive it.
//!
//! ```text
//! Request -> session_middleware -> injects SessionToken into extensions
//!                                        |
//!                                Handler -> RequireSession extractor
//! ```

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::domain::foundation::SessionToken;
use crate::ports::SessionStore;

use super::super::error::{error_response, ErrorResponse};

/// Validates the bearer token and injects it into request extensions.
///
/// Requests without a valid token are rejected with 401 before reaching
/// any handler; no partial session state is ever created for them.
pub async fn session_middleware(
    State(store): State<Arc<dyn SessionStore>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .and_then(|raw| raw.parse::<SessionToken>().ok());

    match token {
        Some(token) if store.exists(token).await => {
            request.extensions_mut().insert(token);
            next.run(request).await
        }
        Some(_) => error_response(
            StatusCode::UNAUTHORIZED,
            ErrorResponse::unauthorized("Unknown or expired session; log in again"),
        ),
        None => error_response(
            StatusCode::UNAUTHORIZED,
            ErrorResponse::unauthorized("Missing session token"),
        ),
    }
}

/// Extractor for the validated session token.
#[derive(Debug, Clone, Copy)]
pub struct RequireSession(pub SessionToken);

#[axum::async_trait]
impl<S> FromRequestParts<S> for RequireSession
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionToken>()
            .copied()
            .map(RequireSession)
            .ok_or_else(|| {
                error_response(
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::unauthorized("Missing session token"),
                )
            })
    }
}
