//! HTTP handlers for auth endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireSession;
use crate::application::handlers::auth::{LoginCommand, LoginHandler, LogoutHandler};

/// Handler state for auth routes.
#[derive(Clone)]
pub struct AuthHandlers {
    login_handler: Arc<LoginHandler>,
    logout_handler: Arc<LogoutHandler>,
}

impl AuthHandlers {
    /// Bundles the auth handlers.
    pub fn new(login_handler: Arc<LoginHandler>, logout_handler: Arc<LogoutHandler>) -> Self {
        Self {
            login_handler,
            logout_handler,
        }
    }
}

/// POST /api/auth/login - exchange the shared password for a session token.
pub async fn login(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<super::dto::LoginRequest>,
) -> Response {
    match handlers
        .login_handler
        .handle(LoginCommand {
            password: req.password,
        })
        .await
    {
        Ok(result) => (
            StatusCode::OK,
            Json(super::dto::LoginResponse {
                token: result.token.to_string(),
            }),
        )
            .into_response(),
        Err(_) => error_response(
            StatusCode::UNAUTHORIZED,
            ErrorResponse::unauthorized("Incorrect password"),
        ),
    }
}

/// POST /api/auth/logout - destroy the session.
pub async fn logout(
    State(handlers): State<AuthHandlers>,
    RequireSession(token): RequireSession,
) -> Response {
    handlers.logout_handler.handle(token).await;
    StatusCode::NO_CONTENT.into_response()
}
