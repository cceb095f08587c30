//! HTTP routes for auth endpoints.
//!
//! Login lives outside the session middleware; logout inside it.

use axum::{routing::post, Router};

use super::handlers::{login, logout, AuthHandlers};

/// The unauthenticated login route.
pub fn login_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .with_state(handlers)
}

/// The session-gated logout route.
pub fn logout_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/api/auth/logout", post(logout))
        .with_state(handlers)
}
