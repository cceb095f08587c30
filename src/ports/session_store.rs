//! Session store port - per-token session state.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::SessionToken;
use crate::domain::session::SessionState;

/// Errors from session store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionStoreError {
    /// No session exists for the presented token.
    #[error("unknown or expired session token")]
    NotFound,
}

/// Port for the per-session state map.
///
/// Each browser session owns exactly one [`SessionState`], keyed by the
/// bearer token issued at login. Handlers work read-modify-write:
/// `load`, mutate the copy, `save`. The front end serializes the
/// operations of one session, so there is never a concurrent writer to a
/// given token.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Creates a session and returns its token.
    async fn create(&self, state: SessionState) -> SessionToken;

    /// Returns a clone of the session's state.
    async fn load(&self, token: SessionToken) -> Result<SessionState, SessionStoreError>;

    /// Replaces the session's state.
    async fn save(&self, token: SessionToken, state: SessionState)
        -> Result<(), SessionStoreError>;

    /// True when a session exists for the token.
    async fn exists(&self, token: SessionToken) -> bool;

    /// Destroys the session. Destroying a missing session is not an error.
    async fn delete(&self, token: SessionToken);
}
