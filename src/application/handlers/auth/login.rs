//! Login command handler.
//!
//! A single shared password gates the application. On success a fresh
//! session is created and its bearer token returned; on failure nothing
//! is created, so a rejected login leaves no trace in the store.

use std::sync::Arc;
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::config::{AuthConfig, LimitsConfig};
use crate::domain::foundation::SessionToken;
use crate::domain::session::SessionState;
use crate::ports::SessionStore;

/// Command to log in with the shared password.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub password: String,
}

/// Successful login result.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: SessionToken,
}

/// Login failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("incorrect password")]
    InvalidPassword,
}

/// Handles the login command.
pub struct LoginHandler {
    store: Arc<dyn SessionStore>,
    auth: AuthConfig,
    limits: LimitsConfig,
}

impl LoginHandler {
    /// Creates the handler.
    pub fn new(store: Arc<dyn SessionStore>, auth: AuthConfig, limits: LimitsConfig) -> Self {
        Self {
            store,
            auth,
            limits,
        }
    }

    /// Verifies the password and creates a session.
    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, LoginError> {
        if !password_matches(self.auth.password(), &cmd.password) {
            return Err(LoginError::InvalidPassword);
        }

        let state = SessionState::new(self.limits.max_comparison_size);
        let token = self.store.create(state).await;
        tracing::info!(%token, "session created");
        Ok(LoginResult { token })
    }
}

/// Constant-time password comparison.
///
/// Length is not secret here (a shared password, not per-user), but the
/// comparison still avoids early exit on the first differing byte.
fn password_matches(expected: &str, presented: &str) -> bool {
    let expected = expected.as_bytes();
    let presented = presented.as_bytes();
    if expected.len() != presented.len() {
        // Burn a comparison anyway so both paths do similar work.
        let _ = expected.ct_eq(expected);
        return false;
    }
    expected.ct_eq(presented).into()
}
