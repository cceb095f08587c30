//! Authentication configuration.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ConfigValidationError;

/// Login gate configuration.
///
/// A single shared password protects the whole application; there are no
/// per-user accounts. The password never appears in Debug output or logs
/// thanks to the `secrecy` wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// The shared login password. Required.
    pub login_password: Secret<String>,
}

impl AuthConfig {
    /// Exposes the password for the constant-time comparison at login.
    pub fn password(&self) -> &str {
        self.login_password.expose_secret()
    }

    /// Validates authentication configuration.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.login_password.expose_secret().trim().is_empty() {
            return Err(ConfigValidationError::EmptyPassword);
        }
        Ok(())
    }
}
