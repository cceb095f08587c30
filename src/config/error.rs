//! Configuration error types.

use thiserror::Error;

/// Errors during configuration loading. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ConfigValidationError),
}

/// Errors during configuration validation.
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Login password must not be empty")]
    EmptyPassword,

    #[error("No AI provider configured")]
    NoAiProviderConfigured,

    #[error("Limit '{0}' must be greater than zero")]
    ZeroLimit(&'static str),

    #[error("Limit '{name}' exceeds the maximum allowed ({max})")]
    LimitTooLarge { name: &'static str, max: u32 },
}
