//! Application configuration.
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `CAR_ADVISOR`
//! prefix and nested values use double underscores as separators:
//!
//! ```text
//! CAR_ADVISOR__AUTH__LOGIN_PASSWORD=...      -> auth.login_password
//! CAR_ADVISOR__AI__OPENAI_API_KEY=sk-...     -> ai.openai_api_key
//! CAR_ADVISOR__SERVER__PORT=8080             -> server.port
//! ```
//!
//! Configuration problems are fatal: the process logs a diagnostic and
//! refuses to start.

mod ai;
mod app;
mod auth;
mod error;
mod limits;
mod server;

pub use ai::{AiConfig, AiProviderKind};
pub use app::AppOptions;
pub use auth::AuthConfig;
pub use error::{ConfigError, ConfigValidationError};
pub use limits::LimitsConfig;
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address, timeouts, CORS.
    #[serde(default)]
    pub server: ServerConfig,

    /// Title override and debug flag.
    #[serde(default)]
    pub app: AppOptions,

    /// Login password for the shared gate.
    pub auth: AuthConfig,

    /// AI provider keys and call policy.
    #[serde(default)]
    pub ai: AiConfig,

    /// Bounds left open by the product design: comparison size, chat
    /// window, recommendation count.
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl AppConfig {
    /// Loads configuration from the environment.
    ///
    /// Reads a `.env` file when present (development), then environment
    /// variables with the `CAR_ADVISOR` prefix.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when required variables are missing or
    /// values cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CAR_ADVISOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of all sections.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.server.validate()?;
        self.auth.validate()?;
        self.ai.validate()?;
        self.limits.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("CAR_ADVISOR__AUTH__LOGIN_PASSWORD", "senior_car_guide_2024");
        env::set_var("CAR_ADVISOR__AI__OPENAI_API_KEY", "sk-test-xxx");
    }

    fn clear_env() {
        env::remove_var("CAR_ADVISOR__AUTH__LOGIN_PASSWORD");
        env::remove_var("CAR_ADVISOR__AI__OPENAI_API_KEY");
        env::remove_var("CAR_ADVISOR__SERVER__PORT");
        env::remove_var("CAR_ADVISOR__APP__TITLE");
        env::remove_var("CAR_ADVISOR__LIMITS__MAX_COMPARISON_SIZE");
    }

    #[test]
    fn loads_and_validates_minimal_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.expect("load should succeed");
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.app.title, "Car Advisor");
    }

    #[test]
    fn custom_port_and_title_override_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("CAR_ADVISOR__SERVER__PORT", "3000");
        env::set_var("CAR_ADVISOR__APP__TITLE", "Family Car Finder");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.app.title, "Family Car Finder");
    }

    #[test]
    fn limits_load_from_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("CAR_ADVISOR__LIMITS__MAX_COMPARISON_SIZE", "6");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.limits.max_comparison_size, 6);
    }
}
