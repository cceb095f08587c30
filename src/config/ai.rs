//! AI provider configuration.

use serde::Deserialize;
use std::time::Duration;

use super::error::ConfigValidationError;

/// AI provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key.
    pub openai_api_key: Option<String>,

    /// Anthropic API key.
    pub anthropic_api_key: Option<String>,

    /// Which provider serves completions.
    #[serde(default)]
    pub primary_provider: AiProviderKind,

    /// Model override; each adapter has its own default.
    pub model: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failures.
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

/// Supported AI providers.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProviderKind {
    #[default]
    OpenAI,
    Anthropic,
}

impl AiConfig {
    /// Timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// True when an OpenAI key is configured.
    pub fn has_openai(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// True when an Anthropic key is configured.
    pub fn has_anthropic(&self) -> bool {
        self.anthropic_api_key
            .as_ref()
            .is_some_and(|k| !k.is_empty())
    }

    /// Validates AI configuration.
    ///
    /// The primary provider must have its API key; a key for the other
    /// provider may be present but is not required.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.has_openai() && !self.has_anthropic() {
            return Err(ConfigValidationError::NoAiProviderConfigured);
        }

        match self.primary_provider {
            AiProviderKind::OpenAI if !self.has_openai() => {
                Err(ConfigValidationError::MissingRequired("AI__OPENAI_API_KEY"))
            }
            AiProviderKind::Anthropic if !self.has_anthropic() => Err(
                ConfigValidationError::MissingRequired("AI__ANTHROPIC_API_KEY"),
            ),
            _ => Ok(()),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            anthropic_api_key: None,
            primary_provider: AiProviderKind::default(),
            model: None,
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
        }
    }
}

fn default_timeout() -> u64 {
    60
}

fn default_retries() -> u32 {
    3
}
