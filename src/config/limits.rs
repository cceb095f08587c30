//! Product bounds that are configuration rather than constants.

use serde::Deserialize;

use super::error::ConfigValidationError;

/// Explicit bounds for the comparison view, chat context, and the number
/// of recommendations requested from the model.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum cars in the side-by-side comparison.
    #[serde(default = "default_max_comparison_size")]
    pub max_comparison_size: usize,

    /// Trailing chat turns sent as context on each AI call.
    #[serde(default = "default_chat_window_turns")]
    pub chat_window_turns: usize,

    /// Recommendations requested per generation.
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,
}

impl LimitsConfig {
    /// Validates the limits.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.max_comparison_size == 0 {
            return Err(ConfigValidationError::ZeroLimit("max_comparison_size"));
        }
        if self.max_comparison_size > 10 {
            return Err(ConfigValidationError::LimitTooLarge {
                name: "max_comparison_size",
                max: 10,
            });
        }
        if self.chat_window_turns == 0 {
            return Err(ConfigValidationError::ZeroLimit("chat_window_turns"));
        }
        if self.recommendation_count == 0 {
            return Err(ConfigValidationError::ZeroLimit("recommendation_count"));
        }
        if self.recommendation_count > 10 {
            return Err(ConfigValidationError::LimitTooLarge {
                name: "recommendation_count",
                max: 10,
            });
        }
        Ok(())
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_comparison_size: default_max_comparison_size(),
            chat_window_turns: default_chat_window_turns(),
            recommendation_count: default_recommendation_count(),
        }
    }
}

fn default_max_comparison_size() -> usize {
    4
}

fn default_chat_window_turns() -> usize {
    10
}

fn default_recommendation_count() -> usize {
    5
}
