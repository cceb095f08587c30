//! Recommendation generation errors.

use thiserror::Error;

/// Errors from the recommendation generator and the chat expert.
///
/// All variants are recoverable: the caller is offered a retry and no
/// session state changes on failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The AI provider call failed (network, auth, rate limit, timeout).
    #[error("the AI service is unavailable: {message}")]
    Provider {
        message: String,
        /// Whether trying again later is likely to help.
        retryable: bool,
    },

    /// The response text contained no JSON array to parse.
    #[error("the AI response did not contain a recommendation list")]
    NoJsonFound,

    /// The JSON did not match the expected recommendation shape.
    #[error("the AI response had an unexpected shape: {0}")]
    UnexpectedShape(String),

    /// The response parsed but yielded no usable recommendations.
    #[error("the AI response contained no usable recommendations")]
    Empty,
}

impl GenerationError {
    /// Creates a provider error.
    pub fn provider(message: impl Into<String>, retryable: bool) -> Self {
        Self::Provider {
            message: message.into(),
            retryable,
        }
    }

    /// True when re-triggering the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Provider { retryable, .. } => *retryable,
            // A fresh completion may well parse; shape failures are
            // worth one more manual attempt.
            Self::NoJsonFound | Self::UnexpectedShape(_) | Self::Empty => true,
        }
    }
}
