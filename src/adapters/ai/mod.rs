//! AI provider adapters.

mod anthropic_provider;
mod mock_provider;
mod openai_provider;

pub use anthropic_provider::{AnthropicConfig, AnthropicProvider};
pub use mock_provider::MockAiProvider;
pub use openai_provider::{OpenAiConfig, OpenAiProvider};
