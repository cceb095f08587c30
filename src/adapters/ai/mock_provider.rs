//! Mock AI provider for tests.
//!
//! Configurable with a queue of responses, error injection, and call
//! recording, so tests can assert on exactly what was sent and how often
//! without touching a real API.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{
    AiError, AiProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// A configured mock outcome.
#[derive(Debug, Clone)]
enum MockOutcome {
    Success(String),
    Error(AiError),
}

/// Mock AI provider.
///
/// Responses are consumed in FIFO order; when the queue is empty the
/// provider answers with a fixed fallback string.
#[derive(Debug, Clone, Default)]
pub struct MockAiProvider {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockAiProvider {
    /// Creates a mock with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful completion.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Success(content.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: AiError) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Error(error));
        self
    }

    /// Number of completion calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// A copy of every request received, in order.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError> {
        self.calls.lock().unwrap().push(request);

        let outcome = self.outcomes.lock().unwrap().pop_front();
        match outcome {
            Some(MockOutcome::Success(content)) => Ok(CompletionResponse {
                content,
                usage: TokenUsage::new(100, 50),
                model: "mock".to_string(),
                finish_reason: FinishReason::Stop,
            }),
            Some(MockOutcome::Error(error)) => Err(error),
            None => Ok(CompletionResponse {
                content: "mock response".to_string(),
                usage: TokenUsage::zero(),
                model: "mock".to_string(),
                finish_reason: FinishReason::Stop,
            }),
        }
    }

    fn estimate_tokens(&self, text: &str) -> u32 {
        (text.len() / 4).max(1) as u32
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock", 128_000)
    }
}
