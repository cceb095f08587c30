//! Ask-the-expert command handler.
//!
//! The exchange is atomic: the user turn and the assistant reply are
//! appended together after the provider call succeeds, so a failed call
//! leaves the transcript exactly as it was.

use std::sync::Arc;
use thiserror::Error;

use crate::config::LimitsConfig;
use crate::domain::chat::{expert_system_prompt, ChatRole, ChatTurn};
use crate::domain::foundation::SessionToken;
use crate::domain::recommendation::GenerationError;
use crate::ports::{AiProvider, CompletionRequest, Message, SessionStore, SessionStoreError};

/// Generation cap for one chat reply.
const MAX_COMPLETION_TOKENS: u32 = 800;

/// Temperature for chat calls.
const TEMPERATURE: f32 = 0.7;

/// Command to ask the expert a question.
#[derive(Debug, Clone)]
pub struct AskExpertCommand {
    pub token: SessionToken,
    pub question: String,
}

/// Chat failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AskExpertError {
    #[error(transparent)]
    Session(#[from] SessionStoreError),

    #[error("the question cannot be empty")]
    EmptyQuestion,

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Handles expert-chat questions.
pub struct AskExpertHandler {
    store: Arc<dyn SessionStore>,
    provider: Arc<dyn AiProvider>,
    limits: LimitsConfig,
}

impl AskExpertHandler {
    /// Creates the handler.
    pub fn new(
        store: Arc<dyn SessionStore>,
        provider: Arc<dyn AiProvider>,
        limits: LimitsConfig,
    ) -> Self {
        Self {
            store,
            provider,
            limits,
        }
    }

    /// Sends the question with windowed history and records the exchange.
    pub async fn handle(&self, cmd: AskExpertCommand) -> Result<ChatTurn, AskExpertError> {
        let question = cmd.question.trim();
        if question.is_empty() {
            return Err(AskExpertError::EmptyQuestion);
        }

        let mut state = self.store.load(cmd.token).await?;

        let mut request = CompletionRequest::new()
            .with_system_prompt(expert_system_prompt(state.engine.answers()))
            .with_max_tokens(MAX_COMPLETION_TOKENS)
            .with_temperature(TEMPERATURE);

        for turn in state.transcript.windowed(self.limits.chat_window_turns) {
            request.messages.push(match turn.role {
                ChatRole::User => Message::user(turn.text.clone()),
                ChatRole::Assistant => Message::assistant(turn.text.clone()),
            });
        }
        request.messages.push(Message::user(question));

        let response = self
            .provider
            .complete(request)
            .await
            .map_err(|e| GenerationError::provider(e.to_string(), e.is_retryable()))?;

        let assistant_turn = ChatTurn::assistant(response.content);
        state
            .transcript
            .push_exchange(ChatTurn::user(question), assistant_turn.clone());
        self.store.save(cmd.token, state).await?;

        Ok(assistant_turn)
    }
}
