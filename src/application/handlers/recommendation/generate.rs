//! Generate-recommendations command handler.
//!
//! Generation is gated on the questionnaire's Complete state and runs at
//! most once per completed questionnaire: a repeat call returns the stored
//! result without touching the provider, unless the caller explicitly
//! forces a regeneration. A failed call leaves the session exactly as it
//! was.

use std::sync::Arc;
use thiserror::Error;

use crate::config::LimitsConfig;
use crate::domain::foundation::SessionToken;
use crate::domain::recommendation::{
    parse_recommendations, recommendation_system_prompt, recommendation_user_prompt,
    GenerationError, Recommendation,
};
use crate::ports::{AiProvider, CompletionRequest, MessageRole, SessionStore, SessionStoreError};

/// Generation cap for one recommendations completion.
const MAX_COMPLETION_TOKENS: u32 = 2000;

/// Temperature for recommendation calls.
const TEMPERATURE: f32 = 0.7;

/// Command to generate recommendations.
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    pub token: SessionToken,
    /// Discard stored recommendations and call the provider again.
    pub force: bool,
}

/// Generation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Session(#[from] SessionStoreError),

    /// The questionnaire has not reached its Complete state.
    #[error("complete the questionnaire before requesting recommendations")]
    QuestionnaireIncomplete,

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Handles recommendation generation.
pub struct GenerateHandler {
    store: Arc<dyn SessionStore>,
    provider: Arc<dyn AiProvider>,
    limits: LimitsConfig,
}

impl GenerateHandler {
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

    /// Generates (or returns the stored) recommendations.
    pub async fn handle(
        &self,
        cmd: GenerateCommand,
    ) -> Result<Vec<Recommendation>, GenerateError> {
        let mut state = self.store.load(cmd.token).await?;

        if !state.engine.is_complete() {
            return Err(GenerateError::QuestionnaireIncomplete);
        }

        if let Some(existing) = &state.recommendations {
            if !cmd.force {
                tracing::debug!("returning stored recommendations without a provider call");
                return Ok(existing.clone());
            }
        }

        let count = self.limits.recommendation_count;
        let request = CompletionRequest::new()
            .with_system_prompt(recommendation_system_prompt(count))
            .with_message(
                MessageRole::User,
                recommendation_user_prompt(state.engine.answers(), count),
            )
            .with_max_tokens(MAX_COMPLETION_TOKENS)
            .with_temperature(TEMPERATURE);

        let response = self
            .provider
            .complete(request)
            .await
            .map_err(|e| GenerationError::provider(e.to_string(), e.is_retryable()))?;

        let cars = parse_recommendations(&response.content, count)?;
        tracing::info!(count = cars.len(), "recommendations generated");

        // A forced regeneration invalidates comparison selections that
        // reference the old entities.
        if cmd.force {
            state.comparison.clear();
        }
        state.record_recommendations(cars.clone());
        self.store.save(cmd.token, state).await?;

        Ok(cars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAiProvider;
    use crate::adapters::session::InMemorySessionStore;
    use crate::domain::questionnaire::{AnswerValue, InputKind};
    use crate::domain::session::SessionState;
    use crate::ports::AiError;

    const FIXTURE: &str = r#"[{
        "make": "Maruti Suzuki",
        "model": "Swift VXi AMT",
        "years": "2023-2025",
        "price": "₹6L - ₹9L",
        "why_suitable": "Easy to drive, easy to park, serviced everywhere.",
        "key_features": ["AMT gearbox", "High fuel efficiency"],
        "pros": ["Low running costs"],
        "cons": ["Tight rear seat"],
        "senior_friendly_rating": 9,
        "fuel_efficiency": "22-24 kmpl",
        "safety_rating": "4 stars",
        "maintenance_cost": "Low"
    }]"#;

    fn completed_state() -> SessionState {
        let mut state = SessionState::new(4);
        while let Some(step) = state.engine.current_step().cloned() {
            let answer = match &step.input {
                InputKind::SingleSelect { options } => AnswerValue::choice(options[0].clone()),
                InputKind::MultiSelect { options } => AnswerValue::multi([options[0].clone()]),
                InputKind::BudgetRange { floor, .. } => AnswerValue::range(*floor, *floor + 500_000),
                InputKind::FreeText { .. } => AnswerValue::text(""),
            };
            state.engine.advance(answer).unwrap();
        }
        state
    }

    fn handler(
        store: Arc<InMemorySessionStore>,
        provider: Arc<MockAiProvider>,
    ) -> GenerateHandler {
        GenerateHandler::new(store, provider, LimitsConfig::default())
    }

    #[tokio::test]
    async fn incomplete_questionnaire_never_calls_the_provider() {
        let store = Arc::new(InMemorySessionStore::new());
        let provider = Arc::new(MockAiProvider::new());
        let token = store.create(SessionState::new(4)).await;

        let err = handler(store, provider.clone())
            .handle(GenerateCommand {
                token,
                force: false,
            })
            .await
            .unwrap_err();

        assert_eq!(err, GenerateError::QuestionnaireIncomplete);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn completed_questionnaire_generates_once() {
        let store = Arc::new(InMemorySessionStore::new());
        let provider = Arc::new(MockAiProvider::new().with_response(FIXTURE));
        let token = store.create(completed_state()).await;
        let handler = handler(store.clone(), provider.clone());

        let cars = handler
            .handle(GenerateCommand {
                token,
                force: false,
            })
            .await
            .unwrap();
        assert_eq!(cars.len(), 1);
        assert!(!cars[0].make.is_empty());
        assert!(!cars[0].model.is_empty());
        assert!(!cars[0].price_range.is_empty());

        // A second plain call reuses the stored result.
        let again = handler
            .handle(GenerateCommand {
                token,
                force: false,
            })
            .await
            .unwrap();
        assert_eq!(again, cars);
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn force_makes_a_fresh_call_and_clears_comparison() {
        let store = Arc::new(InMemorySessionStore::new());
        let provider = Arc::new(
            MockAiProvider::new()
                .with_response(FIXTURE)
                .with_response(FIXTURE),
        );
        let token = store.create(completed_state()).await;
        let handler = handler(store.clone(), provider.clone());

        let first = handler
            .handle(GenerateCommand {
                token,
                force: false,
            })
            .await
            .unwrap();

        let mut state = store.load(token).await.unwrap();
        state.comparison.add(first[0].id).unwrap();
        store.save(token, state).await.unwrap();

        handler
            .handle(GenerateCommand { token, force: true })
            .await
            .unwrap();

        assert_eq!(provider.call_count(), 2);
        let reloaded = store.load(token).await.unwrap();
        assert!(reloaded.comparison.is_empty());
    }

    #[tokio::test]
    async fn provider_failure_leaves_the_session_unchanged() {
        let store = Arc::new(InMemorySessionStore::new());
        let provider = Arc::new(MockAiProvider::new().with_error(AiError::unavailable("down")));
        let token = store.create(completed_state()).await;

        let err = handler(store.clone(), provider)
            .handle(GenerateCommand {
                token,
                force: false,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GenerateError::Generation(GenerationError::Provider { retryable: true, .. })
        ));
        let reloaded = store.load(token).await.unwrap();
        assert!(reloaded.recommendations.is_none());
        assert!(reloaded.engine.is_complete());
    }

    #[tokio::test]
    async fn unparseable_response_is_a_generation_error() {
        let store = Arc::new(InMemorySessionStore::new());
        let provider =
            Arc::new(MockAiProvider::new().with_response("I'd suggest visiting a dealer."));
        let token = store.create(completed_state()).await;

        let err = handler(store.clone(), provider)
            .handle(GenerateCommand {
                token,
                force: false,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GenerateError::Generation(GenerationError::NoJsonFound)
        ));
        assert!(store.load(token).await.unwrap().recommendations.is_none());
    }

    #[tokio::test]
    async fn prompt_embeds_the_collected_answers() {
        let store = Arc::new(InMemorySessionStore::new());
        let provider = Arc::new(MockAiProvider::new().with_response(FIXTURE));
        let token = store.create(completed_state()).await;

        handler(store, provider.clone())
            .handle(GenerateCommand {
                token,
                force: false,
            })
            .await
            .unwrap();

        let calls = provider.calls();
        let user_prompt = &calls[0].messages[0].content;
        assert!(user_prompt.contains("BUDGET:"));
        assert!(user_prompt.contains("Daily commuting"));
        assert!(calls[0]
            .system_prompt
            .as_ref()
            .unwrap()
            .contains("JSON array"));
    }
}
