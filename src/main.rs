//! Car Advisor server binary.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use car_advisor::adapters::ai::{
    AnthropicConfig, AnthropicProvider, OpenAiConfig, OpenAiProvider,
};
use car_advisor::adapters::export::PulldownExportService;
use car_advisor::adapters::http::{self, RouterDeps};
use car_advisor::adapters::session::InMemorySessionStore;
use car_advisor::application::handlers::auth::{LoginHandler, LogoutHandler};
use car_advisor::application::handlers::chat::{
    AskExpertHandler, ClearChatHandler, GetTranscriptHandler,
};
use car_advisor::application::handlers::comparison::{
    GetComparisonHandler, UpdateComparisonHandler,
};
use car_advisor::application::handlers::export::ExportReportHandler;
use car_advisor::application::handlers::questionnaire::{
    AnswerStepHandler, GetProgressHandler, GoBackHandler, RestartHandler,
};
use car_advisor::application::handlers::recommendation::{
    GenerateHandler, ListRecommendationsHandler,
};
use car_advisor::application::handlers::review::{ListReviewsHandler, SubmitReviewHandler};
use car_advisor::config::{AiProviderKind, AppConfig};
use car_advisor::ports::{AiProvider, ReportExportService, SessionStore};

#[tokio::main]
async fn main() {
    // Configuration problems are fatal: diagnose and refuse to start.
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    }

    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let provider = build_provider(&config);
    tracing::info!(
        provider = %provider.provider_info().name,
        model = %provider.provider_info().model,
        "AI provider ready"
    );

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let export_service: Arc<dyn ReportExportService> = Arc::new(PulldownExportService::new());

    let deps = RouterDeps {
        store: store.clone(),
        auth: http::auth::AuthHandlers::new(
            Arc::new(LoginHandler::new(
                store.clone(),
                config.auth.clone(),
                config.limits.clone(),
            )),
            Arc::new(LogoutHandler::new(store.clone())),
        ),
        questionnaire: http::questionnaire::QuestionnaireHandlers::new(
            Arc::new(AnswerStepHandler::new(store.clone())),
            Arc::new(GoBackHandler::new(store.clone())),
            Arc::new(RestartHandler::new(store.clone())),
            Arc::new(GetProgressHandler::new(store.clone())),
        ),
        recommendation: http::recommendation::RecommendationHandlers::new(
            Arc::new(GenerateHandler::new(
                store.clone(),
                provider.clone(),
                config.limits.clone(),
            )),
            Arc::new(ListRecommendationsHandler::new(store.clone())),
        ),
        chat: http::chat::ChatHandlers::new(
            Arc::new(AskExpertHandler::new(
                store.clone(),
                provider.clone(),
                config.limits.clone(),
            )),
            Arc::new(GetTranscriptHandler::new(store.clone())),
            Arc::new(ClearChatHandler::new(store.clone())),
        ),
        comparison: http::comparison::ComparisonHandlers::new(
            Arc::new(UpdateComparisonHandler::new(store.clone())),
            Arc::new(GetComparisonHandler::new(store.clone())),
        ),
        review: http::review::ReviewHandlers::new(
            Arc::new(SubmitReviewHandler::new(store.clone())),
            Arc::new(ListReviewsHandler::new(store.clone())),
        ),
        export: http::export::ExportHandlers::new(Arc::new(ExportReportHandler::new(
            store.clone(),
            export_service,
            config.app.title.clone(),
        ))),
        app_title: config.app.title.clone(),
    };

    let app = http::build_router(deps)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, title = %config.app.title, "starting server");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Builds the configured AI provider. Validation already guaranteed the
/// matching key is present.
fn build_provider(config: &AppConfig) -> Arc<dyn AiProvider> {
    match config.ai.primary_provider {
        AiProviderKind::OpenAI => {
            let key = config.ai.openai_api_key.clone().unwrap_or_default();
            let mut provider_config = OpenAiConfig::new(key)
                .with_timeout(config.ai.timeout())
                .with_max_retries(config.ai.max_retries);
            if let Some(model) = &config.ai.model {
                provider_config = provider_config.with_model(model);
            }
            Arc::new(OpenAiProvider::new(provider_config))
        }
        AiProviderKind::Anthropic => {
            let key = config.ai.anthropic_api_key.clone().unwrap_or_default();
            let mut provider_config = AnthropicConfig::new(key)
                .with_timeout(config.ai.timeout())
                .with_max_retries(config.ai.max_retries);
            if let Some(model) = &config.ai.model {
                provider_config = provider_config.with_model(model);
            }
            Arc::new(AnthropicProvider::new(provider_config))
        }
    }
}

/// CORS layer: configured origins, or permissive in their absence.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("shutdown signal received");
}
