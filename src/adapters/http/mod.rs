//! HTTP adapters - the JSON REST API.
//!
//! Each area has its own `{dto, handlers, routes}` module. Everything
//! except `/health` and `/api/auth/login` sits behind the session-token
//! middleware.

pub mod auth;
pub mod chat;
pub mod comparison;
pub mod error;
pub mod export;
pub mod middleware;
pub mod questionnaire;
pub mod recommendation;
pub mod review;

use axum::{middleware as axum_middleware, routing::get, Json, Router};
use std::sync::Arc;

use crate::ports::SessionStore;

/// Everything the router needs, bundled for assembly in `main`.
pub struct RouterDeps {
    pub store: Arc<dyn SessionStore>,
    pub auth: auth::AuthHandlers,
    pub questionnaire: questionnaire::QuestionnaireHandlers,
    pub recommendation: recommendation::RecommendationHandlers,
    pub chat: chat::ChatHandlers,
    pub comparison: comparison::ComparisonHandlers,
    pub review: review::ReviewHandlers,
    pub export: export::ExportHandlers,
    pub app_title: String,
}

/// Builds the full application router.
pub fn build_router(deps: RouterDeps) -> Router {
    let protected = Router::new()
        .nest("/api/questionnaire", questionnaire::questionnaire_routes(deps.questionnaire))
        .nest(
            "/api/recommendations",
            recommendation::recommendation_routes(deps.recommendation),
        )
        .nest("/api/chat", chat::chat_routes(deps.chat))
        .nest("/api/comparison", comparison::comparison_routes(deps.comparison))
        .nest("/api/reviews", review::review_routes(deps.review))
        .nest("/api/export", export::export_routes(deps.export))
        .merge(auth::logout_routes(deps.auth.clone()))
        .layer(axum_middleware::from_fn_with_state(
            deps.store.clone(),
            middleware::session_middleware,
        ));

    let title = deps.app_title.clone();
    Router::new()
        .route(
            "/health",
            get(move || {
                let title = title.clone();
                async move { Json(serde_json::json!({ "status": "ok", "title": title })) }
            }),
        )
        .merge(auth::login_routes(deps.auth))
        .merge(protected)
}

#[cfg(test)]
mod tests {
    // Router assembly is covered by the integration tests, which wire the
    // handlers with mock adapters.
}
