//! HTTP routes for export endpoints.

use axum::{routing::post, Router};

use super::handlers::{export, ExportHandlers};

/// Creates the export router.
pub fn export_routes(handlers: ExportHandlers) -> Router {
    Router::new().route("/", post(export)).with_state(handlers)
}
