//! HTTP handlers for export endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireSession;
use crate::application::handlers::export::{
    ExportReportCommand, ExportReportError, ExportReportHandler,
};
use crate::ports::RenderError;

use super::dto::ExportRequest;

/// Handler state for export routes.
#[derive(Clone)]
pub struct ExportHandlers {
    export_handler: Arc<ExportReportHandler>,
}

impl ExportHandlers {
    /// Bundles the export handler.
    pub fn new(export_handler: Arc<ExportReportHandler>) -> Self {
        Self { export_handler }
    }
}

/// POST /api/export - download the recommendations report.
pub async fn export(
    State(handlers): State<ExportHandlers>,
    RequireSession(token): RequireSession,
    Json(req): Json<ExportRequest>,
) -> Response {
    match handlers
        .export_handler
        .handle(ExportReportCommand {
            token,
            format: req.format,
            scope: req.scope,
        })
        .await
    {
        Ok(report) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, report.content_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", report.filename),
                ),
            ],
            report.bytes,
        )
            .into_response(),
        Err(ExportReportError::Session(_)) => error_response(
            StatusCode::UNAUTHORIZED,
            ErrorResponse::unauthorized("Unknown or expired session; log in again"),
        ),
        Err(ExportReportError::Render(e)) => render_error(e),
    }
}

/// Maps export failures onto statuses: user-correctable ones are 422,
/// converter problems 503.
fn render_error(error: RenderError) -> Response {
    let status = match &error {
        RenderError::NothingToExport(_) | RenderError::MissingField { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        RenderError::ConverterUnavailable(_)
        | RenderError::ConversionFailed(_)
        | RenderError::Timeout { .. } => StatusCode::SERVICE_UNAVAILABLE,
    };
    error_response(status, ErrorResponse::new("EXPORT_FAILED", error.to_string()))
}
