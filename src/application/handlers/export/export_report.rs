//! Export-report command handler.

use std::sync::Arc;
use thiserror::Error;

use crate::adapters::export::build_report;
use crate::domain::foundation::SessionToken;
use crate::ports::{
    ExportFormat, RenderError, ReportExportService, SessionStore, SessionStoreError,
};

/// Which cars the report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportScope {
    /// Every generated recommendation.
    #[default]
    All,
    /// Only the cars selected for comparison.
    Comparison,
}

/// Command to export the recommendations report.
#[derive(Debug, Clone)]
pub struct ExportReportCommand {
    pub token: SessionToken,
    pub format: ExportFormat,
    pub scope: ExportScope,
}

/// The rendered report.
#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
}

/// Export failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportReportError {
    #[error(transparent)]
    Session(#[from] SessionStoreError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Handles report export.
pub struct ExportReportHandler {
    store: Arc<dyn SessionStore>,
    export_service: Arc<dyn ReportExportService>,
    title: String,
}

impl ExportReportHandler {
    /// Creates the handler.
    pub fn new(
        store: Arc<dyn SessionStore>,
        export_service: Arc<dyn ReportExportService>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            store,
            export_service,
            title: title.into(),
        }
    }

    /// Builds the markdown report and converts it to the requested format.
    pub async fn handle(
        &self,
        cmd: ExportReportCommand,
    ) -> Result<ExportedReport, ExportReportError> {
        let state = self.store.load(cmd.token).await?;

        let cars = match cmd.scope {
            ExportScope::All => state
                .recommendations
                .as_deref()
                .map(|cars| cars.iter().collect::<Vec<_>>())
                .unwrap_or_default(),
            ExportScope::Comparison => state.compared_recommendations(),
        };

        let markdown = build_report(&self.title, state.engine.answers(), &cars)?;

        let bytes = match cmd.format {
            ExportFormat::Markdown => markdown.into_bytes(),
            ExportFormat::Html => self.export_service.to_html(&markdown).await?.into_bytes(),
            ExportFormat::Pdf => self.export_service.to_pdf(&markdown).await?,
        };

        Ok(ExportedReport {
            bytes,
            content_type: cmd.format.content_type(),
            filename: format!("car-recommendations.{}", cmd.format.extension()),
        })
    }
}
