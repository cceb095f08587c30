//! Report export port - rendering the recommendations report.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for converting the markdown recommendations report into
/// deliverable formats.
///
/// Implementations must produce a complete document (a standalone HTML
/// page, a valid PDF byte stream) and report conversion failures as
/// [`RenderError`].
#[async_trait]
pub trait ReportExportService: Send + Sync {
    /// Converts markdown to PDF bytes.
    async fn to_pdf(&self, markdown: &str) -> Result<Vec<u8>, RenderError>;

    /// Converts markdown to a complete HTML document.
    async fn to_html(&self, markdown: &str) -> Result<String, RenderError>;

    /// Whether the converter's external dependencies are usable, for
    /// health checks.
    async fn is_available(&self) -> bool;
}

/// Deliverable formats for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Raw markdown, no conversion.
    Markdown,
    Pdf,
    Html,
}

impl ExportFormat {
    /// MIME type for HTTP responses.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Markdown => "text/markdown",
            Self::Pdf => "application/pdf",
            Self::Html => "text/html",
        }
    }

    /// File extension for download names.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Pdf => "pdf",
            Self::Html => "html",
        }
    }
}

/// Export failures.
///
/// All variants are recoverable: the user is notified and may retry after
/// fixing the cause (select cars, install the converter).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// There is nothing to render.
    #[error("nothing to export: {0}")]
    NothingToExport(String),

    /// An entity is missing a field the layout requires.
    #[error("recommendation is missing required field '{field}'")]
    MissingField { field: String },

    /// The external converter is not installed or not on PATH.
    #[error("PDF converter unavailable: {0}")]
    ConverterUnavailable(String),

    /// The converter ran and failed.
    #[error("conversion failed: {0}")]
    ConversionFailed(String),

    /// The converter exceeded its time budget.
    #[error("conversion timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}
