//! HTTP DTOs for export endpoints.

use serde::Deserialize;

use crate::application::handlers::export::ExportScope;
use crate::ports::ExportFormat;

/// Request to export the recommendations report.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequest {
    /// "pdf", "html", or "markdown".
    pub format: ExportFormat,
    /// "all" (default) or "comparison".
    #[serde(default)]
    pub scope: ExportScope,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_defaults_to_all() {
        let req: ExportRequest = serde_json::from_str(r#"{"format": "pdf"}"#).unwrap();
        assert_eq!(req.scope, ExportScope::All);
        assert_eq!(req.format, ExportFormat::Pdf);
    }

    #[test]
    fn comparison_scope_parses() {
        let req: ExportRequest =
            serde_json::from_str(r#"{"format": "markdown", "scope": "comparison"}"#).unwrap();
        assert_eq!(req.scope, ExportScope::Comparison);
    }
}
