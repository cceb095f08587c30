//! Markdown conversion: pulldown-cmark for HTML, Pandoc for PDF.
//!
//! HTML conversion is pure Rust and always available. PDF conversion
//! shells out to Pandoc, which must be installed on the host; when it is
//! missing, PDF export fails with a clear `RenderError` while markdown
//! and HTML export keep working.

use std::process::Stdio;

use async_trait::async_trait;
use pulldown_cmark::{html, Options, Parser};
use tokio::process::Command;

use crate::ports::{RenderError, ReportExportService};

/// Export service using pulldown-cmark and Pandoc.
#[derive(Debug, Clone)]
pub struct PulldownExportService {
    /// Path to the pandoc executable; searches PATH when unset.
    pandoc_path: Option<String>,
    /// Time budget for one PDF conversion.
    pdf_timeout_secs: u64,
}

impl Default for PulldownExportService {
    fn default() -> Self {
        Self::new()
    }
}

impl PulldownExportService {
    /// Creates a service with default settings.
    pub fn new() -> Self {
        Self {
            pandoc_path: None,
            pdf_timeout_secs: 30,
        }
    }

    /// Sets a custom path to the Pandoc executable.
    pub fn with_pandoc_path(mut self, path: impl Into<String>) -> Self {
        self.pandoc_path = Some(path.into());
        self
    }

    /// Sets the PDF conversion timeout.
    pub fn with_pdf_timeout(mut self, timeout_secs: u64) -> Self {
        self.pdf_timeout_secs = timeout_secs;
        self
    }

    fn pandoc_command(&self) -> &str {
        self.pandoc_path.as_deref().unwrap_or("pandoc")
    }

    async fn check_pandoc(&self) -> bool {
        Command::new(self.pandoc_command())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// First h1 of the document, as the HTML page title.
    fn extract_title(markdown: &str) -> String {
        markdown
            .lines()
            .find_map(|line| line.trim().strip_prefix("# "))
            .unwrap_or("Recommendations Report")
            .to_string()
    }

    fn wrap_html(body: String, title: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{REPORT_CSS}
    </style>
</head>
<body>
    <article class="advisor-report">
{body}
    </article>
</body>
</html>"#,
            title = html_escape(title),
            body = body,
        )
    }
}

#[async_trait]
impl ReportExportService for PulldownExportService {
    async fn to_pdf(&self, markdown: &str) -> Result<Vec<u8>, RenderError> {
        if !self.check_pandoc().await {
            return Err(RenderError::ConverterUnavailable(
                "Pandoc is not installed; PDF export requires Pandoc".to_string(),
            ));
        }

        let mut child = Command::new(self.pandoc_command())
            .args([
                "-f",
                "markdown",
                "-t",
                "pdf",
                "--pdf-engine=xelatex",
                "-V",
                "geometry:margin=1in",
                "-V",
                "fontsize=12pt",
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| RenderError::ConversionFailed(format!("Failed to start Pandoc: {e}")))?;

        if let Some(mut stdin) = child.stdin.take() {
            use tokio::io::AsyncWriteExt;
            stdin
                .write_all(markdown.as_bytes())
                .await
                .map_err(|e| {
                    RenderError::ConversionFailed(format!("Failed to write to Pandoc: {e}"))
                })?;
        }

        let output = tokio::time::timeout(
            std::time::Duration::from_secs(self.pdf_timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| RenderError::Timeout {
            timeout_secs: self.pdf_timeout_secs,
        })?
        .map_err(|e| RenderError::ConversionFailed(format!("Pandoc execution failed: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RenderError::ConversionFailed(format!(
                "Pandoc returned error: {}",
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }

    async fn to_html(&self, markdown: &str) -> Result<String, RenderError> {
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        let parser = Parser::new_ext(markdown, options);

        let mut body = String::new();
        html::push_html(&mut body, parser);

        let title = Self::extract_title(markdown);
        Ok(Self::wrap_html(body, &title))
    }

    async fn is_available(&self) -> bool {
        // HTML conversion is pure Rust; availability means Pandoc too.
        self.check_pandoc().await
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Styling tuned for readability: large type, high contrast.
const REPORT_CSS: &str = r#"
body {
    font-family: Georgia, 'Times New Roman', serif;
    font-size: 18px;
    line-height: 1.7;
    color: #1f2430;
    max-width: 860px;
    margin: 0 auto;
    padding: 2rem;
}

.advisor-report h1 {
    font-size: 2rem;
    border-bottom: 3px solid #1a5fb4;
    padding-bottom: 0.5rem;
}

.advisor-report h2 {
    font-size: 1.5rem;
    margin-top: 2rem;
}

.advisor-report h3 {
    font-size: 1.2rem;
    margin-top: 1.5rem;
}

.advisor-report table {
    border-collapse: collapse;
    width: 100%;
    margin: 1rem 0;
}

.advisor-report th,
.advisor-report td {
    border: 1px solid #c9cdd6;
    padding: 0.6rem 0.8rem;
    text-align: left;
}

.advisor-report th {
    background-color: #eef2f9;
}

.advisor-report li {
    margin: 0.3rem 0;
}
"#;
