//! Ports - trait interfaces between the domain and the outside world.

mod ai_provider;
mod report_export;
mod session_store;

pub use ai_provider::{
    AiError, AiProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use report_export::{ExportFormat, RenderError, ReportExportService};
pub use session_store::{SessionStore, SessionStoreError};
