//! Report building and export adapters.

mod pulldown_export_service;
mod report;

pub use pulldown_export_service::PulldownExportService;
pub use report::build_report;
