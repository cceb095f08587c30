//! Report export.

mod export_report;

pub use export_report::{
    ExportReportCommand, ExportReportError, ExportReportHandler, ExportScope, ExportedReport,
};
