//! HTTP adapter for report export.

mod dto;
mod handlers;
mod routes;

pub use dto::ExportRequest;
pub use handlers::ExportHandlers;
pub use routes::export_routes;
