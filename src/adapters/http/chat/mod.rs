//! HTTP adapter for expert chat.

mod dto;
mod handlers;
mod routes;

pub use dto::{AskRequest, ChatTurnResponse, TranscriptResponse};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
