//! HTTP adapter for the questionnaire.

mod dto;
mod handlers;
mod routes;

pub use dto::{AnswerRequest, SnapshotResponse, StepResponse};
pub use handlers::QuestionnaireHandlers;
pub use routes::questionnaire_routes;
