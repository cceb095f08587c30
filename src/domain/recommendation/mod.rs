//! AI car recommendations: the entity, the prompt, and the response parser.

mod car;
mod errors;
mod parser;
mod prompt;

pub use car::{MaintenanceCost, Recommendation};
pub use errors::GenerationError;
pub use parser::parse_recommendations;
pub use prompt::{recommendation_system_prompt, recommendation_user_prompt};
