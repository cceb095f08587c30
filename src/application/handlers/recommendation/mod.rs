//! Recommendation generation.

mod generate;
mod list;

pub use generate::{GenerateCommand, GenerateError, GenerateHandler};
pub use list::ListRecommendationsHandler;
