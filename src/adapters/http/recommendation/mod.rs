//! HTTP adapter for recommendations.

mod dto;
mod handlers;
mod routes;

pub use dto::{GenerateRequest, RecommendationResponse, RecommendationsResponse};
pub use handlers::RecommendationHandlers;
pub use routes::recommendation_routes;
