//! HTTP DTOs for recommendation endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::recommendation::Recommendation;

/// Request body for generation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    /// Discard stored results and call the AI again.
    #[serde(default)]
    pub force: bool,
}

/// One recommended car.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub id: String,
    pub make: String,
    pub model: String,
    pub years: String,
    pub price_range: String,
    pub rationale: String,
    pub highlights: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub senior_friendly_rating: u8,
    pub fuel_economy: String,
    pub safety_rating: String,
    pub maintenance_cost: String,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(car: Recommendation) -> Self {
        Self {
            id: car.id.to_string(),
            make: car.make,
            model: car.model,
            years: car.years,
            price_range: car.price_range,
            rationale: car.rationale,
            highlights: car.highlights,
            pros: car.pros,
            cons: car.cons,
            senior_friendly_rating: car.senior_friendly_rating,
            fuel_economy: car.fuel_economy,
            safety_rating: car.safety_rating,
            maintenance_cost: car.maintenance_cost.to_string(),
        }
    }
}

/// The session's recommendation list.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsResponse {
    /// False until the first successful generation.
    pub generated: bool,
    pub recommendations: Vec<RecommendationResponse>,
}
