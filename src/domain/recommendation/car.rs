//! The recommended-car entity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::RecommendationId;

/// Running-cost tier reported for a recommended car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceCost {
    #[serde(alias = "low")]
    Low,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "high")]
    High,
}

impl fmt::Display for MaintenanceCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        write!(f, "{}", s)
    }
}

/// One AI-suggested car with its descriptive attributes.
///
/// Produced by the recommendation generator from a completed questionnaire
/// and held only in session memory. `make`, `model`, and `price_range` are
/// guaranteed non-empty by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Stable identifier within the session, used by the comparison set.
    pub id: RecommendationId,
    /// Manufacturer, e.g. "Tata".
    pub make: String,
    /// Model name and variant, e.g. "Nexon XZ+".
    pub model: String,
    /// Model-year range the suggestion covers, e.g. "2022-2025".
    pub years: String,
    /// Price range in the local market, e.g. "\u{20b9}8L - \u{20b9}15L".
    pub price_range: String,
    /// Why this car fits the collected preferences.
    pub rationale: String,
    /// Feature highlights, most relevant first.
    pub highlights: Vec<String>,
    /// Main advantages.
    pub pros: Vec<String>,
    /// Honest limitations.
    pub cons: Vec<String>,
    /// How friendly the car is for senior drivers, 1-10.
    pub senior_friendly_rating: u8,
    /// Expected fuel economy, e.g. "16-18 kmpl".
    pub fuel_economy: String,
    /// Safety assessment, e.g. "5 stars".
    pub safety_rating: String,
    /// Running-cost tier.
    pub maintenance_cost: MaintenanceCost,
}

impl Recommendation {
    /// Display name combining make and model.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }

    /// True when the fields a report or comparison needs are all present.
    pub fn is_presentable(&self) -> bool {
        !self.make.trim().is_empty()
            && !self.model.trim().is_empty()
            && !self.price_range.trim().is_empty()
    }
}
