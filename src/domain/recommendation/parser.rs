//! Strict parsing of the provider's recommendation response.
//!
//! The response contract is a JSON array with named fields. Anything the
//! model wraps around the array (prose, code fences) is tolerated, but the
//! array itself must deserialize into the expected shape; no lenient
//! text-scraping fallback exists, and unparsed text never travels further.

use serde::Deserialize;

use crate::domain::foundation::RecommendationId;

use super::car::{MaintenanceCost, Recommendation};
use super::errors::GenerationError;

/// Wire shape of one entry in the provider's JSON array.
#[derive(Debug, Deserialize)]
struct RecommendationDraft {
    make: String,
    model: String,
    #[serde(default)]
    years: String,
    price: String,
    why_suitable: String,
    #[serde(default)]
    key_features: Vec<String>,
    #[serde(default)]
    pros: Vec<String>,
    #[serde(default)]
    cons: Vec<String>,
    senior_friendly_rating: u8,
    #[serde(default)]
    fuel_efficiency: String,
    #[serde(default)]
    safety_rating: String,
    maintenance_cost: MaintenanceCost,
}

impl RecommendationDraft {
    fn into_recommendation(self) -> Result<Recommendation, GenerationError> {
        for (field, value) in [
            ("make", &self.make),
            ("model", &self.model),
            ("price", &self.price),
            ("why_suitable", &self.why_suitable),
        ] {
            if value.trim().is_empty() {
                return Err(GenerationError::UnexpectedShape(format!(
                    "field '{field}' is empty"
                )));
            }
        }
        if !(1..=10).contains(&self.senior_friendly_rating) {
            return Err(GenerationError::UnexpectedShape(format!(
                "senior_friendly_rating {} is outside 1-10",
                self.senior_friendly_rating
            )));
        }

        Ok(Recommendation {
            id: RecommendationId::new(),
            make: self.make,
            model: self.model,
            years: self.years,
            price_range: self.price,
            rationale: self.why_suitable,
            highlights: self.key_features,
            pros: self.pros,
            cons: self.cons,
            senior_friendly_rating: self.senior_friendly_rating,
            fuel_economy: self.fuel_efficiency,
            safety_rating: self.safety_rating,
            maintenance_cost: self.maintenance_cost,
        })
    }
}

/// Parses the completion text into recommendations, capped at `max`.
///
/// # Errors
///
/// - [`GenerationError::NoJsonFound`] when no JSON array is present.
/// - [`GenerationError::UnexpectedShape`] when the array does not match
///   the contract or a required field is empty.
/// - [`GenerationError::Empty`] when the array has no entries.
pub fn parse_recommendations(
    text: &str,
    max: usize,
) -> Result<Vec<Recommendation>, GenerationError> {
    let start = text.find('[').ok_or(GenerationError::NoJsonFound)?;
    let end = text.rfind(']').ok_or(GenerationError::NoJsonFound)?;
    if end < start {
        return Err(GenerationError::NoJsonFound);
    }

    let drafts: Vec<RecommendationDraft> = serde_json::from_str(&text[start..=end])
        .map_err(|e| GenerationError::UnexpectedShape(e.to_string()))?;

    if drafts.is_empty() {
        return Err(GenerationError::Empty);
    }

    drafts
        .into_iter()
        .take(max)
        .map(RecommendationDraft::into_recommendation)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(make: &str, model: &str) -> String {
        format!(
            r#"{{
                "make": "{make}",
                "model": "{model}",
                "years": "2022-2025",
                "price": "₹8L - ₹15L",
                "why_suitable": "High seating and excellent visibility.",
                "key_features": ["360-degree camera", "Six airbags"],
                "pros": ["Easy entry"],
                "cons": ["Firm ride"],
                "senior_friendly_rating": 8,
                "fuel_efficiency": "16-18 kmpl",
                "safety_rating": "5 stars",
                "maintenance_cost": "Medium"
            }}"#
        )
    }

    #[test]
    fn parses_a_clean_array() {
        let text = format!("[{},{}]", entry("Hyundai", "Creta"), entry("Tata", "Nexon"));
        let cars = parse_recommendations(&text, 5).unwrap();
        assert_eq!(cars.len(), 2);
        assert_eq!(cars[0].display_name(), "Hyundai Creta");
        assert_eq!(cars[1].maintenance_cost, MaintenanceCost::Medium);
    }

    #[test]
    fn tolerates_surrounding_prose_and_fences() {
        let text = format!(
            "Here are my picks:\n```json\n[{}]\n```\nLet me know!",
            entry("Honda", "City")
        );
        let cars = parse_recommendations(&text, 5).unwrap();
        assert_eq!(cars.len(), 1);
    }

    #[test]
    fn caps_at_the_requested_count() {
        let text = format!(
            "[{},{},{}]",
            entry("A", "1"),
            entry("B", "2"),
            entry("C", "3")
        );
        let cars = parse_recommendations(&text, 2).unwrap();
        assert_eq!(cars.len(), 2);
    }

    #[test]
    fn missing_array_is_no_json_found() {
        let err = parse_recommendations("I am sorry, I cannot help.", 5).unwrap_err();
        assert_eq!(err, GenerationError::NoJsonFound);
    }

    #[test]
    fn malformed_json_is_unexpected_shape() {
        let err = parse_recommendations("[{\"make\": }]", 5).unwrap_err();
        assert!(matches!(err, GenerationError::UnexpectedShape(_)));
    }

    #[test]
    fn empty_required_field_is_rejected() {
        let text = entry("", "Creta");
        let err = parse_recommendations(&format!("[{text}]"), 5).unwrap_err();
        assert!(matches!(err, GenerationError::UnexpectedShape(_)));
    }

    #[test]
    fn empty_array_is_rejected() {
        let err = parse_recommendations("[]", 5).unwrap_err();
        assert_eq!(err, GenerationError::Empty);
    }

    #[test]
    fn rating_outside_bounds_is_rejected() {
        let text = entry("Kia", "Sonet").replace("\"senior_friendly_rating\": 8", "\"senior_friendly_rating\": 0");
        let err = parse_recommendations(&format!("[{text}]"), 5).unwrap_err();
        assert!(matches!(err, GenerationError::UnexpectedShape(_)));
    }
}
