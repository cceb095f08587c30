//! The review entity and rating aggregation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{ReviewId, Timestamp, ValidationError};

/// The fixed rating categories every review scores.
pub const REVIEW_CATEGORIES: &[&str] = &[
    "Overall Experience",
    "Comfort & Interior",
    "Performance & Driving",
    "Fuel Efficiency",
    "Safety Features",
    "Ease of Use",
    "Value for Money",
    "Service & Maintenance",
];

/// Incoming review data, validated into a [`Review`].
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewDraft {
    pub car_make: String,
    pub car_model: String,
    pub reviewer_name: String,
    /// Overall stars, 1-5.
    pub rating: u8,
    pub text: String,
    /// Stars per category, 1-5; keys must come from [`REVIEW_CATEGORIES`].
    #[serde(default)]
    pub category_ratings: BTreeMap<String, u8>,
    #[serde(default)]
    pub senior_recommended: bool,
}

/// A published owner review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub car_make: String,
    pub car_model: String,
    pub reviewer_name: String,
    pub rating: u8,
    pub text: String,
    pub category_ratings: BTreeMap<String, u8>,
    pub senior_recommended: bool,
    pub helpful_votes: u32,
    pub submitted_at: Timestamp,
}

impl Review {
    /// Validates a draft and publishes it with a fresh id.
    ///
    /// # Errors
    ///
    /// Rejects empty make/model/reviewer/text, star values outside 1-5,
    /// and category keys outside the fixed list.
    pub fn from_draft(draft: ReviewDraft) -> Result<Self, ValidationError> {
        for (field, value) in [
            ("car_make", &draft.car_make),
            ("car_model", &draft.car_model),
            ("reviewer_name", &draft.reviewer_name),
            ("text", &draft.text),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::empty_field(field));
            }
        }
        if !(1..=5).contains(&draft.rating) {
            return Err(ValidationError::out_of_range(
                "rating",
                1,
                5,
                draft.rating as i64,
            ));
        }
        for (category, stars) in &draft.category_ratings {
            if !REVIEW_CATEGORIES.contains(&category.as_str()) {
                return Err(ValidationError::not_an_option(
                    "category_ratings",
                    category.clone(),
                ));
            }
            if !(1..=5).contains(stars) {
                return Err(ValidationError::out_of_range(
                    category.clone(),
                    1,
                    5,
                    *stars as i64,
                ));
            }
        }

        Ok(Self {
            id: ReviewId::new(),
            car_make: draft.car_make,
            car_model: draft.car_model,
            reviewer_name: draft.reviewer_name,
            rating: draft.rating,
            text: draft.text,
            category_ratings: draft.category_ratings,
            senior_recommended: draft.senior_recommended,
            helpful_votes: 0,
            submitted_at: Timestamp::now(),
        })
    }

    /// True when the review is about the given car.
    pub fn is_about(&self, make: &str, model: &str) -> bool {
        self.car_make.eq_ignore_ascii_case(make) && self.car_model.eq_ignore_ascii_case(model)
    }
}

/// Average ratings over a set of reviews.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSummary {
    /// Number of reviews aggregated.
    pub review_count: usize,
    /// Mean of the overall star ratings.
    pub overall: f64,
    /// Mean stars per category, over reviews that scored the category.
    pub by_category: BTreeMap<String, f64>,
}

impl RatingSummary {
    /// Aggregates the given reviews.
    pub fn aggregate<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> Self {
        let mut count = 0usize;
        let mut overall_sum = 0u32;
        let mut sums: BTreeMap<String, (u32, u32)> = BTreeMap::new();

        for review in reviews {
            count += 1;
            overall_sum += review.rating as u32;
            for (category, stars) in &review.category_ratings {
                let entry = sums.entry(category.clone()).or_insert((0, 0));
                entry.0 += *stars as u32;
                entry.1 += 1;
            }
        }

        let overall = if count == 0 {
            0.0
        } else {
            overall_sum as f64 / count as f64
        };
        let by_category = sums
            .into_iter()
            .map(|(category, (sum, n))| (category, sum as f64 / n as f64))
            .collect();

        Self {
            review_count: count,
            overall,
            by_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(rating: u8) -> ReviewDraft {
        ReviewDraft {
            car_make: "Honda".to_string(),
            car_model: "City".to_string(),
            reviewer_name: "S. Sharma".to_string(),
            rating,
            text: "Smooth CVT, very comfortable for long drives.".to_string(),
            category_ratings: BTreeMap::from([
                ("Ease of Use".to_string(), 5),
                ("Value for Money".to_string(), 4),
            ]),
            senior_recommended: true,
        }
    }

    #[test]
    fn valid_draft_publishes() {
        let review = Review::from_draft(draft(5)).unwrap();
        assert_eq!(review.helpful_votes, 0);
        assert!(review.is_about("honda", "CITY"));
    }

    #[test]
    fn rating_bounds_are_enforced() {
        assert!(Review::from_draft(draft(0)).is_err());
        assert!(Review::from_draft(draft(6)).is_err());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut d = draft(4);
        d.category_ratings.insert("Cup Holders".to_string(), 5);
        let err = Review::from_draft(d).unwrap_err();
        assert!(matches!(err, ValidationError::NotAnOption { .. }));
    }

    #[test]
    fn empty_text_is_rejected() {
        let mut d = draft(4);
        d.text = "  ".to_string();
        assert!(Review::from_draft(d).is_err());
    }

    #[test]
    fn aggregation_averages_per_category() {
        let a = Review::from_draft(draft(4)).unwrap();
        let mut second = draft(2);
        second.category_ratings = BTreeMap::from([("Ease of Use".to_string(), 3)]);
        let b = Review::from_draft(second).unwrap();

        let summary = RatingSummary::aggregate([&a, &b]);
        assert_eq!(summary.review_count, 2);
        assert!((summary.overall - 3.0).abs() < f64::EPSILON);
        assert!((summary.by_category["Ease of Use"] - 4.0).abs() < f64::EPSILON);
        // Only one review scored Value for Money.
        assert!((summary.by_category["Value for Money"] - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn aggregating_nothing_is_zero() {
        let summary = RatingSummary::aggregate(std::iter::empty::<&Review>());
        assert_eq!(summary.review_count, 0);
        assert_eq!(summary.overall, 0.0);
        assert!(summary.by_category.is_empty());
    }
}
