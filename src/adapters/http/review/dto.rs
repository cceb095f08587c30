//! HTTP DTOs for review endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::application::handlers::review::ReviewListing;
use crate::domain::review::{RatingSummary, Review, ReviewDraft};

/// Request to submit a review.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitReviewRequest {
    pub car_make: String,
    pub car_model: String,
    pub reviewer_name: String,
    pub rating: u8,
    pub text: String,
    #[serde(default)]
    pub category_ratings: BTreeMap<String, u8>,
    #[serde(default)]
    pub senior_recommended: bool,
}

impl From<SubmitReviewRequest> for ReviewDraft {
    fn from(req: SubmitReviewRequest) -> Self {
        Self {
            car_make: req.car_make,
            car_model: req.car_model,
            reviewer_name: req.reviewer_name,
            rating: req.rating,
            text: req.text,
            category_ratings: req.category_ratings,
            senior_recommended: req.senior_recommended,
        }
    }
}

/// One published review.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub id: String,
    pub car_make: String,
    pub car_model: String,
    pub reviewer_name: String,
    pub rating: u8,
    pub text: String,
    pub category_ratings: BTreeMap<String, u8>,
    pub senior_recommended: bool,
    pub helpful_votes: u32,
    pub submitted_at: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.to_string(),
            car_make: review.car_make,
            car_model: review.car_model,
            reviewer_name: review.reviewer_name,
            rating: review.rating,
            text: review.text,
            category_ratings: review.category_ratings,
            senior_recommended: review.senior_recommended,
            helpful_votes: review.helpful_votes,
            submitted_at: review.submitted_at.to_rfc3339(),
        }
    }
}

/// Review listing plus aggregated ratings.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewListingResponse {
    pub reviews: Vec<ReviewResponse>,
    pub summary: RatingSummary,
}

impl From<ReviewListing> for ReviewListingResponse {
    fn from(listing: ReviewListing) -> Self {
        Self {
            reviews: listing.reviews.into_iter().map(Into::into).collect(),
            summary: listing.summary,
        }
    }
}
