//! Review operations.

mod list_reviews;
mod submit_review;

pub use list_reviews::{ListReviewsHandler, ListReviewsQuery, ReviewListing};
pub use submit_review::{SubmitReviewCommand, SubmitReviewError, SubmitReviewHandler};
