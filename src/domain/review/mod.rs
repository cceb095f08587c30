//! Owner reviews with per-category ratings.
//!
//! Reviews live in session memory: each new session starts from the seeded
//! samples, and user submissions last until logout.

mod review;
mod samples;

pub use review::{RatingSummary, Review, ReviewDraft, REVIEW_CATEGORIES};
pub use samples::sample_reviews;
