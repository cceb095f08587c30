//! HTTP adapter for reviews.

mod dto;
mod handlers;
mod routes;

pub use dto::{ReviewListingResponse, ReviewResponse, SubmitReviewRequest};
pub use handlers::ReviewHandlers;
pub use routes::review_routes;
