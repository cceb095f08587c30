//! Seeded sample reviews shown in a fresh session.

use std::collections::BTreeMap;

use crate::domain::foundation::{ReviewId, Timestamp};

use super::review::Review;

fn ratings(pairs: &[(&str, u8)]) -> BTreeMap<String, u8> {
    pairs
        .iter()
        .map(|(category, stars)| (category.to_string(), *stars))
        .collect()
}

/// The starter review set for a new session.
pub fn sample_reviews() -> Vec<Review> {
    vec![
        Review {
            id: ReviewId::new(),
            car_make: "Maruti Suzuki".to_string(),
            car_model: "Swift".to_string(),
            reviewer_name: "Rajesh Kumar (62)".to_string(),
            rating: 4,
            text: "Very easy to drive and park, and the automatic variant handles city \
                   traffic well. Service is available everywhere, and I get over 18 kmpl \
                   in the city. Only complaint is the rear seat could be more spacious."
                .to_string(),
            category_ratings: ratings(&[
                ("Overall Experience", 4),
                ("Fuel Efficiency", 5),
                ("Ease of Use", 5),
                ("Service & Maintenance", 5),
                ("Comfort & Interior", 4),
            ]),
            senior_recommended: true,
            helpful_votes: 23,
            submitted_at: Timestamp::now(),
        },
        Review {
            id: ReviewId::new(),
            car_make: "Honda".to_string(),
            car_model: "City".to_string(),
            reviewer_name: "Sunita Sharma (68)".to_string(),
            rating: 5,
            text: "Bought this for my retirement years. The CVT automatic is completely \
                   smooth, the rear seat is comfortable for passengers, and the build \
                   feels solid. Slightly expensive, but the refinement justifies it."
                .to_string(),
            category_ratings: ratings(&[
                ("Overall Experience", 5),
                ("Comfort & Interior", 5),
                ("Ease of Use", 5),
                ("Value for Money", 4),
            ]),
            senior_recommended: true,
            helpful_votes: 31,
            submitted_at: Timestamp::now(),
        },
        Review {
            id: ReviewId::new(),
            car_make: "Hyundai".to_string(),
            car_model: "Creta".to_string(),
            reviewer_name: "Ashok Mehta (65)".to_string(),
            rating: 4,
            text: "The high seating position makes getting in and out easy, which \
                   matters with joint issues. Visibility is excellent and it is loaded \
                   with safety systems. The ride is a bit firm on bad roads and city \
                   fuel economy could be better."
                .to_string(),
            category_ratings: ratings(&[
                ("Overall Experience", 4),
                ("Safety Features", 5),
                ("Ease of Use", 5),
                ("Fuel Efficiency", 4),
            ]),
            senior_recommended: true,
            helpful_votes: 18,
            submitted_at: Timestamp::now(),
        },
    ]
}
