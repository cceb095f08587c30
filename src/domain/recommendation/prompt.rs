//! Prompt construction for the recommendation generator.
//!
//! The templates embed the collected answers in a fixed structure. The
//! system prompt carries the advisory policy: safety, comfort, ease of
//! use, and reliability first, framed for senior buyers in the Indian
//! market.

use crate::domain::questionnaire::{Answers, StepId};

/// System prompt for the recommendation call.
///
/// Pins the response contract: a JSON array of exactly `count` entries
/// with named fields, so the parser can be strict.
pub fn recommendation_system_prompt(count: usize) -> String {
    format!(
        r#"You are an expert car consultant specializing in the Indian automotive market, with deep knowledge of senior buyers' needs. You know all car brands available in India, from Maruti Suzuki and Tata through Toyota and the premium European marques.

Your expertise includes:
- Senior buyers' priorities: safety, comfort, ease of use, reliability, service network
- Indian road conditions and driving patterns
- Maintenance costs, fuel efficiency, and resale values
- Physical accessibility needs of senior drivers

Always prioritize, in order:
1. Safety features and build quality
2. Ease of driving and parking
3. Comfort and accessibility
4. Reliable after-sales service
5. Value for money and low maintenance

Respond with a JSON array of exactly {count} recommendations and nothing else. Each entry must contain:
- "make": manufacturer name
- "model": car name and variant
- "years": model-year range, e.g. "2022-2025"
- "price": price range in Indian Rupees
- "why_suitable": 2-3 sentences explaining the fit for this buyer
- "key_features": array of 4-5 most relevant features
- "pros": array of 3-4 main advantages
- "cons": array of 2-3 honest limitations
- "senior_friendly_rating": integer from 1 to 10
- "fuel_efficiency": expected mileage, e.g. "16-18 kmpl"
- "safety_rating": safety assessment, e.g. "5 stars"
- "maintenance_cost": one of "Low", "Medium", "High""#
    )
}

/// User prompt embedding the collected questionnaire answers.
pub fn recommendation_user_prompt(answers: &Answers, count: usize) -> String {
    let mut prompt = format!(
        "Please recommend {count} cars for a senior buyer with these requirements:\n"
    );

    let mut section = |label: &str, step: &str| {
        let value = answers
            .get(&StepId::from(step))
            .filter(|a| !a.is_empty())
            .map(|a| a.display())
            .unwrap_or_else(|| "Not specified".to_string());
        prompt.push_str(&format!("\n{label}: {value}\n"));
    };

    section("BUDGET", "budget");
    section("PRIMARY USE", "primary_use");
    section("FAMILY SIZE", "family_size");
    section("DRIVING EXPERIENCE", "driving_experience");
    section("FUEL PREFERENCE", "fuel_preference");
    section("IMPORTANT FEATURES", "important_features");
    section("PHYSICAL CONSIDERATIONS", "physical_considerations");
    section("BRAND PREFERENCES", "brand_preference");
    section("ADDITIONAL REQUIREMENTS", "additional_requirements");

    prompt.push_str(
        "\nConsider the Indian market, road conditions, and service network \
         availability, along with senior-specific needs such as easy entry and \
         exit, simple controls, and good visibility. Provide a diverse mix of \
         body styles while staying within budget and matching the needs above.",
    );

    prompt
}
