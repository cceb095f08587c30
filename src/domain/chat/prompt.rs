//! System prompt for the expert-chat feature.

use crate::domain::questionnaire::{Answers, StepId};

const BASE_PROMPT: &str = r#"You are a knowledgeable car consultant helping people choose the right car in India. You have extensive knowledge of all car brands available in the Indian market, from Maruti Suzuki and Tata through Toyota and the premium European marques.

Your expertise includes:
- Indian road conditions and driving patterns
- Maintenance costs, fuel efficiency, and service networks
- Safety features and reliability ratings
- Price comparisons and value for money

Always prioritize safety and reliability, comfort and practicality, service availability, and value for money.

Communication style: clear professional language, thorough but concise, specific model recommendations where appropriate, and always explain the reasoning."#;

/// Builds the chat system prompt, appending the user's questionnaire
/// answers as personal context when any are present.
pub fn expert_system_prompt(answers: &Answers) -> String {
    let mut prompt = BASE_PROMPT.to_string();

    let context: Vec<String> = [
        ("Budget", "budget"),
        ("Primary use", "primary_use"),
        ("Family size", "family_size"),
        ("Fuel preference", "fuel_preference"),
        ("Important features", "important_features"),
    ]
    .iter()
    .filter_map(|(label, step)| {
        answers
            .get(&StepId::from(*step))
            .filter(|a| !a.is_empty())
            .map(|a| format!("{label}: {}", a.display()))
    })
    .collect();

    if !context.is_empty() {
        prompt.push_str("\n\nUSER CONTEXT:\n");
        prompt.push_str(&context.join("\n"));
        prompt.push_str("\n\nUse this context for personalized advice.");
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::AnswerValue;

    #[test]
    fn no_answers_means_no_context_block() {
        let prompt = expert_system_prompt(&Answers::new());
        assert!(!prompt.contains("USER CONTEXT"));
    }

    #[test]
    fn answers_appear_as_context() {
        let mut answers = Answers::new();
        answers.insert(StepId::from("budget"), AnswerValue::range(500_000, 1_000_000));
        answers.insert(
            StepId::from("fuel_preference"),
            AnswerValue::choice("Hybrid"),
        );

        let prompt = expert_system_prompt(&answers);
        assert!(prompt.contains("USER CONTEXT"));
        assert!(prompt.contains("Fuel preference: Hybrid"));
        assert!(prompt.contains("Budget: \u{20b9}5,00,000 - \u{20b9}10,00,000"));
    }
}
