//! Deterministic markdown rendering of the recommendations report.
//!
//! The layout is fixed: title, generation date, a preferences summary
//! table, one section per car with highlights and pros/cons, and a
//! closing next-steps list. Completeness is validated up front so a
//! half-filled entity fails before anything is rendered.

use crate::domain::foundation::Timestamp;
use crate::domain::questionnaire::Answers;
use crate::domain::recommendation::Recommendation;
use crate::ports::RenderError;

/// Builds the markdown report for the given cars.
///
/// # Errors
///
/// - [`RenderError::NothingToExport`] when `cars` is empty.
/// - [`RenderError::MissingField`] when a car lacks make, model, or a
///   price range.
pub fn build_report(
    title: &str,
    answers: &Answers,
    cars: &[&Recommendation],
) -> Result<String, RenderError> {
    if cars.is_empty() {
        return Err(RenderError::NothingToExport(
            "no recommendations selected".to_string(),
        ));
    }
    for car in cars {
        for (field, value) in [
            ("make", &car.make),
            ("model", &car.model),
            ("price_range", &car.price_range),
        ] {
            if value.trim().is_empty() {
                return Err(RenderError::MissingField {
                    field: field.to_string(),
                });
            }
        }
    }

    let mut doc = String::new();
    doc.push_str(&format!("# {title} \u{2014} Recommendations Report\n\n"));
    doc.push_str(&format!("Generated on {}\n\n", Timestamp::now().report_date()));

    doc.push_str("## Your Preferences\n\n");
    if answers.is_empty() {
        doc.push_str("_No questionnaire answers on file._\n\n");
    } else {
        doc.push_str("| Question | Answer |\n|---|---|\n");
        for (step, answer) in answers.iter() {
            if answer.is_empty() {
                continue;
            }
            doc.push_str(&format!(
                "| {} | {} |\n",
                title_case(step.as_str()),
                answer.display().replace('|', "\\|")
            ));
        }
        doc.push('\n');
    }

    doc.push_str("## Recommended Cars\n\n");
    for (i, car) in cars.iter().enumerate() {
        doc.push_str(&format!("### {}. {}\n\n", i + 1, car.display_name()));
        doc.push_str("| | |\n|---|---|\n");
        doc.push_str(&format!("| Price Range | {} |\n", car.price_range));
        if !car.years.trim().is_empty() {
            doc.push_str(&format!("| Model Years | {} |\n", car.years));
        }
        if !car.fuel_economy.trim().is_empty() {
            doc.push_str(&format!("| Fuel Economy | {} |\n", car.fuel_economy));
        }
        if !car.safety_rating.trim().is_empty() {
            doc.push_str(&format!("| Safety Rating | {} |\n", car.safety_rating));
        }
        doc.push_str(&format!(
            "| Senior-Friendly Rating | {}/10 |\n",
            car.senior_friendly_rating
        ));
        doc.push_str(&format!("| Maintenance Cost | {} |\n\n", car.maintenance_cost));

        doc.push_str(&format!("**Why this car suits you:** {}\n\n", car.rationale));

        if !car.highlights.is_empty() {
            doc.push_str("**Key features:**\n\n");
            for feature in &car.highlights {
                doc.push_str(&format!("- {feature}\n"));
            }
            doc.push('\n');
        }
        if !car.pros.is_empty() {
            doc.push_str("**Pros:**\n\n");
            for pro in &car.pros {
                doc.push_str(&format!("- {pro}\n"));
            }
            doc.push('\n');
        }
        if !car.cons.is_empty() {
            doc.push_str("**Considerations:**\n\n");
            for con in &car.cons {
                doc.push_str(&format!("- {con}\n"));
            }
            doc.push('\n');
        }
    }

    doc.push_str("## Next Steps\n\n");
    for tip in [
        "Visit authorized dealerships to test drive the recommended cars",
        "Compare insurance quotes from multiple providers",
        "Check service center locations in your area before finalizing",
        "Consider extended warranty options for peace of mind",
        "Verify all safety features are included in your chosen variant",
    ] {
        doc.push_str(&format!("- {tip}\n"));
    }

    Ok(doc)
}

/// "primary_use" -> "Primary Use"
fn title_case(id: &str) -> String {
    id.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
