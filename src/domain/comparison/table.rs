//! Pure derivation of the side-by-side comparison table.
//!
//! No network calls and no mutation: given the selected cars, produce
//! attribute rows (one value per car) and a feature matrix (presence of
//! each feature per car).

use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::recommendation::Recommendation;

/// One comparable attribute across all selected cars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeRow {
    /// Attribute label, e.g. "Price Range".
    pub attribute: String,
    /// One value per car, in column order.
    pub values: Vec<String>,
}

/// One feature's presence across all selected cars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRow {
    pub feature: String,
    /// One flag per car, in column order.
    pub present: Vec<bool>,
}

/// The derived side-by-side structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    /// Column headers: car display names in selection order.
    pub columns: Vec<String>,
    /// Attribute rows keyed by comparable attribute.
    pub attributes: Vec<AttributeRow>,
    /// Feature matrix over the union of all highlighted features.
    pub features: Vec<FeatureRow>,
}

impl ComparisonTable {
    /// Builds the table for the given cars, in the given column order.
    pub fn derive(cars: &[&Recommendation]) -> Self {
        let columns = cars.iter().map(|c| c.display_name()).collect();

        let attributes = vec![
            row("Price Range", cars, |c| c.price_range.clone()),
            row("Model Years", cars, |c| c.years.clone()),
            row("Fuel Economy", cars, |c| c.fuel_economy.clone()),
            row("Safety Rating", cars, |c| c.safety_rating.clone()),
            row("Maintenance Cost", cars, |c| c.maintenance_cost.to_string()),
            row("Senior-Friendly Rating", cars, |c| {
                format!("{}/10", c.senior_friendly_rating)
            }),
            row("Feature Count", cars, |c| c.highlights.len().to_string()),
        ];

        // Union of features, sorted for a stable row order.
        let all_features: BTreeSet<&String> =
            cars.iter().flat_map(|c| c.highlights.iter()).collect();
        let features = all_features
            .into_iter()
            .map(|feature| FeatureRow {
                feature: feature.clone(),
                present: cars
                    .iter()
                    .map(|c| c.highlights.iter().any(|f| f == feature))
                    .collect(),
            })
            .collect();

        Self {
            columns,
            attributes,
            features,
        }
    }
}

fn row(label: &str, cars: &[&Recommendation], value: impl Fn(&Recommendation) -> String) -> AttributeRow {
    AttributeRow {
        attribute: label.to_string(),
        values: cars.iter().map(|c| value(c)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RecommendationId;
    use crate::domain::recommendation::MaintenanceCost;

    fn car(make: &str, model: &str, highlights: &[&str]) -> Recommendation {
        Recommendation {
            id: RecommendationId::new(),
            make: make.to_string(),
            model: model.to_string(),
            years: "2023-2025".to_string(),
            price_range: "\u{20b9}8L - \u{20b9}15L".to_string(),
            rationale: "Fits the stated needs.".to_string(),
            highlights: highlights.iter().map(|s| s.to_string()).collect(),
            pros: vec![],
            cons: vec![],
            senior_friendly_rating: 8,
            fuel_economy: "16-18 kmpl".to_string(),
            safety_rating: "5 stars".to_string(),
            maintenance_cost: MaintenanceCost::Medium,
        }
    }

    #[test]
    fn columns_follow_selection_order() {
        let a = car("Tata", "Nexon", &["Six airbags"]);
        let b = car("Hyundai", "Creta", &["360 camera"]);
        let table = ComparisonTable::derive(&[&a, &b]);
        assert_eq!(table.columns, vec!["Tata Nexon", "Hyundai Creta"]);
    }

    #[test]
    fn every_attribute_row_has_one_value_per_car() {
        let a = car("Tata", "Nexon", &[]);
        let b = car("Hyundai", "Creta", &[]);
        let table = ComparisonTable::derive(&[&a, &b]);
        for row in &table.attributes {
            assert_eq!(row.values.len(), 2, "row {}", row.attribute);
        }
    }

    #[test]
    fn feature_matrix_covers_the_union() {
        let a = car("Tata", "Nexon", &["Six airbags", "Sunroof"]);
        let b = car("Hyundai", "Creta", &["360 camera", "Sunroof"]);
        let table = ComparisonTable::derive(&[&a, &b]);

        assert_eq!(table.features.len(), 3);
        let sunroof = table
            .features
            .iter()
            .find(|f| f.feature == "Sunroof")
            .unwrap();
        assert_eq!(sunroof.present, vec![true, true]);
        let camera = table
            .features
            .iter()
            .find(|f| f.feature == "360 camera")
            .unwrap();
        assert_eq!(camera.present, vec![false, true]);
    }

    #[test]
    fn empty_selection_derives_an_empty_table() {
        let table = ComparisonTable::derive(&[]);
        assert!(table.columns.is_empty());
        assert!(table.features.is_empty());
    }
}
