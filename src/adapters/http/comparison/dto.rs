//! HTTP DTOs for comparison endpoints.

use serde::Serialize;

use crate::domain::comparison::{AttributeRow, ComparisonTable, FeatureRow};

/// The derived side-by-side table.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonTableResponse {
    pub columns: Vec<String>,
    pub attributes: Vec<AttributeRow>,
    pub features: Vec<FeatureRow>,
}

impl From<ComparisonTable> for ComparisonTableResponse {
    fn from(table: ComparisonTable) -> Self {
        Self {
            columns: table.columns,
            attributes: table.attributes,
            features: table.features,
        }
    }
}
