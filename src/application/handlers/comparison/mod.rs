//! Comparison-set operations and the derived table.

mod get_comparison;
mod update_comparison;

pub use get_comparison::GetComparisonHandler;
pub use update_comparison::{
    ComparisonAction, UpdateComparisonCommand, UpdateComparisonError, UpdateComparisonHandler,
};
