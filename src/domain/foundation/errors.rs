//! Validation errors for value-object construction and user input.

use thiserror::Error;

/// Errors produced when user input fails a domain validation rule.
///
/// Validation failures are always recoverable: the caller re-prompts with
/// the message and no state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{field}' is required")]
    MissingRequired { field: String },

    #[error("'{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("'{value}' is not one of the available options for '{field}'")]
    NotAnOption { field: String, value: String },

    #[error("'{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("'{field}' exceeds the maximum length of {max} characters")]
    TooLong { field: String, max: usize },

    #[error("'{field}' has the wrong answer kind: expected {expected}")]
    WrongKind { field: String, expected: &'static str },
}

impl ValidationError {
    /// Creates a missing-required-field error.
    pub fn missing_required(field: impl Into<String>) -> Self {
        Self::MissingRequired { field: field.into() }
    }

    /// Creates an empty-field error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField { field: field.into() }
    }

    /// Creates a not-an-option error.
    pub fn not_an_option(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NotAnOption {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an out-of-range error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        Self::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a too-long error.
    pub fn too_long(field: impl Into<String>, max: usize) -> Self {
        Self::TooLong {
            field: field.into(),
            max,
        }
    }

    /// Creates a wrong-kind error.
    pub fn wrong_kind(field: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongKind {
            field: field.into(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = ValidationError::missing_required("budget");
        assert_eq!(err.to_string(), "'budget' is required");

        let err = ValidationError::not_an_option("fuel_preference", "Steam");
        assert_eq!(
            err.to_string(),
            "'Steam' is not one of the available options for 'fuel_preference'"
        );
    }

    #[test]
    fn out_of_range_reports_bounds() {
        let err = ValidationError::out_of_range("rating", 1, 5, 9);
        assert_eq!(err.to_string(), "'rating' must be between 1 and 5, got 9");
    }
}
