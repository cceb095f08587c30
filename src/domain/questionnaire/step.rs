//! Question step definitions: input kinds, validation, branching.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

use super::answer::{Answers, AnswerValue};

/// Identifier of a question step, e.g. "budget" or "fuel_preference".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(String);

impl StepId {
    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StepId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StepId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The input control a step presents, with its validation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputKind {
    /// Exactly one choice from the option list.
    SingleSelect { options: Vec<String> },
    /// Any subset of the option list.
    MultiSelect { options: Vec<String> },
    /// An inclusive price range within fixed bounds.
    BudgetRange { floor: u32, ceiling: u32, increment: u32 },
    /// Free-form text up to a maximum length.
    FreeText { max_len: usize },
}

/// Condition over previously collected answers, used by branch rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// The step was answered with exactly this choice.
    AnswerEquals { step: StepId, value: String },
    /// A multi-choice answer includes this option.
    AnswerContains { step: StepId, value: String },
}

impl Condition {
    /// Evaluates the condition against the collected answers.
    ///
    /// An unanswered step never satisfies a condition.
    pub fn is_met(&self, answers: &Answers) -> bool {
        match self {
            Self::AnswerEquals { step, value } => matches!(
                answers.get(step),
                Some(AnswerValue::Choice { value: v }) if v == value
            ),
            Self::AnswerContains { step, value } => matches!(
                answers.get(step),
                Some(AnswerValue::MultiChoice { values }) if values.iter().any(|v| v == value)
            ),
        }
    }
}

/// One conditional edge out of a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRule {
    /// Condition to evaluate against prior answers.
    pub when: Condition,
    /// Step to jump to when the condition holds.
    pub goto: StepId,
}

/// Successor selector for a step.
///
/// Rules are evaluated in order; the first match wins. `End` marks the
/// final step of a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NextStep {
    /// Unconditional successor.
    Goto { step: StepId },
    /// Conditional successor with a fallback.
    Branch {
        rules: Vec<BranchRule>,
        otherwise: StepId,
    },
    /// No successor: answering this step may complete the questionnaire.
    End,
}

/// A single question in the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionStep {
    /// Stable identifier, also the answer key.
    pub id: StepId,
    /// Question shown to the user.
    pub title: String,
    /// Supporting copy under the title.
    pub description: String,
    /// Optional hint line.
    pub help_text: Option<String>,
    /// Input control and its parameters.
    pub input: InputKind,
    /// Whether a non-empty answer is mandatory.
    pub required: bool,
    /// Successor selector.
    pub next: NextStep,
}

impl QuestionStep {
    /// Validates an answer against this step's input kind and rules.
    ///
    /// A failed validation leaves no trace; the caller re-prompts.
    pub fn validate(&self, answer: &AnswerValue) -> Result<(), ValidationError> {
        let field = self.id.as_str();

        if answer.is_empty() {
            return if self.required {
                Err(ValidationError::missing_required(field))
            } else {
                // Optional steps accept an explicit empty answer as a skip.
                self.check_kind(answer)
            };
        }

        self.check_kind(answer)?;

        match (&self.input, answer) {
            (InputKind::SingleSelect { options }, AnswerValue::Choice { value }) => {
                if !options.iter().any(|o| o == value) {
                    return Err(ValidationError::not_an_option(field, value.clone()));
                }
            }
            (InputKind::MultiSelect { options }, AnswerValue::MultiChoice { values }) => {
                if let Some(bad) = values.iter().find(|v| !options.iter().any(|o| &o == v)) {
                    return Err(ValidationError::not_an_option(field, bad.clone()));
                }
            }
            (
                InputKind::BudgetRange { floor, ceiling, .. },
                AnswerValue::Range { min, max },
            ) => {
                if min > max {
                    return Err(ValidationError::out_of_range(
                        field,
                        *floor as i64,
                        *ceiling as i64,
                        *min as i64,
                    ));
                }
                if min < floor || max > ceiling {
                    let actual = if min < floor { *min } else { *max };
                    return Err(ValidationError::out_of_range(
                        field,
                        *floor as i64,
                        *ceiling as i64,
                        actual as i64,
                    ));
                }
            }
            (InputKind::FreeText { max_len }, AnswerValue::Text { value }) => {
                if value.chars().count() > *max_len {
                    return Err(ValidationError::too_long(field, *max_len));
                }
            }
            // check_kind already rejected every other pairing
            _ => unreachable!("answer kind checked above"),
        }

        Ok(())
    }

    fn check_kind(&self, answer: &AnswerValue) -> Result<(), ValidationError> {
        let expected = match self.input {
            InputKind::SingleSelect { .. } => "choice",
            InputKind::MultiSelect { .. } => "multi_choice",
            InputKind::BudgetRange { .. } => "range",
            InputKind::FreeText { .. } => "text",
        };
        if answer.kind_name() != expected {
            return Err(ValidationError::wrong_kind(self.id.as_str(), expected));
        }
        Ok(())
    }
}
