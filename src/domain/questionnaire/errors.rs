//! Questionnaire error types.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

use super::step::StepId;

/// Errors raised by the questionnaire engine and graph construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireError {
    /// The submitted answer failed the current step's validation rule.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The questionnaire already reached its terminal state.
    #[error("the questionnaire is already complete")]
    AlreadyComplete,

    /// There is no previous step to go back to.
    #[error("already at the first step")]
    AtFirstStep,

    /// A step catalog was built with no steps.
    #[error("a step catalog must contain at least one step")]
    EmptyGraph,

    /// Two steps in a catalog share an id.
    #[error("duplicate step id: {0}")]
    DuplicateStep(StepId),

    /// A successor points at a step that does not exist.
    #[error("unknown step id: {0}")]
    UnknownStep(StepId),

    /// A required step on the taken path lost its answer. Indicates a bug
    /// in path bookkeeping rather than bad user input.
    #[error("required step '{0}' has no validated answer")]
    RequiredStepUnanswered(StepId),
}
