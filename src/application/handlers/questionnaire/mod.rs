//! Questionnaire operations: answer, go back, restart, progress.

mod answer_step;
mod get_progress;
mod go_back;
mod restart;

pub use answer_step::{AnswerStepCommand, AnswerStepHandler};
pub use get_progress::GetProgressHandler;
pub use go_back::GoBackHandler;
pub use restart::RestartHandler;

use thiserror::Error;

use crate::domain::questionnaire::{Answers, Cursor, Progress, QuestionStep, QuestionnaireError};
use crate::domain::session::SessionState;
use crate::ports::SessionStoreError;

/// Snapshot of the questionnaire returned by every operation.
#[derive(Debug, Clone)]
pub struct QuestionnaireSnapshot {
    /// The step awaiting an answer; `None` once complete.
    pub current_step: Option<QuestionStep>,
    /// Cursor state.
    pub cursor: Cursor,
    /// Progress counters.
    pub progress: Progress,
    /// Answers collected so far.
    pub answers: Answers,
}

/// Errors shared by the questionnaire handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireOpError {
    #[error(transparent)]
    Session(#[from] SessionStoreError),

    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),
}

/// Builds the snapshot every questionnaire operation returns.
pub(crate) fn snapshot_of(state: &SessionState) -> QuestionnaireSnapshot {
    QuestionnaireSnapshot {
        current_step: state.engine.current_step().cloned(),
        cursor: state.engine.cursor().clone(),
        progress: state.engine.progress(),
        answers: state.engine.answers().clone(),
    }
}
