//! The per-session questionnaire state machine.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::answer::{Answers, AnswerValue};
use super::errors::QuestionnaireError;
use super::graph::StepGraph;
use super::step::{QuestionStep, StepId};

/// Where the engine currently is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Cursor {
    /// Waiting for an answer to this step.
    AtStep { step: StepId },
    /// Terminal state; every required step on the path is answered.
    Complete,
}

/// Outcome of a successful `advance` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the given step.
    Next(StepId),
    /// The questionnaire reached the Complete state.
    Complete,
}

/// Progress snapshot for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Steps answered so far along the taken path.
    pub answered: usize,
    /// Total steps in the catalog (an upper bound; branches may skip some).
    pub total: usize,
    /// True once the Complete state is reached.
    pub complete: bool,
}

/// Drives one user's walk through the step graph.
///
/// The engine owns the collected answers and the path taken. Answers for
/// steps already advanced past are immutable except through [`go_back`],
/// which discards the most recent answer and restores its step.
///
/// [`go_back`]: QuestionnaireEngine::go_back
#[derive(Debug, Clone)]
pub struct QuestionnaireEngine {
    graph: Arc<StepGraph>,
    answers: Answers,
    /// Steps answered, in the order they were answered.
    path: Vec<StepId>,
    cursor: Cursor,
}

impl QuestionnaireEngine {
    /// Creates an engine positioned at the catalog's first step.
    pub fn new(graph: Arc<StepGraph>) -> Self {
        let first = graph.first().id.clone();
        Self {
            graph,
            answers: Answers::new(),
            path: Vec::new(),
            cursor: Cursor::AtStep { step: first },
        }
    }

    /// Creates an engine over the standard car-preference catalog.
    pub fn standard() -> Self {
        Self::new(StepGraph::standard())
    }

    /// The step currently awaiting an answer, or `None` when complete.
    pub fn current_step(&self) -> Option<&QuestionStep> {
        match &self.cursor {
            Cursor::AtStep { step } => self.graph.get(step),
            Cursor::Complete => None,
        }
    }

    /// The current cursor.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// True once the terminal state has been reached.
    pub fn is_complete(&self) -> bool {
        matches!(self.cursor, Cursor::Complete)
    }

    /// The collected answers.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Progress snapshot.
    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.path.len(),
            total: self.graph.len(),
            complete: self.is_complete(),
        }
    }

    /// Validates and records an answer for the current step, then moves to
    /// its successor or to the Complete state.
    ///
    /// # Errors
    ///
    /// - [`QuestionnaireError::Invalid`] if the answer fails validation;
    ///   the engine is left exactly as it was.
    /// - [`QuestionnaireError::AlreadyComplete`] after the terminal state.
    pub fn advance(&mut self, answer: AnswerValue) -> Result<Advance, QuestionnaireError> {
        let step_id = match &self.cursor {
            Cursor::AtStep { step } => step.clone(),
            Cursor::Complete => return Err(QuestionnaireError::AlreadyComplete),
        };

        let step = self
            .graph
            .get(&step_id)
            .ok_or_else(|| QuestionnaireError::UnknownStep(step_id.clone()))?;
        step.validate(&answer)?;

        self.answers.insert(step_id.clone(), answer);
        self.path.push(step_id.clone());

        match self.graph.next_step(&step_id, &self.answers) {
            Some(next) => {
                self.cursor = Cursor::AtStep { step: next.clone() };
                Ok(Advance::Next(next))
            }
            None => {
                if let Some(missing) = self.graph.first_unanswered_required(&self.answers) {
                    // Roll the recording back; Complete must never be
                    // reached with a required answer missing.
                    self.path.pop();
                    self.answers.remove(&step_id);
                    return Err(QuestionnaireError::RequiredStepUnanswered(missing));
                }
                self.cursor = Cursor::Complete;
                Ok(Advance::Complete)
            }
        }
    }

    /// Discards the most recently recorded answer and restores its step as
    /// current. Also the way out of the Complete state.
    pub fn go_back(&mut self) -> Result<&QuestionStep, QuestionnaireError> {
        let previous = self.path.pop().ok_or(QuestionnaireError::AtFirstStep)?;
        self.answers.remove(&previous);
        self.cursor = Cursor::AtStep {
            step: previous.clone(),
        };
        self.graph
            .get(&previous)
            .ok_or(QuestionnaireError::UnknownStep(previous))
    }

    /// Clears all answers and returns to the first step.
    pub fn restart(&mut self) {
        self.answers = Answers::new();
        self.path.clear();
        self.cursor = Cursor::AtStep {
            step: self.graph.first().id.clone(),
        };
    }
}
