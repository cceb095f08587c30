//! Car preference questionnaire.
//!
//! An ordered sequence of question steps with validation and conditional
//! branching. The step catalog is static (`StepGraph::standard()`); the
//! per-session [`QuestionnaireEngine`] tracks the path taken, the collected
//! answers, and whether the terminal Complete state has been reached.
//!
//! Branching is modeled explicitly: each step carries a [`NextStep`]
//! selector, and the successor is computed by the pure
//! [`StepGraph::next_step`] function over previously collected answers.

mod answer;
mod engine;
mod errors;
mod graph;
mod step;

pub use answer::{Answers, AnswerValue};
pub use engine::{Advance, Cursor, Progress, QuestionnaireEngine};
pub use errors::QuestionnaireError;
pub use graph::StepGraph;
pub use step::{BranchRule, Condition, InputKind, NextStep, QuestionStep, StepId};
