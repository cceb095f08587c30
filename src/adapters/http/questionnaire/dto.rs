//! HTTP DTOs for questionnaire endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::questionnaire::QuestionnaireSnapshot;
use crate::domain::questionnaire::{AnswerValue, Answers, InputKind, QuestionStep};

/// Request to answer the current step.
///
/// The answer is the tagged [`AnswerValue`] shape, e.g.
/// `{"answer": {"kind": "choice", "value": "Petrol"}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    pub answer: AnswerValue,
}

/// One step as presented to the client.
///
/// The successor selector stays server-side; the client only ever sees
/// the step it must answer next.
#[derive(Debug, Clone, Serialize)]
pub struct StepResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    pub input: InputKind,
    pub required: bool,
}

impl From<QuestionStep> for StepResponse {
    fn from(step: QuestionStep) -> Self {
        Self {
            id: step.id.to_string(),
            title: step.title,
            description: step.description,
            help_text: step.help_text,
            input: step.input,
            required: step.required,
        }
    }
}

/// Snapshot returned by every questionnaire operation.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_step: Option<StepResponse>,
    pub complete: bool,
    pub answered: usize,
    pub total: usize,
    pub answers: Answers,
}

impl From<QuestionnaireSnapshot> for SnapshotResponse {
    fn from(snapshot: QuestionnaireSnapshot) -> Self {
        Self {
            current_step: snapshot.current_step.map(Into::into),
            complete: snapshot.progress.complete,
            answered: snapshot.progress.answered,
            total: snapshot.progress.total,
            answers: snapshot.answers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_request_accepts_tagged_values() {
        let json = r#"{"answer": {"kind": "choice", "value": "Petrol"}}"#;
        let req: AnswerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.answer, AnswerValue::choice("Petrol"));

        let json = r#"{"answer": {"kind": "range", "min": 300000, "max": 900000}}"#;
        let req: AnswerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.answer, AnswerValue::range(300_000, 900_000));
    }
}
