//! HTTP DTOs for chat endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::chat::{ChatRole, ChatTurn, Transcript};

/// Request to ask the expert.
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// One chat turn.
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurnResponse {
    pub role: ChatRole,
    pub text: String,
    pub at: String,
}

impl From<ChatTurn> for ChatTurnResponse {
    fn from(turn: ChatTurn) -> Self {
        Self {
            role: turn.role,
            text: turn.text,
            at: turn.at.to_rfc3339(),
        }
    }
}

/// The full transcript.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptResponse {
    pub turns: Vec<ChatTurnResponse>,
}

impl From<Transcript> for TranscriptResponse {
    fn from(transcript: Transcript) -> Self {
        Self {
            turns: transcript
                .turns()
                .iter()
                .cloned()
                .map(Into::into)
                .collect(),
        }
    }
}
