//! Chat turns and the per-session transcript.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Suggested opening questions, surfaced by the UI before the first turn.
pub const CONVERSATION_STARTERS: &[&str] = &[
    "What car should I buy for daily commuting?",
    "What's the difference between petrol and diesel cars?",
    "Which cars have the best safety features?",
    "Should I choose automatic or manual transmission?",
    "What are typical maintenance costs?",
    "What's the most fuel-efficient car in my budget?",
    "Which brands have the best service network in India?",
    "How do I choose between sedan and SUV?",
];

/// Who authored a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One immutable turn in the expert-chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
    pub at: Timestamp,
}

impl ChatTurn {
    /// Creates a user turn stamped now.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            at: Timestamp::now(),
        }
    }

    /// Creates an assistant turn stamped now.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            at: Timestamp::now(),
        }
    }
}

/// Ordered chat history for one session.
///
/// Turns are appended in pairs by the chat handler: either both the user
/// turn and the assistant reply land, or neither does. A failed AI call
/// therefore never leaves a dangling user turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript(Vec<ChatTurn>);

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// All turns, oldest first.
    pub fn turns(&self) -> &[ChatTurn] {
        &self.0
    }

    /// The trailing `window` turns, used as context for the next AI call.
    pub fn windowed(&self, window: usize) -> &[ChatTurn] {
        let start = self.0.len().saturating_sub(window);
        &self.0[start..]
    }

    /// Appends a completed exchange.
    pub fn push_exchange(&mut self, user: ChatTurn, assistant: ChatTurn) {
        self.0.push(user);
        self.0.push(assistant);
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no exchange has happened yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drops the whole history.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchanges_append_in_pairs() {
        let mut transcript = Transcript::new();
        transcript.push_exchange(
            ChatTurn::user("Which SUV is easiest to park?"),
            ChatTurn::assistant("Compact SUVs with cameras, such as..."),
        );
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.turns()[0].role, ChatRole::User);
        assert_eq!(transcript.turns()[1].role, ChatRole::Assistant);
    }

    #[test]
    fn window_takes_the_tail() {
        let mut transcript = Transcript::new();
        for i in 0..6 {
            transcript.push_exchange(
                ChatTurn::user(format!("q{i}")),
                ChatTurn::assistant(format!("a{i}")),
            );
        }
        let tail = transcript.windowed(4);
        assert_eq!(tail.len(), 4);
        assert_eq!(tail[0].text, "q4");
        assert_eq!(tail[3].text, "a5");
    }

    #[test]
    fn window_larger_than_history_returns_everything() {
        let mut transcript = Transcript::new();
        transcript.push_exchange(ChatTurn::user("q"), ChatTurn::assistant("a"));
        assert_eq!(transcript.windowed(50).len(), 2);
    }

    #[test]
    fn clear_empties_the_history() {
        let mut transcript = Transcript::new();
        transcript.push_exchange(ChatTurn::user("q"), ChatTurn::assistant("a"));
        transcript.clear();
        assert!(transcript.is_empty());
    }
}
