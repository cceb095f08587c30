//! Chat with the AI car expert.

mod prompt;
mod transcript;

pub use prompt::expert_system_prompt;
pub use transcript::{ChatRole, ChatTurn, Transcript, CONVERSATION_STARTERS};
