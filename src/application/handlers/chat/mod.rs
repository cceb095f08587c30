//! Expert chat.

mod ask_expert;
mod clear_chat;
mod get_transcript;

pub use ask_expert::{AskExpertCommand, AskExpertError, AskExpertHandler};
pub use clear_chat::ClearChatHandler;
pub use get_transcript::GetTranscriptHandler;
