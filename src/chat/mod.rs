//! The museum assistant: a chat session streamed from a local model.
mod client;
mod decoder;
mod prompt;
mod session;

pub use client::LlmClient;
pub use decoder::{Fragment, NdjsonDecoder};
pub use prompt::system_prompt;
pub use session::{ChatMessage, ChatSession, ChatState, Role};
