//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::chat::ChatMessage;
use crate::core::Language;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub language: Language,
}
