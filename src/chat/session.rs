use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use super::client::LlmClient;
use super::prompt::system_prompt;
use crate::core::Language;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    // Greeting shown to the visitor, never sent to the model
    #[serde(skip)]
    pub welcome: bool,
}

impl ChatMessage {
    pub fn new(role: Role, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
            welcome: false,
        }
    }

    fn welcome(lang: Language) -> Self {
        Self {
            role: Role::Assistant,
            content: lang.chat_welcome().to_string(),
            welcome: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    Sending,
    Streaming,
    Error,
}

/// One visitor's conversation with the assistant. The transcript only
/// lives as long as the session.
pub struct ChatSession {
    llm: LlmClient,
    language: Language,
    messages: Vec<ChatMessage>,
    state: ChatState,
    tx: Option<mpsc::UnboundedSender<String>>,
}

impl ChatSession {
    pub fn new(llm: LlmClient, language: Language) -> Self {
        Self {
            llm,
            language,
            messages: vec![ChatMessage::welcome(language)],
            state: ChatState::Idle,
            tx: None,
        }
    }

    /// Forward each streamed fragment to `tx` as it arrives
    pub fn streaming(mut self, tx: mpsc::UnboundedSender<String>) -> Self {
        self.tx = Some(tx);
        self
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switching language starts the conversation over
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.messages = vec![ChatMessage::welcome(language)];
        self.state = ChatState::Idle;
    }

    /// Send the visitor's message and stream the reply into the
    /// transcript. Blank input is ignored and returns `None`. Failures
    /// don't bubble up: the reply is replaced with a localized error
    /// and the session is left in `ChatState::Error`.
    pub async fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::new(Role::User, input));
        let request = match self.request_messages() {
            Ok(request) => request,
            Err(e) => {
                tracing::error!("Failed to build chat request: {}", e);
                self.messages.push(ChatMessage::new(Role::Assistant, ""));
                return self.fail();
            }
        };
        self.messages.push(ChatMessage::new(Role::Assistant, ""));
        self.state = ChatState::Sending;

        let Self {
            llm,
            messages,
            state,
            tx,
            ..
        } = self;
        let placeholder = messages.last_mut()?;
        let result = llm
            .stream_reply(&request, |fragment| {
                *state = ChatState::Streaming;
                placeholder.content.push_str(fragment);
                if let Some(tx) = tx {
                    // The receiver going away shouldn't stop the transcript
                    let _ = tx.send(fragment.to_string());
                }
            })
            .await;

        match result {
            Ok(_) => {
                self.state = ChatState::Idle;
                self.messages.last()
            }
            Err(e) => {
                tracing::error!("Chat stream failed: {}. Root cause: {}", e, e.root_cause());
                self.fail()
            }
        }
    }

    // System prompt followed by the conversation so far, minus the
    // greeting
    fn request_messages(&self) -> anyhow::Result<Vec<ChatMessage>> {
        let mut request = vec![ChatMessage::new(
            Role::System,
            &system_prompt(self.language)?,
        )];
        request.extend(self.messages.iter().filter(|m| !m.welcome).cloned());
        Ok(request)
    }

    // Replace the reply placeholder with the localized error
    fn fail(&mut self) -> Option<&ChatMessage> {
        self.state = ChatState::Error;
        let error = self.language.chat_error().to_string();
        if let Some(tx) = &self.tx {
            let _ = tx.send(error.clone());
        }
        let placeholder = self.messages.last_mut()?;
        placeholder.content = error;
        Some(&*placeholder)
    }
}
