//! Router for the chat API

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, sse::Event, sse::KeepAlive, sse::Sse},
    routing::post,
};
use tokio::sync::mpsc;
use tokio_stream::StreamExt as _;
use tokio_stream::wrappers::UnboundedReceiverStream;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::SharedState;
use crate::chat::{ChatMessage, LlmClient, Role, system_prompt};

/// Relay the local model's reply to the browser as server-sent
/// events. Each event carries one fragment of content. A failure
/// sends a single `error` event with a localized message.
async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if !payload.messages.iter().any(|m| m.role == Role::User) {
        return Err(ApiError::bad_request("A user message is required"));
    }

    let llm = {
        let shared_state = state.read().expect("Unable to read share state");
        LlmClient::new(&shared_state.config.llm_host, &shared_state.config.llm_model)
    };
    let lang = payload.language;

    // The browser's transcript can't override the system prompt
    let mut transcript = vec![ChatMessage::new(Role::System, &system_prompt(lang)?)];
    transcript.extend(
        payload
            .messages
            .into_iter()
            .filter(|m| m.role != Role::System),
    );

    let (tx, rx) = mpsc::unbounded_channel::<Event>();
    let sse_stream = UnboundedReceiverStream::new(rx).map(Ok::<Event, Infallible>);

    tokio::spawn(async move {
        let result = llm
            .stream_reply(&transcript, |fragment| {
                let _ = tx.send(Event::default().data(fragment));
            })
            .await;

        if let Err(e) = result {
            tracing::error!("Chat handler error: {}. Root cause: {}", e, e.root_cause());
            let _ = tx.send(Event::default().event("error").data(lang.chat_error()));
        }
    });

    let resp = Sse::new(sse_stream)
        .keep_alive(
            KeepAlive::default()
                .text("keep-alive")
                .interval(Duration::from_secs(15)),
        )
        .into_response();

    Ok(resp)
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}
