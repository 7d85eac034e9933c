use std::time::Duration;

use anyhow::{Error, Result, bail};
use futures_util::StreamExt;
use serde_json::json;

use super::decoder::NdjsonDecoder;
use super::session::ChatMessage;

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 500;

/// Client for a local model served over the Ollama chat API
#[derive(Clone, Debug)]
pub struct LlmClient {
    host: String,
    model: String,
    client: reqwest::Client,
}

impl LlmClient {
    pub fn new(host: &str, model: &str) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Stream a reply to `messages`, calling `on_fragment` with each
    /// piece of content as it arrives. Returns the full reply.
    pub async fn stream_reply<F>(
        &self,
        messages: &[ChatMessage],
        mut on_fragment: F,
    ) -> Result<String, Error>
    where
        F: FnMut(&str),
    {
        let payload = json!({
            "model": self.model,
            "messages": messages,
            "stream": true,
            "options": {
                "temperature": TEMPERATURE,
                "num_predict": MAX_TOKENS,
            }
        });
        let url = format!("{}/api/chat", self.host);
        let response = self
            .client
            .post(url)
            .timeout(Duration::from_secs(60 * 5))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            bail!("Chat request failed with status {}", status);
        }

        let mut stream = response.bytes_stream();
        let mut decoder = NdjsonDecoder::new();
        let mut reply = String::new();
        let mut done = false;

        'outer: while let Some(chunk) = stream.next().await {
            for fragment in decoder.push(&chunk?)? {
                if !fragment.content.is_empty() {
                    on_fragment(&fragment.content);
                    reply.push_str(&fragment.content);
                }
                if fragment.done {
                    done = true;
                    break 'outer;
                }
            }
        }
        if done {
            // Anything after the final message is ignored
            return Ok(reply);
        }
        // Body closed without a trailing newline
        if let Some(fragment) = decoder.finish()? {
            if !fragment.content.is_empty() {
                on_fragment(&fragment.content);
                reply.push_str(&fragment.content);
            }
        }

        Ok(reply)
    }
}
