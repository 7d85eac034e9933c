//! Client for the third-party form relay that delivers confirmation
//! emails (formsubmit.co and compatible services).
use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Error, Result, bail};
use serde::Serialize;
use uuid::Uuid;

/// A form submission the relay turns into an email. Extra fields are
/// rendered as rows of a table in the message body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RelayMessage {
    #[serde(rename = "Subject")]
    pub subject: String,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
    #[serde(rename = "_template")]
    pub template: String,
    #[serde(rename = "_captcha")]
    pub captcha: String,
}

impl RelayMessage {
    pub fn new(subject: &str, message: &str) -> Self {
        Self {
            subject: subject.to_string(),
            message: message.to_string(),
            fields: BTreeMap::new(),
            template: String::from("table"),
            captcha: String::from("false"),
        }
    }

    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }
}

#[derive(Clone, Debug)]
pub struct EmailRelay {
    base_url: String,
    client: reqwest::Client,
}

impl EmailRelay {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn send(&self, recipient: &str, message: &RelayMessage) -> Result<(), Error> {
        let url = format!("{}/ajax/{}", self.base_url, recipient);
        let response = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .timeout(Duration::from_secs(30))
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Email relay returned {}: {}", status, body);
        }
        tracing::debug!("Relayed \"{}\" to {}", message.subject, recipient);
        Ok(())
    }
}

/// Six digit reference shown to the visitor, e.g. `HMA-482913`
pub fn reference_id(prefix: &str) -> String {
    let n = Uuid::new_v4().as_u128() % 900_000 + 100_000;
    format!("{}-{}", prefix, n)
}
