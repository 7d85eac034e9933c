use std::time::Duration;

use anyhow::{Error, Result};
use async_trait::async_trait;
use tokio_rusqlite::Connection;

use super::PeriodicJob;
use crate::api::routes::email::db as email_db;
use crate::core::AppConfig;
use crate::relay::{EmailRelay, RelayMessage};

/// Delivers queued emails through the relay, retrying failures on
/// later runs
#[derive(Default, Debug)]
pub struct ProcessEmailQueue;

#[async_trait]
impl PeriodicJob for ProcessEmailQueue {
    fn interval(&self) -> Duration {
        Duration::from_secs(60)
    }

    async fn run_job(&self, config: &AppConfig, db: &Connection) {
        let relay = EmailRelay::new(&config.email_relay_url);
        if let Err(e) = process_email_queue(db, &relay).await {
            tracing::error!("Error in email queue task: {}", e);
        }
    }
}

/// Attempt every deliverable email once. Returns the number sent and
/// the number that failed.
pub async fn process_email_queue(
    db: &Connection,
    relay: &EmailRelay,
) -> Result<(usize, usize), Error> {
    let emails = email_db::deliverable_emails(db).await?;
    if emails.is_empty() {
        tracing::debug!("No emails in queue");
        return Ok((0, 0));
    }

    let (mut sent, mut failed) = (0, 0);
    for email in emails {
        tracing::info!(
            "Attempting to send email {} to {} (Subject: {})",
            email.id,
            email.recipient,
            email.subject
        );
        let message = RelayMessage::new(&email.subject, &email.body);
        match relay.send(&email.recipient, &message).await {
            Ok(()) => {
                email_db::mark_sent(db, email.id).await?;
                sent += 1;
            }
            Err(e) => {
                tracing::warn!("Failed to send email to {}: {}", email.recipient, e);
                email_db::mark_failed(db, email.id).await?;
                failed += 1;
            }
        }
    }
    tracing::info!("Email queue processed, {} sent, {} failed", sent, failed);
    Ok((sent, failed))
}
