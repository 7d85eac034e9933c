//! Database queries for the outgoing email queue
use anyhow::{Error, Result};
use rusqlite::params;
use tokio_rusqlite::Connection;

use super::public::{QueueEmailRequest, QueuedEmail};

/// Sends are given up on after this many failures
pub const MAX_RETRIES: i64 = 5;

pub fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub async fn queue_email(db: &Connection, email: QueueEmailRequest) -> Result<i64, Error> {
    let created_at = timestamp();
    let id = db
        .call(move |conn| {
            conn.execute(
                "INSERT INTO email_queue (recipient, subject, body, status, created_at)
                 VALUES (?1, ?2, ?3, 'pending', ?4)",
                params![email.recipient, email.subject, email.body, created_at],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await?;
    Ok(id)
}

/// Emails that still need sending, oldest first
pub async fn deliverable_emails(db: &Connection) -> Result<Vec<QueuedEmail>, Error> {
    let emails = db
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, recipient, subject, body, status, created_at, sent_at, retry_count
                 FROM email_queue
                 WHERE status IN ('pending', 'failed') AND retry_count < ?1
                 ORDER BY id",
            )?;
            let rows = stmt
                .query_map([MAX_RETRIES], row_to_email)?
                .collect::<Result<Vec<QueuedEmail>, rusqlite::Error>>()?;
            Ok(rows)
        })
        .await?;
    Ok(emails)
}

pub async fn find_email(db: &Connection, id: i64) -> Result<Option<QueuedEmail>, Error> {
    use rusqlite::OptionalExtension;

    let email = db
        .call(move |conn| {
            let email = conn
                .query_row(
                    "SELECT id, recipient, subject, body, status, created_at, sent_at, retry_count
                     FROM email_queue WHERE id = ?1",
                    [id],
                    row_to_email,
                )
                .optional()?;
            Ok(email)
        })
        .await?;
    Ok(email)
}

pub async fn mark_sent(db: &Connection, id: i64) -> Result<(), Error> {
    let sent_at = timestamp();
    db.call(move |conn| {
        conn.execute(
            "UPDATE email_queue SET status = 'sent', sent_at = ?1 WHERE id = ?2",
            params![sent_at, id],
        )?;
        Ok(())
    })
    .await?;
    Ok(())
}

pub async fn mark_failed(db: &Connection, id: i64) -> Result<(), Error> {
    db.call(move |conn| {
        conn.execute(
            "UPDATE email_queue SET status = 'failed', retry_count = retry_count + 1 WHERE id = ?1",
            [id],
        )?;
        Ok(())
    })
    .await?;
    Ok(())
}

fn row_to_email(row: &rusqlite::Row) -> Result<QueuedEmail, rusqlite::Error> {
    Ok(QueuedEmail {
        id: row.get(0)?,
        recipient: row.get(1)?,
        subject: row.get(2)?,
        body: row.get(3)?,
        status: row.get(4)?,
        created_at: row.get(5)?,
        sent_at: row.get(6)?,
        retry_count: row.get(7)?,
    })
}
