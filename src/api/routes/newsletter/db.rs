//! Database queries for newsletter dispatch logs
use anyhow::{Error, Result};
use rusqlite::params;
use tokio_rusqlite::Connection;

use super::public::NewsletterLog;

/// Record one dispatch per recipient in a single transaction
pub async fn insert_logs(
    db: &Connection,
    emails: Vec<String>,
    sent_at: String,
    status: &str,
) -> Result<usize, Error> {
    let status = status.to_string();
    let count = db
        .call(move |conn| {
            let tx = conn.transaction()?;
            {
                let mut stmt = tx.prepare(
                    "INSERT INTO newsletter_log (user_email, sent_at, status) VALUES (?1, ?2, ?3)",
                )?;
                for email in &emails {
                    stmt.execute(params![email, sent_at, status])?;
                }
            }
            tx.commit()?;
            Ok(emails.len())
        })
        .await?;
    Ok(count)
}

/// Whether any dispatch was logged at or after `since`
/// (`YYYY-MM-DD HH:MM:SS` local time)
pub async fn dispatched_since(db: &Connection, since: String) -> Result<bool, Error> {
    let found = db
        .call(move |conn| {
            let found = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM newsletter_log WHERE sent_at >= ?1)",
                [since],
                |row| row.get(0),
            )?;
            Ok(found)
        })
        .await?;
    Ok(found)
}

pub async fn latest_logs(db: &Connection, limit: i64) -> Result<Vec<NewsletterLog>, Error> {
    let logs = db
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_email, sent_at, status FROM newsletter_log ORDER BY id DESC LIMIT ?1",
            )?;
            let rows = stmt
                .query_map([limit], |row| {
                    Ok(NewsletterLog {
                        id: row.get(0)?,
                        user_email: row.get(1)?,
                        sent_at: row.get(2)?,
                        status: row.get(3)?,
                    })
                })?
                .collect::<Result<Vec<NewsletterLog>, rusqlite::Error>>()?;
            Ok(rows)
        })
        .await?;
    Ok(logs)
}
