//! Database queries for member accounts and their tokens
use anyhow::{Error, Result};
use chrono::{DateTime, Utc};
use rusqlite::{ErrorCode, OptionalExtension, params};
use tokio_rusqlite::Connection;

use crate::core::security::AccessToken;

#[derive(Clone, Debug)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub hashed_password: String,
}

pub async fn find_user(db: &Connection, email: &str) -> Result<Option<User>, Error> {
    let email = email.to_string();
    let user = db
        .call(move |conn| {
            let user = conn
                .query_row(
                    "SELECT id, email, hashed_password FROM users WHERE email = ?1",
                    [email],
                    |row| {
                        Ok(User {
                            id: row.get(0)?,
                            email: row.get(1)?,
                            hashed_password: row.get(2)?,
                        })
                    },
                )
                .optional()?;
            Ok(user)
        })
        .await?;
    Ok(user)
}

/// Insert a new account. Returns `None` when the email is already
/// taken, including when a concurrent registration got there first.
pub async fn insert_user(
    db: &Connection,
    email: &str,
    hashed_password: &str,
) -> Result<Option<i64>, Error> {
    let email = email.to_string();
    let hashed_password = hashed_password.to_string();
    let id = db
        .call(move |conn| {
            let inserted = conn.execute(
                "INSERT INTO users (email, hashed_password) VALUES (?1, ?2)",
                params![email, hashed_password],
            );
            match inserted {
                Ok(_) => Ok(Some(conn.last_insert_rowid())),
                Err(rusqlite::Error::SqliteFailure(e, _))
                    if e.code == ErrorCode::ConstraintViolation =>
                {
                    Ok(None)
                }
                Err(e) => Err(e.into()),
            }
        })
        .await?;
    Ok(id)
}

pub async fn list_user_emails(db: &Connection) -> Result<Vec<String>, Error> {
    let emails = db
        .call(|conn| {
            let mut stmt = conn.prepare("SELECT email FROM users ORDER BY id")?;
            let rows = stmt
                .query_map([], |row| row.get(0))?
                .collect::<Result<Vec<String>, rusqlite::Error>>()?;
            Ok(rows)
        })
        .await?;
    Ok(emails)
}

/// Store a newly issued token. Expired tokens are cleared out at the
/// same time.
pub async fn insert_token(db: &Connection, email: &str, token: &AccessToken) -> Result<(), Error> {
    let email = email.to_string();
    let token = token.clone();
    let now = Utc::now();
    let purged = db
        .call(move |conn| {
            let tx = conn.transaction()?;
            let purged = tx.execute("DELETE FROM auth_token WHERE expires_at <= ?1", [now])?;
            tx.execute(
                "INSERT INTO auth_token (token, email, expires_at) VALUES (?1, ?2, ?3)",
                params![token.token, email, token.expires_at],
            )?;
            tx.commit()?;
            Ok(purged)
        })
        .await?;
    if purged > 0 {
        tracing::debug!("Removed {} expired tokens", purged);
    }
    Ok(())
}

/// Look up the email and expiry a token was issued for
pub async fn find_token(
    db: &Connection,
    token: &str,
) -> Result<Option<(String, DateTime<Utc>)>, Error> {
    let token = token.to_string();
    let found = db
        .call(move |conn| {
            let found = conn
                .query_row(
                    "SELECT email, expires_at FROM auth_token WHERE token = ?1",
                    [token],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;
            Ok(found)
        })
        .await?;
    Ok(found)
}

/// Delete the account along with its newsletter logs and tokens
pub async fn delete_user(db: &Connection, email: &str) -> Result<(), Error> {
    let email = email.to_string();
    db.call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM newsletter_log WHERE user_email = ?1", [&email])?;
        tx.execute("DELETE FROM auth_token WHERE email = ?1", [&email])?;
        tx.execute("DELETE FROM users WHERE email = ?1", [&email])?;
        tx.commit()?;
        Ok(())
    })
    .await?;
    Ok(())
}
