//! Password hashing and bearer token helpers for member accounts.
use anyhow::{Error, Result};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Emails are compared case-insensitively and without surrounding
/// whitespace everywhere an account is looked up.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn hash_password(password: &str, cost: u32) -> Result<String, Error> {
    let hashed = bcrypt::hash(password, cost)?;
    Ok(hashed)
}

pub fn verify_password(password: &str, hashed_password: &str) -> bool {
    bcrypt::verify(password, hashed_password).unwrap_or_else(|err| {
        tracing::warn!("Password verification failed: {}", err);
        false
    })
}

#[derive(Clone, Debug)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn issue(ttl_minutes: i64) -> Self {
        Self {
            token: Uuid::new_v4().simple().to_string(),
            expires_at: Utc::now() + Duration::minutes(ttl_minutes),
        }
    }
}

pub fn is_expired(expires_at: DateTime<Utc>) -> bool {
    expires_at <= Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_normalizes_emails() {
        assert_eq!(normalize_email("  Jane@Example.COM "), "jane@example.com");
    }

    #[test]
    fn it_verifies_hashed_passwords() {
        let hashed = hash_password("hunter2", 4).unwrap();
        assert_ne!(hashed, "hunter2");
        assert!(verify_password("hunter2", &hashed));
        assert!(!verify_password("hunter3", &hashed));
    }

    #[test]
    fn it_rejects_garbage_hashes() {
        assert!(!verify_password("hunter2", "not-a-bcrypt-hash"));
    }

    #[test]
    fn it_issues_unique_tokens_that_expire() {
        let a = AccessToken::issue(30);
        let b = AccessToken::issue(30);
        assert_ne!(a.token, b.token);
        assert!(!is_expired(a.expires_at));
        assert!(is_expired(AccessToken::issue(-1).expires_at));
    }
}
