//! Extractor for the member a bearer token belongs to

use axum::extract::FromRequestParts;
use http::{header, request::Parts};

use super::db as auth_db;
use crate::api::public::ApiError;
use crate::api::state::SharedState;
use crate::core::security::is_expired;

const INVALID_CREDENTIALS: &str = "Could not validate credentials";

/// A logged in member. Handlers that take this reject requests
/// without a valid, unexpired token for an existing account.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub email: String,
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

impl FromRequestParts<SharedState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| ApiError::unauthorized(INVALID_CREDENTIALS))?
            .to_string();
        let db = state.read().expect("Unable to read share state").db.clone();

        let Some((email, expires_at)) = auth_db::find_token(&db, &token).await? else {
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        };
        if is_expired(expires_at) {
            tracing::debug!("Rejected expired token for {}", email);
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        }
        // The account may have been deleted since the token was issued
        if auth_db::find_user(&db, &email).await?.is_none() {
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        }

        Ok(CurrentUser { email })
    }
}
