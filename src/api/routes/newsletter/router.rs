//! Router for the member newsletter

use axum::{Json, Router, routing::get};
use http::{HeaderMap, header};

use super::content::newsletter_for;
use super::public;
use crate::api::public::ApiError;
use crate::api::routes::auth::CurrentUser;
use crate::api::state::SharedState;
use crate::core::Language;

async fn newsletter(
    user: CurrentUser,
    headers: HeaderMap,
) -> Result<Json<public::Newsletter>, ApiError> {
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    let lang = Language::from_accept_language(accept_language);
    tracing::debug!("Serving {} newsletter to {}", lang, user.email);
    Ok(Json(newsletter_for(lang)))
}

/// Create the newsletter router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(newsletter))
}
