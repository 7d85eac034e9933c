//! Router for the email queue API

use axum::{Json, Router, extract::State, routing::post};

use super::db as email_db;
use super::public;
use crate::api::public::ApiError;
use crate::api::state::SharedState;

/// Queue a confirmation email for the background sender
async fn queue_email(
    State(state): State<SharedState>,
    Json(payload): Json<public::QueueEmailRequest>,
) -> Result<Json<public::QueueEmailResponse>, ApiError> {
    if !payload.recipient.contains('@') {
        return Err(ApiError::bad_request("Recipient must be an email address"));
    }
    let db = state.read().expect("Unable to read share state").db.clone();
    let queue_id = email_db::queue_email(&db, payload).await?;
    tracing::info!("Queued email {}", queue_id);
    Ok(Json(public::QueueEmailResponse {
        message: String::from("Email queued for delivery"),
        queue_id,
    }))
}

/// Create the email router
pub fn router() -> Router<SharedState> {
    Router::new().route("/queue", post(queue_email))
}
