//! Router for the admin panel listings and newsletter tooling

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use super::public;
use crate::api::public::{ApiError, MessageResponse};
use crate::api::routes::{events, holidays, newsletter};
use crate::api::state::SharedState;
use crate::jobs::dispatch_newsletter;

const LOG_LIMIT: i64 = 50;

async fn list_events(
    State(state): State<SharedState>,
) -> Result<Json<public::AdminEventsResponse>, ApiError> {
    let db = state.read().expect("Unable to read share state").db.clone();
    Ok(Json(events::db::list_events(&db).await?))
}

async fn list_holidays(
    State(state): State<SharedState>,
) -> Result<Json<public::AdminHolidaysResponse>, ApiError> {
    let db = state.read().expect("Unable to read share state").db.clone();
    Ok(Json(holidays::db::list_holidays(&db).await?))
}

/// Run the monthly newsletter dispatch now
async fn trigger_newsletter(
    State(state): State<SharedState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let db = state.read().expect("Unable to read share state").db.clone();
    let count = dispatch_newsletter(&db).await?;
    tracing::info!("Newsletter triggered manually, {} members notified", count);
    Ok(Json(MessageResponse::new(
        "Newsletter task triggered manually. Check server logs and newsletter_logs table.",
    )))
}

async fn newsletter_logs(
    State(state): State<SharedState>,
) -> Result<Json<public::NewsletterLogsResponse>, ApiError> {
    let db = state.read().expect("Unable to read share state").db.clone();
    Ok(Json(newsletter::db::latest_logs(&db, LOG_LIMIT).await?))
}

/// Create the admin router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/holidays", get(list_holidays))
        .route("/newsletter/test-trigger", post(trigger_newsletter))
        .route("/newsletter/logs", get(newsletter_logs))
}
