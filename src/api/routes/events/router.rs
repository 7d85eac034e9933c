//! Router for the events API

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};
use itertools::Itertools;

use super::db as events_db;
use super::public;
use crate::api::public::{ApiError, DeletedResponse};
use crate::api::state::SharedState;

/// Public calendar feed, grouped by date
async fn list_events(
    State(state): State<SharedState>,
) -> Result<Json<public::EventsResponse>, ApiError> {
    let db = state.read().expect("Unable to read share state").db.clone();
    let events = events_db::list_events(&db).await?;

    // Events come back sorted by date so consecutive grouping is enough
    let grouped = events
        .into_iter()
        .chunk_by(|e| e.date)
        .into_iter()
        .map(|(date, group)| {
            let summaries = group
                .map(|e| public::EventSummary {
                    title: e.title,
                    description: e.description,
                })
                .collect::<Vec<_>>();
            (date.format("%Y-%m-%d").to_string(), summaries)
        })
        .collect();

    Ok(Json(public::EventsResponse {
        monthly_events: vec![grouped],
    }))
}

async fn create_event(
    State(state): State<SharedState>,
    Json(payload): Json<public::CreateEventRequest>,
) -> Result<Json<public::Event>, ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::bad_request("Event title is required"));
    }
    let db = state.read().expect("Unable to read share state").db.clone();
    let event = events_db::create_event(&db, payload).await?;
    tracing::info!("Created event {} on {}", event.id, event.date);
    Ok(Json(event))
}

async fn delete_event(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let db = state.read().expect("Unable to read share state").db.clone();
    if !events_db::delete_event(&db, id).await? {
        return Err(ApiError::not_found("Event not found"));
    }
    tracing::info!("Deleted event {}", id);
    Ok(Json(DeletedResponse::deleted()))
}

/// Create the events router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/{id}", delete(delete_event))
}
