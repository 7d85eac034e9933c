//! Router for the holidays API

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use super::db as holidays_db;
use super::public;
use crate::api::public::{ApiError, DeletedResponse};
use crate::api::state::SharedState;

async fn list_holidays(
    State(state): State<SharedState>,
) -> Result<Json<public::HolidaysResponse>, ApiError> {
    let db = state.read().expect("Unable to read share state").db.clone();
    let holidays = holidays_db::list_holidays(&db)
        .await?
        .into_iter()
        .map(|h| (h.name, h.date.format("%Y-%m-%d").to_string()))
        .collect();
    Ok(Json(holidays))
}

async fn create_holiday(
    State(state): State<SharedState>,
    Json(payload): Json<public::CreateHolidayRequest>,
) -> Result<Json<public::Holiday>, ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::bad_request("Holiday name is required"));
    }
    let db = state.read().expect("Unable to read share state").db.clone();
    let holiday = holidays_db::create_holiday(&db, payload).await?;
    tracing::info!("Created holiday {} on {}", holiday.id, holiday.date);
    Ok(Json(holiday))
}

async fn delete_holiday(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let db = state.read().expect("Unable to read share state").db.clone();
    if !holidays_db::delete_holiday(&db, id).await? {
        return Err(ApiError::not_found("Holiday not found"));
    }
    tracing::info!("Deleted holiday {}", id);
    Ok(Json(DeletedResponse::deleted()))
}

/// Create the holidays router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_holidays).post(create_holiday))
        .route("/{id}", delete(delete_holiday))
}
