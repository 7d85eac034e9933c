//! Router for the hours API

use axum::{Json, Router, extract::State, routing::get};

use super::db as hours_db;
use super::public;
use crate::api::state::SharedState;

async fn hours_handler(
    State(state): State<SharedState>,
) -> Result<Json<public::HoursResponse>, crate::api::public::ApiError> {
    let db = state.read().expect("Unable to read share state").db.clone();
    let hours = hours_db::operating_hours(&db).await?;
    Ok(Json(hours))
}

/// Create the hours router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(hours_handler))
}
