//! Router for the welcome and status endpoints

use axum::{Json, Router, routing::get};

use super::public;
use crate::api::public::MessageResponse;
use crate::api::state::SharedState;

async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the High Museum of Art API"))
}

async fn service_status() -> Json<public::StatusResponse> {
    Json(public::StatusResponse {
        status: String::from("operational"),
        version: env!("CARGO_PKG_VERSION").to_string(),
        source: String::from("database"),
    })
}

/// Create the status router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(welcome))
        .route("/status", get(service_status))
}
