//! Router for ending a membership

use axum::{
    Json, Router,
    extract::State,
    routing::{delete, post},
};
use http::StatusCode;

use super::public;
use crate::api::public::{ApiError, MessageResponse};
use crate::api::routes::auth::{CurrentUser, db as auth_db};
use crate::api::state::SharedState;
use crate::core::security::{normalize_email, verify_password};

/// Delete the logged in member's account
async fn unsubscribe(
    State(state): State<SharedState>,
    user: CurrentUser,
) -> Result<Json<MessageResponse>, ApiError> {
    let db = state.read().expect("Unable to read share state").db.clone();
    auth_db::delete_user(&db, &user.email).await?;
    tracing::info!("Member {} unsubscribed", user.email);
    Ok(Json(MessageResponse::new(
        "Successfully unsubscribed and account deleted",
    )))
}

/// Delete an account given its credentials
async fn cancel(
    State(state): State<SharedState>,
    Json(payload): Json<public::CancelMembershipRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if payload.password != payload.confirm_password {
        return Err(ApiError::bad_request("Passwords do not match"));
    }
    let db = state.read().expect("Unable to read share state").db.clone();
    let email = normalize_email(&payload.email);

    let Some(user) = auth_db::find_user(&db, &email).await? else {
        return Err(ApiError::not_found("Account not found"));
    };

    let password = payload.password;
    let hashed = user.hashed_password;
    let verified =
        tokio::task::spawn_blocking(move || verify_password(&password, &hashed)).await?;
    if !verified {
        return Err(ApiError::new(StatusCode::UNAUTHORIZED, "Incorrect password"));
    }

    auth_db::delete_user(&db, &user.email).await?;
    tracing::info!("Membership cancelled for {}", user.email);
    Ok(Json(MessageResponse::new("Membership successfully cancelled")))
}

/// Create the membership router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/unsubscribe", delete(unsubscribe))
        .route("/cancel", post(cancel))
}
