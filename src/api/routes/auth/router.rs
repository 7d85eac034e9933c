//! Router for member registration and login

use axum::{Form, Json, Router, extract::State, routing::post};

use super::db as auth_db;
use super::public;
use crate::api::public::{ApiError, MessageResponse};
use crate::api::state::SharedState;
use crate::core::security::{AccessToken, hash_password, normalize_email, verify_password};

async fn register(
    State(state): State<SharedState>,
    Json(payload): Json<public::RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (db, cost) = {
        let shared_state = state.read().expect("Unable to read share state");
        (shared_state.db.clone(), shared_state.config.password_cost)
    };
    let email = normalize_email(&payload.email);

    if auth_db::find_user(&db, &email).await?.is_some() {
        return Err(ApiError::bad_request("Email already registered"));
    }

    // Hashing blocks so run it on the blocking pool
    let password = payload.password;
    let hashed = tokio::task::spawn_blocking(move || hash_password(&password, cost)).await??;
    if auth_db::insert_user(&db, &email, &hashed).await?.is_none() {
        return Err(ApiError::bad_request("Email already registered"));
    }
    tracing::info!("Registered member {}", email);

    Ok(Json(MessageResponse::new("User created successfully")))
}

async fn login(
    State(state): State<SharedState>,
    Form(form): Form<public::LoginForm>,
) -> Result<Json<public::TokenResponse>, ApiError> {
    let (db, ttl) = {
        let shared_state = state.read().expect("Unable to read share state");
        (shared_state.db.clone(), shared_state.config.token_ttl_minutes)
    };
    let email = normalize_email(&form.username);
    tracing::debug!("Login attempt for {}", email);

    let Some(user) = auth_db::find_user(&db, &email).await? else {
        tracing::info!("Login failed, no account for {}", email);
        return Err(ApiError::unauthorized("Incorrect email or password"));
    };

    let password = form.password;
    let hashed = user.hashed_password;
    let verified =
        tokio::task::spawn_blocking(move || verify_password(&password, &hashed)).await?;
    if !verified {
        tracing::info!("Login failed, incorrect password for {}", email);
        return Err(ApiError::unauthorized("Incorrect email or password"));
    }

    let token = AccessToken::issue(ttl);
    auth_db::insert_token(&db, &user.email, &token).await?;
    tracing::info!("Login successful for {}", email);

    Ok(Json(public::TokenResponse::bearer(token.token)))
}

/// Create the auth router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}
