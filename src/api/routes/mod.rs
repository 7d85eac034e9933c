//! API routes module

pub mod admin;
pub mod auth;
pub mod chat;
pub mod email;
pub mod events;
pub mod holidays;
pub mod hours;
pub mod membership;
pub mod newsletter;
pub mod status;

use axum::Router;

use crate::api::state::SharedState;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Welcome message and service status
        .merge(status::router())
        // Account registration and login
        .merge(auth::router())
        // Weekly operating hours
        .nest("/hours", hours::router())
        // Public calendar data and admin writes
        .nest("/events", events::router())
        .nest("/holidays", holidays::router())
        // Admin listings and newsletter tooling
        .nest("/admin", admin::router())
        // Member-only routes
        .nest("/newsletter", newsletter::router())
        .nest("/membership", membership::router())
        // Confirmation email queue
        .nest("/email", email::router())
        // Assistant chat relayed from the local model
        .nest("/chat", chat::router())
}
