//! Public API types

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::{HeaderValue, StatusCode, header};
use serde::{Deserialize, Serialize};
use serde_json::json;

// Errors

/// An error returned from a handler. Anything converted with `?`
/// becomes a 500, the constructors cover the expected failures.
pub struct ApiError {
    status: StatusCode,
    error: anyhow::Error,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: &str) -> Self {
        Self {
            status,
            error: anyhow::anyhow!(detail.to_string()),
        }
    }

    pub fn bad_request(detail: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn unauthorized(detail: &str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, detail)
    }

    pub fn not_found(detail: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = if self.status.is_server_error() {
            // Always log unexpected errors
            tracing::error!("{}", self.error);
            format!("Something went wrong: {}", self.error)
        } else {
            tracing::debug!("{}: {}", self.status, self.error);
            self.error.to_string()
        };

        let mut response = (self.status, Json(json!({ "detail": detail }))).into_response();
        if self.status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: err.into(),
        }
    }
}

// Shared response bodies

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DeletedResponse {
    pub status: String,
}

impl DeletedResponse {
    pub fn deleted() -> Self {
        Self {
            status: String::from("deleted"),
        }
    }
}

// Re-export public types from each route

pub mod admin {
    pub use crate::api::routes::admin::public::*;
}

pub mod auth {
    pub use crate::api::routes::auth::public::*;
}

pub mod chat {
    pub use crate::api::routes::chat::public::*;
}

pub mod email {
    pub use crate::api::routes::email::public::*;
}

pub mod events {
    pub use crate::api::routes::events::public::*;
}

pub mod holidays {
    pub use crate::api::routes::holidays::public::*;
}

pub mod hours {
    pub use crate::api::routes::hours::public::*;
}

pub mod membership {
    pub use crate::api::routes::membership::public::*;
}

pub mod newsletter {
    pub use crate::api::routes::newsletter::public::*;
}

pub mod status {
    pub use crate::api::routes::status::public::*;
}
