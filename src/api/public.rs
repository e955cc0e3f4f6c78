//! Public API types

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::core::LearnError;

// Errors

/// Body of every error response
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

pub struct ApiError(LearnError);

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            LearnError::Validation(_) => StatusCode::BAD_REQUEST,
            LearnError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self.0);
        } else {
            tracing::info!("Rejected request: {}", self.0);
        }

        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Enables using `?` on functions that return `Result<_, LearnError>`
/// to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<LearnError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

// Malformed or non-JSON request bodies are caller errors
impl From<JsonRejection> for LearnError {
    fn from(rejection: JsonRejection) -> Self {
        LearnError::Validation(rejection.body_text())
    }
}

// Re-export public types from each route

pub mod health {
    pub use crate::api::routes::health::public::*;
}

pub mod syllabus {
    pub use crate::api::routes::syllabus::public::*;
}

pub mod transcript {
    pub use crate::api::routes::transcript::public::*;
}

pub mod tutor {
    pub use crate::api::routes::tutor::public::*;
}
