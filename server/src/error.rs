//! Error types surfaced to HTTP callers.
//!
//! # Design
//! `NotFound` gets a dedicated variant because every by-id operation needs
//! it. `MalformedInput` wraps the body extractor's rejection, keeping the
//! status it chose (422 for shape and type violations) and the message
//! naming the offending field. Both render as a JSON `{"detail": ...}`
//! body. No other error kinds exist; nothing is retried or logged
//! specially.

use std::fmt;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::types::TodoId;

/// Errors returned by the todo handlers.
#[derive(Debug)]
pub enum ApiError {
    /// No todo exists under the requested id.
    NotFound { id: TodoId },

    /// The request body failed shape or type validation.
    MalformedInput { status: StatusCode, detail: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound { id } => write!(f, "todo with id {id} not found"),
            ApiError::MalformedInput { detail, .. } => write!(f, "{detail}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedInput {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MalformedInput { status, .. } => *status,
        };
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}
