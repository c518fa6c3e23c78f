//! Route handlers

pub mod frontend;
pub mod health;
pub mod summarize;
pub mod todos;

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// JSON body for failed requests: `{"error": ..}` for faults, `{"message": ..}`
/// for expected conditions such as a missing task.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorResponse {
    Error { error: String },
    Message { message: String },
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn error(status: StatusCode, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse::Error {
            error: error.into(),
        }),
    )
}

pub fn message(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse::Message {
            message: message.into(),
        }),
    )
}
