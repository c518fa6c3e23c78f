//! Summarize endpoint
//!
//! Each call posts a fresh message to the chat webhook; there is no
//! idempotency guard.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Serialize;

use todo_core::summary::SummaryError;

use super::{error, message, ApiError};
use crate::state::AppState;

const UPSTREAM_FAILURE: &str = "Failed to generate summary or send to Slack";

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub success: bool,
    pub summary: String,
}

/// POST /summarize - Summarize pending todos and post them to the webhook
async fn summarize(State(state): State<AppState>) -> Result<Json<SummaryResponse>, ApiError> {
    let summary = state.summary().run().await.map_err(map_summary_error)?;
    Ok(Json(SummaryResponse {
        success: true,
        summary,
    }))
}

fn map_summary_error(err: SummaryError) -> ApiError {
    match err {
        SummaryError::MissingConfiguration => {
            tracing::warn!("Summarize requested without provider or webhook configured");
            error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        SummaryError::NoPendingTasks => message(StatusCode::BAD_REQUEST, err.to_string()),
        SummaryError::Store(ref inner) => {
            tracing::error!("Failed to load pending todos: {}", inner);
            error(StatusCode::INTERNAL_SERVER_ERROR, inner.to_string())
        }
        SummaryError::Generation(_) | SummaryError::Delivery(_) => {
            tracing::error!("Summarize failed: {}", err);
            error(StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE)
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/summarize", post(summarize))
}
