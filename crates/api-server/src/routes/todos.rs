//! Todo API endpoints
//!
//! Thin CRUD handlers over the task store. Text is passed through as given;
//! blank entries are filtered by the frontend, not here.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use todo_core::task::{Task, TaskId, TaskRepository};

use super::{error, message, ApiError};
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TodoTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

const NOT_FOUND: &str = "Todo not found";

// ============================================================================
// Handlers
// ============================================================================

/// GET /todos - List all todos
async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.task_store().list().await.map_err(map_store_error)?;
    Ok(Json(tasks))
}

/// POST /todos - Create a todo
async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<TodoTextRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let created = state
        .task_store()
        .create(req.text)
        .await
        .map_err(map_store_error)?;

    tracing::debug!(id = %created.id, "Todo created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /todos/{id} - Delete a todo
async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    state
        .task_store()
        .delete(&TaskId::parse(&id))
        .await
        .map_err(map_store_error)?;

    Ok(Json(DeletedResponse {
        message: "Todo deleted",
    }))
}

/// PATCH /todos/{id}/toggle - Flip completion
///
/// 404 when the row is absent. A toggle that keeps losing races to concurrent
/// writers surfaces as a 500 like any other store failure.
async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    state
        .task_store()
        .toggle(&TaskId::parse(&id))
        .await
        .map_err(map_store_error)?
        .map(Json)
        .ok_or_else(|| message(StatusCode::NOT_FOUND, NOT_FOUND))
}

/// PATCH /todos/{id} - Replace the text of a todo
///
/// An edit that matches no row is a store failure (500), not a 404.
async fn edit_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<TodoTextRequest>,
) -> Result<Json<Task>, ApiError> {
    state
        .task_store()
        .update_text(&TaskId::parse(&id), req.text)
        .await
        .map_err(map_store_error)?
        .map(Json)
        .ok_or_else(|| {
            tracing::error!("Edit matched no todo with id {}", id);
            error(StatusCode::INTERNAL_SERVER_ERROR, NOT_FOUND)
        })
}

fn map_store_error(err: todo_core::Error) -> ApiError {
    tracing::error!("Task store request failed: {}", err);
    error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", patch(edit_todo).delete(delete_todo))
        .route("/todos/{id}/toggle", patch(toggle_todo))
}
