//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;

use super::model::{Task, TaskId};
use crate::Result;

/// Repository interface for task CRUD operations
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Get all tasks, in store order
    async fn list(&self) -> Result<Vec<Task>>;

    /// Get all tasks that are not completed, in store order
    async fn list_pending(&self) -> Result<Vec<Task>>;

    /// Get a task by ID
    async fn get(&self, id: &TaskId) -> Result<Option<Task>>;

    /// Insert a new task and return the stored row
    async fn create(&self, text: String) -> Result<Task>;

    /// Replace a task's text. `None` when no row matched.
    async fn update_text(&self, id: &TaskId, text: String) -> Result<Option<Task>>;

    /// Flip a task's completion flag. `None` when no row matched.
    async fn toggle(&self, id: &TaskId) -> Result<Option<Task>>;

    /// Delete a task by ID. Missing rows are not an error.
    async fn delete(&self, id: &TaskId) -> Result<()>;
}
