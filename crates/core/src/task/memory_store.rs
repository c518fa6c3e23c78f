//! In-process task storage
//!
//! Keeps rows in insertion order, the way a hosted table without an explicit
//! ordering usually hands them back.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::{Task, TaskId};
use super::repository::TaskRepository;
use crate::Result;

struct Inner {
    tasks: Vec<Task>,
    next_id: i64,
}

/// Task store backed by process memory
pub struct InMemoryTaskStore {
    inner: RwLock<Inner>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn list(&self) -> Result<Vec<Task>> {
        Ok(self.inner.read().await.tasks.clone())
    }

    async fn list_pending(&self) -> Result<Vec<Task>> {
        let inner = self.inner.read().await;
        Ok(inner.tasks.iter().filter(|t| !t.completed).cloned().collect())
    }

    async fn get(&self, id: &TaskId) -> Result<Option<Task>> {
        let inner = self.inner.read().await;
        Ok(inner.tasks.iter().find(|t| &t.id == id).cloned())
    }

    async fn create(&self, text: String) -> Result<Task> {
        let mut inner = self.inner.write().await;
        // Ids are never reused, even after deletes
        let task = Task::new(TaskId::Int(inner.next_id), text);
        inner.next_id += 1;
        inner.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_text(&self, id: &TaskId, text: String) -> Result<Option<Task>> {
        let mut inner = self.inner.write().await;
        Ok(inner.tasks.iter_mut().find(|t| &t.id == id).map(|task| {
            task.text = text;
            task.clone()
        }))
    }

    async fn toggle(&self, id: &TaskId) -> Result<Option<Task>> {
        let mut inner = self.inner.write().await;
        Ok(inner.tasks.iter_mut().find(|t| &t.id == id).map(|task| {
            task.completed = !task.completed;
            task.clone()
        }))
    }

    async fn delete(&self, id: &TaskId) -> Result<()> {
        self.inner.write().await.tasks.retain(|t| &t.id != id);
        Ok(())
    }
}
