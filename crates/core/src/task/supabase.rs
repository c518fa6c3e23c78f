//! Hosted task storage over Supabase's PostgREST API.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde_json::json;
use tracing::debug;

use super::model::{NewTask, Task, TaskId};
use super::repository::TaskRepository;
use crate::{Error, Result};

const TOGGLE_ATTEMPTS: usize = 3;

/// Connection settings for the hosted store.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Service role key (sent as `apikey` and bearer token)
    pub service_role_key: String,
    /// Table holding `id, text, completed` rows
    pub table: String,
}

/// Task store backed by a Supabase table.
pub struct SupabaseTaskStore {
    client: Client,
    rest_url: String,
    service_role_key: String,
}

impl SupabaseTaskStore {
    pub fn new(config: SupabaseConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: SupabaseConfig) -> Self {
        Self {
            client,
            rest_url: format!(
                "{}/rest/v1/{}",
                config.url.trim_end_matches('/'),
                config.table
            ),
            service_role_key: config.service_role_key,
        }
    }

    fn request(&self, method: Method, query: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}?{}", self.rest_url, query))
            .header("apikey", &self.service_role_key)
            .header("Authorization", format!("Bearer {}", self.service_role_key))
    }

    fn write(&self, method: Method, query: &str) -> RequestBuilder {
        self.request(method, query)
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
    }

    async fn fetch_rows(&self, builder: RequestBuilder) -> Result<Vec<Task>> {
        let resp = builder.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(Error::Store(format!("{} - {}", status, text)));
        }

        Ok(serde_json::from_str(&text)?)
    }

    async fn fetch_one(&self, builder: RequestBuilder) -> Result<Option<Task>> {
        Ok(self.fetch_rows(builder).await?.into_iter().next())
    }
}

fn id_filter(id: &TaskId) -> String {
    format!("id=eq.{}", urlencoding::encode(&id.to_string()))
}

#[async_trait]
impl TaskRepository for SupabaseTaskStore {
    async fn list(&self) -> Result<Vec<Task>> {
        self.fetch_rows(self.request(Method::GET, "select=*")).await
    }

    async fn list_pending(&self) -> Result<Vec<Task>> {
        self.fetch_rows(self.request(Method::GET, "select=*&completed=eq.false"))
            .await
    }

    async fn get(&self, id: &TaskId) -> Result<Option<Task>> {
        let query = format!("select=*&{}", id_filter(id));
        self.fetch_one(self.request(Method::GET, &query)).await
    }

    async fn create(&self, text: String) -> Result<Task> {
        let builder = self
            .write(Method::POST, "select=*")
            .json(&[NewTask::new(text)]);
        self.fetch_one(builder)
            .await?
            .ok_or_else(|| Error::Store("No task returned".to_string()))
    }

    async fn update_text(&self, id: &TaskId, text: String) -> Result<Option<Task>> {
        let builder = self
            .write(Method::PATCH, &id_filter(id))
            .json(&json!({ "text": text }));
        self.fetch_one(builder).await
    }

    async fn toggle(&self, id: &TaskId) -> Result<Option<Task>> {
        // PostgREST cannot express `completed = NOT completed`, so flip with a
        // compare-and-swap on the value we observed.
        for attempt in 1..=TOGGLE_ATTEMPTS {
            let Some(current) = self.get(id).await? else {
                return Ok(None);
            };

            let query = format!("{}&completed=eq.{}", id_filter(id), current.completed);
            let builder = self
                .write(Method::PATCH, &query)
                .json(&json!({ "completed": !current.completed }));

            if let Some(task) = self.fetch_one(builder).await? {
                return Ok(Some(task));
            }
            debug!(%id, attempt, "Task changed during toggle, re-reading");
        }

        Err(Error::Conflict(format!(
            "Task {} changed concurrently during toggle",
            id
        )))
    }

    async fn delete(&self, id: &TaskId) -> Result<()> {
        let resp = self.request(Method::DELETE, &id_filter(id)).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let text = resp.text().await?;
            return Err(Error::Store(format!("{} - {}", status, text)));
        }

        Ok(())
    }
}
