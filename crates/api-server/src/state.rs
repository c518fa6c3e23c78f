//! Application state

use std::sync::Arc;

use todo_core::summary::{
    ChatNotifier, CohereGenerator, SlackWebhook, SummaryWorkflow, TextGenerator,
};
use todo_core::task::{InMemoryTaskStore, SupabaseTaskStore, TaskRepository};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    task_store: Arc<dyn TaskRepository>,
    store_kind: &'static str,
    summary: SummaryWorkflow,
}

impl AppState {
    /// Build the state from the loaded configuration
    pub fn from_config(config: &Config) -> Self {
        let (task_store, store_kind) = match &config.supabase {
            Some(supabase) => (
                Arc::new(SupabaseTaskStore::new(supabase.clone())) as Arc<dyn TaskRepository>,
                "supabase",
            ),
            None => {
                tracing::warn!("SUPABASE_URL not set, tasks are kept in memory only");
                (
                    Arc::new(InMemoryTaskStore::new()) as Arc<dyn TaskRepository>,
                    "memory",
                )
            }
        };

        let generator = config
            .cohere
            .clone()
            .map(|c| Arc::new(CohereGenerator::new(c)) as Arc<dyn TextGenerator>);
        let notifier = config
            .slack_webhook_url
            .clone()
            .map(|url| Arc::new(SlackWebhook::new(url)) as Arc<dyn ChatNotifier>);

        Self::with_parts(task_store, store_kind, generator, notifier)
    }

    /// Assemble the state from explicit parts
    pub fn with_parts(
        task_store: Arc<dyn TaskRepository>,
        store_kind: &'static str,
        generator: Option<Arc<dyn TextGenerator>>,
        notifier: Option<Arc<dyn ChatNotifier>>,
    ) -> Self {
        let summary = SummaryWorkflow::new(Arc::clone(&task_store), generator, notifier);
        Self {
            inner: Arc::new(AppStateInner {
                task_store,
                store_kind,
                summary,
            }),
        }
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &dyn TaskRepository {
        self.inner.task_store.as_ref()
    }

    /// Which backend holds the tasks
    pub fn store_kind(&self) -> &'static str {
        self.inner.store_kind
    }

    pub fn summary(&self) -> &SummaryWorkflow {
        &self.inner.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_memory_store_without_summary() {
        let config = Config::from_lookup(|_| None).unwrap();
        let state = AppState::from_config(&config);

        assert_eq!(state.store_kind(), "memory");
        assert!(!state.summary().is_configured());
    }

    #[test]
    fn test_hosted_store_and_summary_from_config() {
        let config = Config::from_lookup(|key| match key {
            "SUPABASE_URL" => Some("https://xyz.supabase.co".to_string()),
            "SUPABASE_SERVICE_ROLE_KEY" => Some("service".to_string()),
            "COHERE_API_KEY" => Some("cohere".to_string()),
            "SLACK_WEBHOOK_URL" => Some("https://hooks.slack.com/services/x".to_string()),
            _ => None,
        })
        .unwrap();
        let state = AppState::from_config(&config);

        assert_eq!(state.store_kind(), "supabase");
        assert!(state.summary().is_configured());
    }
}
