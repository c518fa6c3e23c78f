//! Summarize-and-notify workflow
//!
//! Reads the pending tasks, asks the provider for a summary and forwards it to
//! the chat webhook. Steps run strictly in sequence and nothing is retried.

use std::sync::Arc;

use tracing::{debug, info};

use super::error::SummaryError;
use super::generator::TextGenerator;
use super::notifier::ChatNotifier;
use super::prompt::build_prompt;
use crate::task::TaskRepository;

#[derive(Clone)]
pub struct SummaryWorkflow {
    store: Arc<dyn TaskRepository>,
    generator: Option<Arc<dyn TextGenerator>>,
    notifier: Option<Arc<dyn ChatNotifier>>,
}

impl SummaryWorkflow {
    pub fn new(
        store: Arc<dyn TaskRepository>,
        generator: Option<Arc<dyn TextGenerator>>,
        notifier: Option<Arc<dyn ChatNotifier>>,
    ) -> Self {
        Self {
            store,
            generator,
            notifier,
        }
    }

    /// Whether both the provider and the webhook are available
    pub fn is_configured(&self) -> bool {
        self.generator.is_some() && self.notifier.is_some()
    }

    /// Run the workflow and return the summary that was posted
    pub async fn run(&self) -> Result<String, SummaryError> {
        let (Some(generator), Some(notifier)) = (&self.generator, &self.notifier) else {
            return Err(SummaryError::MissingConfiguration);
        };

        let tasks = self.store.list_pending().await?;
        if tasks.is_empty() {
            return Err(SummaryError::NoPendingTasks);
        }

        info!(pending = tasks.len(), "Summarizing pending tasks");
        let prompt = build_prompt(&tasks);
        debug!(prompt_len = prompt.len(), "Prompt built");

        let summary = generator.generate(&prompt).await?.trim().to_string();
        notifier.notify(&summary).await?;

        info!(summary_len = summary.len(), "Summary delivered");
        Ok(summary)
    }
}
