//! Summary workflow errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Missing LLM or Slack configuration")]
    MissingConfiguration,

    #[error("No pending todos to summarize")]
    NoPendingTasks,

    #[error(transparent)]
    Store(#[from] crate::Error),

    #[error("Text generation failed: {0}")]
    Generation(String),

    #[error("Webhook delivery failed: {0}")]
    Delivery(String),
}

impl SummaryError {
    /// Provider and webhook failures are indistinguishable to callers
    pub fn is_upstream_failure(&self) -> bool {
        matches!(self, Self::Generation(_) | Self::Delivery(_))
    }
}
