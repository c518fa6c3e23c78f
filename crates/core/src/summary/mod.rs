//! Summary module
//!
//! Turns the pending task list into a generated summary and posts it to a
//! chat webhook.

mod error;
mod generator;
mod notifier;
mod prompt;
mod workflow;

pub use error::SummaryError;
pub use generator::{CohereConfig, CohereGenerator, TextGenerator};
pub use notifier::{ChatNotifier, SlackWebhook};
pub use prompt::build_prompt;
pub use workflow::SummaryWorkflow;
