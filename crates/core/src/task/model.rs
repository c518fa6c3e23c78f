//! Task model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned task identifier
///
/// Hosted tables usually hand out integer identity keys, but the id is opaque
/// to the service, so text keys (uuid and friends) are carried as-is. The JSON
/// shape read from the store is the shape written back to clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Int(i64),
    Text(String),
}

impl TaskId {
    /// Parse an id taken from a URL path segment
    ///
    /// Only segments that print back identically become integers, so text keys
    /// such as `007` reach the store untouched.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(n) if n.to_string() == raw => Self::Int(n),
            _ => Self::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A task row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Build a fresh, not yet completed task
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: Some(Utc::now()),
        }
    }
}

/// Insert payload for a new task
#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    pub text: String,
    pub completed: bool,
}

impl NewTask {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}
