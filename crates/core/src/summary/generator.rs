//! Text-generation provider client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::SummaryError;

pub const DEFAULT_API_URL: &str = "https://api.cohere.ai/v1/generate";
pub const DEFAULT_MODEL: &str = "command";

const MAX_TOKENS: u32 = 100;
const TEMPERATURE: f32 = 0.5;

/// Generates text for a prompt
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, SummaryError>;
}

/// Settings for the Cohere generate endpoint
#[derive(Debug, Clone)]
pub struct CohereConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

impl CohereConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    generations: Vec<Generation>,
}

#[derive(Debug, Deserialize)]
struct Generation {
    text: String,
}

/// Cohere `/v1/generate` client
pub struct CohereGenerator {
    client: Client,
    config: CohereConfig,
}

impl CohereGenerator {
    pub fn new(config: CohereConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: CohereConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl TextGenerator for CohereGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, SummaryError> {
        let body = GenerateRequest {
            model: &self.config.model,
            prompt,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let resp = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SummaryError::Generation(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| SummaryError::Generation(e.to_string()))?;

        if !status.is_success() {
            return Err(SummaryError::Generation(format!("{} - {}", status, text)));
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)
            .map_err(|e| SummaryError::Generation(format!("Malformed response: {}", e)))?;

        parsed
            .generations
            .into_iter()
            .next()
            .map(|g| g.text)
            .ok_or_else(|| SummaryError::Generation("Response had no generations".to_string()))
    }
}
