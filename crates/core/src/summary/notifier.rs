//! Chat webhook client

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::error::SummaryError;

/// Posts a message to a chat channel
#[async_trait]
pub trait ChatNotifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<(), SummaryError>;
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

/// Slack incoming-webhook client
pub struct SlackWebhook {
    client: Client,
    url: String,
}

impl SlackWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ChatNotifier for SlackWebhook {
    async fn notify(&self, text: &str) -> Result<(), SummaryError> {
        let resp = self
            .client
            .post(&self.url)
            .json(&WebhookPayload { text })
            .send()
            .await
            .map_err(|e| SummaryError::Delivery(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SummaryError::Delivery(format!("{} - {}", status, body)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_notify_posts_text() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .and(matchers::path("/services/T000/B000/XXX"))
            .and(matchers::body_json(json!({ "text": "Two things to do." })))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let webhook = SlackWebhook::new(format!("{}/services/T000/B000/XXX", server.uri()));
        webhook.notify("Two things to do.").await.unwrap();
    }

    #[tokio::test]
    async fn test_notify_rejects_error_status() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no_service"))
            .mount(&server)
            .await;

        let webhook = SlackWebhook::new(server.uri());
        let err = webhook.notify("hello").await.unwrap_err();
        match err {
            SummaryError::Delivery(msg) => assert!(msg.contains("no_service")),
            e => panic!("Expected Delivery error, got: {:?}", e),
        }
    }
}
