use async_trait::async_trait;
use serde::Serialize;

use std::time::Duration;

use crate::client::get_http_client;
use crate::config::Config;
use crate::error::PublishError;

use super::Publisher;

#[derive(Debug, Serialize)]
struct WebhookMessage<'a> {
    content: &'a str,
}

pub struct DiscordWebhook {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl DiscordWebhook {
    pub fn new(config: &Config) -> Self {
        Self::with_client(
            get_http_client().clone(),
            config.discord_webhook.clone(),
            config.webhook_timeout(),
        )
    }

    pub fn with_client(client: reqwest::Client, url: String, timeout: Duration) -> Self {
        Self {
            client,
            url,
            timeout,
        }
    }
}

#[async_trait]
impl Publisher for DiscordWebhook {
    async fn publish(&self, content: &str) -> Result<(), PublishError> {
        let response = self
            .client
            .post(&self.url)
            .timeout(self.timeout)
            .json(&WebhookMessage { content })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PublishError::Status(status));
        }
        Ok(())
    }
}
