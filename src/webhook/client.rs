use super::models::{Embed, Message};
use crate::error::{config_error, network_error, parse_error, BotResult};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Discord rejects messages carrying more than ten embeds
pub const MAX_EMBEDS_PER_MESSAGE: usize = 10;

/// Sink for webhook messages
#[async_trait]
pub trait WebhookPoster: Send + Sync {
    /// Deliver one message, returning the parsed response body
    async fn post(&self, message: &Message) -> BotResult<Value>;
}

/// HTTP client for a single Discord webhook
pub struct WebhookClient {
    client: Client,
    url: Url,
}

impl WebhookClient {
    /// Create a client for the given webhook URL
    pub fn new(webhook_url: &str) -> BotResult<Self> {
        let url = Url::parse(webhook_url)
            .map_err(|e| config_error(&format!("Invalid webhook URL: {}", e)))?;
        Ok(Self {
            client: Client::new(),
            url,
        })
    }
}

#[async_trait]
impl WebhookPoster for WebhookClient {
    async fn post(&self, message: &Message) -> BotResult<Value> {
        debug!("Posting message with {} embeds", message.embeds.len());

        let response = self
            .client
            .post(self.url.clone())
            .json(message)
            .send()
            .await
            .map_err(|e| network_error(&format!("Failed to post message: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(network_error(&format!(
                "Webhook delivery failed: HTTP {} - {}",
                status, error_body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| network_error(&format!("Failed to read webhook response: {}", e)))?;

        // Discord answers 204 with an empty body unless ?wait=true is set
        if body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body)
            .map_err(|e| parse_error(&format!("Failed to parse webhook response: {}", e)))
    }
}

/// Deliver embeds in batches of at most ten per message, in input order.
///
/// The content prefix rides on the first batch only. An empty embed list
/// issues no delivery calls. The first failing batch aborts the rest;
/// batches already delivered stay delivered.
pub async fn post_embeds(
    poster: &dyn WebhookPoster,
    embeds: &[Embed],
    content: Option<&str>,
) -> BotResult<Vec<Value>> {
    let mut responses = Vec::new();

    for (index, chunk) in embeds.chunks(MAX_EMBEDS_PER_MESSAGE).enumerate() {
        let message = Message {
            embeds: chunk.to_vec(),
            content: if index == 0 {
                content.map(|s| s.to_string())
            } else {
                None
            },
        };
        responses.push(poster.post(&message).await?);
    }

    Ok(responses)
}
