use crate::config::Config;
use crate::error::BotResult;
use crate::events::client::EventSource;
use crate::events::format::format_event;
use crate::events::EventsClient;
use crate::webhook::client::{post_embeds, WebhookPoster};
use crate::webhook::WebhookClient;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Everything one publish run needs: the two remote endpoints behind
/// their trait seams, the link base for embeds, and the preamble pool.
#[derive(Clone)]
pub struct Publisher {
    pub events: Arc<dyn EventSource>,
    pub webhook: Arc<dyn WebhookPoster>,
    pub events_site_url: String,
    pub preambles: Arc<Vec<String>>,
}

impl Publisher {
    /// Wire up the real HTTP clients from configuration
    pub fn new(config: &Config) -> BotResult<Self> {
        Ok(Self {
            events: Arc::new(EventsClient::new(&config.events_api_url)?),
            webhook: Arc::new(WebhookClient::new(&config.webhook_url())?),
            events_site_url: config.events_site_url.clone(),
            preambles: Arc::new(config.preambles.clone()),
        })
    }

    /// Run the fetch → format → batch → deliver pipeline once
    pub async fn publish<R: Rng + ?Sized>(&self, rng: &mut R) -> BotResult<Vec<Value>> {
        publish_events(
            self.events.as_ref(),
            self.webhook.as_ref(),
            &self.events_site_url,
            &self.preambles,
            rng,
        )
        .await
    }
}

/// Fetch upcoming events, format each into an embed, pick a preamble
/// uniformly at random and deliver the lot in batches.
///
/// Returns the parsed delivery responses in send order.
pub async fn publish_events<R: Rng + ?Sized>(
    events: &dyn EventSource,
    webhook: &dyn WebhookPoster,
    events_site_url: &str,
    preambles: &[String],
    rng: &mut R,
) -> BotResult<Vec<Value>> {
    let upcoming = events.upcoming_events().await?;
    info!("Publishing {} upcoming events", upcoming.len());

    let embeds: Vec<_> = upcoming
        .iter()
        .map(|event| format_event(events_site_url, event))
        .collect();

    let preamble = preambles.choose(rng).map(|s| s.as_str());

    post_embeds(webhook, &embeds, preamble).await
}
