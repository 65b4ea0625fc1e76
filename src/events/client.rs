use super::models::Event;
use super::time::WEEK_SECONDS;
use crate::error::{config_error, network_error, parse_error, BotResult};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Source of event records
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch the full remote event list, unfiltered
    async fn fetch_all(&self) -> BotResult<Vec<Event>>;

    /// Events starting within the next week that are not hidden
    async fn upcoming_events(&self) -> BotResult<Vec<Event>> {
        let events = self.fetch_all().await?;
        Ok(upcoming_events(events, Utc::now().timestamp()))
    }
}

/// Keep events that start before `now + 7 days` and are not hidden.
/// Input order is preserved.
pub fn upcoming_events(events: Vec<Event>, now: i64) -> Vec<Event> {
    let threshold = now + WEEK_SECONDS;
    events
        .into_iter()
        .filter(|event| event.unix_start_time < threshold && !event.hidden)
        .collect()
}

/// HTTP client for the events API
pub struct EventsClient {
    client: Client,
    url: Url,
}

impl EventsClient {
    /// Create a client for the given events API endpoint
    pub fn new(events_api_url: &str) -> BotResult<Self> {
        let url = Url::parse(events_api_url)
            .map_err(|e| config_error(&format!("Invalid events API URL: {}", e)))?;
        Ok(Self {
            client: Client::new(),
            url,
        })
    }
}

#[async_trait]
impl EventSource for EventsClient {
    async fn fetch_all(&self) -> BotResult<Vec<Event>> {
        debug!("Fetching events from {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| network_error(&format!("Failed to fetch events: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(network_error(&format!(
                "Failed to fetch events: HTTP {} - {}",
                status, error_body
            )));
        }

        response
            .json::<Vec<Event>>()
            .await
            .map_err(|e| parse_error(&format!("Failed to parse events response: {}", e)))
    }
}
