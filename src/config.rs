use crate::error::{env_error, BotResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

/// Default events API endpoint
pub const DEFAULT_EVENTS_API_URL: &str = "https://compsoc.io/api/events/all";

/// Default base URL for event detail pages
pub const DEFAULT_EVENTS_SITE_URL: &str = "https://compsoc.io/events";

/// Default Discord webhook API base
pub const DEFAULT_WEBHOOK_API_BASE: &str = "https://discord.com/api/webhooks";

/// Default weekly publish time (HH:MM, UTC, Mondays)
pub const DEFAULT_PUBLISH_TIME: &str = "09:00";

/// Preamble texts prepended to the first message of a publish run.
/// One is chosen uniformly at random per run.
pub const DEFAULT_PREAMBLES: [&str; 2] = [
    "@everyone\nMark these events down in your schedule for the upcoming week:",
    "@everyone, we've got some awesome events planned in the next week!",
];

/// Main configuration structure for the publisher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Discord webhook identifier
    pub discord_id: String,
    /// Discord webhook token
    pub discord_token: String,
    /// Events API endpoint returning the full event list
    pub events_api_url: String,
    /// Base URL for event detail pages, used for embed links
    pub events_site_url: String,
    /// Discord webhook API base URL
    pub webhook_api_base: String,
    /// Weekly publish time in HH:MM (UTC, Mondays)
    pub publish_time: String,
    /// Port for the HTTP trigger server
    pub port: u16,
    /// Preamble texts for the first message of each run
    pub preambles: Vec<String>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> BotResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Required environment variables
        let discord_id = env::var("DISCORD_ID").map_err(|_| env_error("DISCORD_ID"))?;
        let discord_token = env::var("DISCORD_TOKEN").map_err(|_| env_error("DISCORD_TOKEN"))?;

        // Optional overrides with sensible defaults
        let events_api_url =
            env::var("EVENTS_API_URL").unwrap_or_else(|_| String::from(DEFAULT_EVENTS_API_URL));
        let events_site_url =
            env::var("EVENTS_SITE_URL").unwrap_or_else(|_| String::from(DEFAULT_EVENTS_SITE_URL));
        let webhook_api_base = env::var("WEBHOOK_API_BASE")
            .unwrap_or_else(|_| String::from(DEFAULT_WEBHOOK_API_BASE));
        let publish_time =
            env::var("PUBLISH_TIME").unwrap_or_else(|_| String::from(DEFAULT_PUBLISH_TIME));

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        // Default preambles, overridable from file
        let mut preambles: Vec<String> = DEFAULT_PREAMBLES.iter().map(|s| s.to_string()).collect();

        // Load preamble configuration from file if it exists
        if let Ok(content) = fs::read_to_string("config/preambles.toml") {
            if let Ok(file) = toml::from_str::<PreambleFile>(&content) {
                if !file.preambles.is_empty() {
                    preambles = file.preambles;
                }
            }
        }

        Ok(Config {
            discord_id,
            discord_token,
            events_api_url,
            events_site_url,
            webhook_api_base,
            publish_time,
            port,
            preambles,
        })
    }

    /// Full webhook URL assembled from the base and the two secrets
    pub fn webhook_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.webhook_api_base, self.discord_id, self.discord_token
        )
    }
}

/// Shape of the optional config/preambles.toml file
#[derive(Debug, Deserialize)]
struct PreambleFile {
    preambles: Vec<String>,
}
