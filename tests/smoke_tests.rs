use eventhook::config::{Config, DEFAULT_PREAMBLES, DEFAULT_PUBLISH_TIME};
use eventhook::publisher::Publisher;

fn test_config() -> Config {
    Config {
        discord_id: "123456".to_string(),
        discord_token: "secret-token".to_string(),
        events_api_url: "https://example.org/api/events/all".to_string(),
        events_site_url: "https://example.org/events".to_string(),
        webhook_api_base: "https://discord.com/api/webhooks".to_string(),
        publish_time: DEFAULT_PUBLISH_TIME.to_string(),
        port: 3000,
        preambles: DEFAULT_PREAMBLES.iter().map(|s| s.to_string()).collect(),
    }
}

/// Smoke test to verify that a config can be constructed and queried
#[test]
fn test_config_webhook_url() {
    let config = test_config();
    assert_eq!(
        config.webhook_url(),
        "https://discord.com/api/webhooks/123456/secret-token"
    );
    assert_eq!(config.preambles.len(), 2);
}

/// Smoke test for wiring the real clients from a config
#[tokio::test]
async fn test_publisher_builds_from_config() {
    let publisher = Publisher::new(&test_config()).unwrap();
    assert_eq!(publisher.events_site_url, "https://example.org/events");
    assert_eq!(publisher.preambles.len(), 2);
}

/// Invalid endpoint URLs are rejected at wiring time, not at publish time
#[tokio::test]
async fn test_publisher_rejects_bad_events_url() {
    let mut config = test_config();
    config.events_api_url = "not a url".to_string();
    assert!(Publisher::new(&config).is_err());
}
