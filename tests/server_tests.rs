use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use eventhook::error::BotResult;
use eventhook::events::client::EventSource;
use eventhook::events::Event;
use eventhook::publisher::Publisher;
use eventhook::server::router;
use eventhook::webhook::{Message, WebhookPoster};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// Event source mock counting how often it is hit
#[derive(Default)]
struct CountingSource {
    calls: AtomicUsize,
    events: Vec<Event>,
}

#[async_trait]
impl EventSource for CountingSource {
    async fn fetch_all(&self) -> BotResult<Vec<Event>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.events.clone())
    }
}

/// Webhook mock counting deliveries
#[derive(Default)]
struct CountingPoster {
    calls: AtomicUsize,
}

#[async_trait]
impl WebhookPoster for CountingPoster {
    async fn post(&self, _message: &Message) -> BotResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Value::Null)
    }
}

fn test_publisher(events: Vec<Event>) -> (Publisher, Arc<CountingSource>, Arc<CountingPoster>) {
    let source = Arc::new(CountingSource {
        calls: AtomicUsize::new(0),
        events,
    });
    let poster = Arc::new(CountingPoster::default());
    let publisher = Publisher {
        events: source.clone(),
        webhook: poster.clone(),
        events_site_url: "https://example.org/events".to_string(),
        preambles: Arc::new(vec!["hello".to_string()]),
    };
    (publisher, source, poster)
}

fn upcoming_event() -> Event {
    Event {
        id: 1,
        name: "Pub quiz".to_string(),
        // Past start times pass the one-week-horizon filter
        unix_start_time: 0,
        unix_end_time: 3600,
        ..Default::default()
    }
}

#[tokio::test]
async fn missing_guard_header_never_touches_the_pipeline() {
    let (publisher, source, poster) = test_publisher(vec![upcoming_event()]);

    let response = router(publisher)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/publish")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    assert_eq!(poster.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn wrong_guard_value_is_rejected_too() {
    let (publisher, source, poster) = test_publisher(vec![upcoming_event()]);

    let response = router(publisher)
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/publish")
                .header("X-Clippy", "false")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    assert_eq!(poster.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn guarded_request_publishes_and_returns_the_delivery_responses() {
    let (publisher, source, poster) = test_publisher(vec![upcoming_event()]);

    let response = router(publisher)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/publish")
                .header("X-Clippy", "true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    assert_eq!(poster.calls.load(Ordering::SeqCst), 1);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let parsed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed, serde_json::json!([null]));
}

#[tokio::test]
async fn root_path_triggers_the_same_pipeline() {
    let (publisher, source, _poster) = test_publisher(Vec::new());

    let response = router(publisher)
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/")
                .header("X-Clippy", "true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);

    // No upcoming events means no deliveries and an empty result list
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let parsed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed, serde_json::json!([]));
}

#[tokio::test]
async fn health_endpoint_needs_no_guard() {
    let (publisher, source, _poster) = test_publisher(Vec::new());

    let response = router(publisher)
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"ok");
}
