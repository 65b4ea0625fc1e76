use crate::error::{auth_guard_error, BotResult, Error};
use crate::publisher::Publisher;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::Router;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::net::SocketAddr;
use tokio::sync::oneshot;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Guard header required on the publish routes
pub const GUARD_HEADER: &str = "x-clippy";

/// Build the trigger router
pub fn router(publisher: Publisher) -> Router {
    Router::new()
        .route("/", any(publish_handler))
        .route("/publish", any(publish_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(publisher)
}

/// Bind and serve until the shutdown channel fires
pub async fn serve(
    publisher: Publisher,
    port: u16,
    shutdown: oneshot::Receiver<()>,
) -> BotResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, router(publisher))
        .with_graceful_shutdown(async {
            let _ = shutdown.await;
        })
        .await?;

    Ok(())
}

/// Run the publish pipeline if the guard header checks out.
///
/// Any method is accepted. The response body is the JSON-serialized list
/// of delivery responses, or the literal `ok` when serialization yields
/// nothing to show.
async fn publish_handler(
    State(publisher): State<Publisher>,
    headers: HeaderMap,
) -> Result<Response, Error> {
    check_guard(&headers)?;

    let mut rng = StdRng::from_os_rng();
    let results = publisher.publish(&mut rng).await?;

    let body = serde_json::to_string(&results)?;
    if body.is_empty() {
        return Ok("ok".into_response());
    }

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

async fn health_handler() -> &'static str {
    "ok"
}

/// The pipeline only runs for callers sending `X-Clippy: true`
fn check_guard(headers: &HeaderMap) -> BotResult<()> {
    match headers.get(GUARD_HEADER) {
        Some(value) if value == "true" => Ok(()),
        _ => Err(auth_guard_error("Missing header")),
    }
}

// Every failure surfaces as a generic 500; details stay in the logs
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
    }
}
