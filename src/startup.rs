use crate::config::Config;
use crate::error::Error;
use crate::publisher::Publisher;
use crate::scheduler::start_scheduler;
use crate::server;
use crate::shutdown;
use tokio::sync::oneshot;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=warn")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Wire up the publisher, start the weekly scheduler and serve the
/// HTTP trigger until a termination signal arrives
pub async fn run(config: Config) -> miette::Result<()> {
    let publisher = Publisher::new(&config)?;

    // Weekly scheduled publishes run independently of the HTTP trigger
    start_scheduler(publisher.clone(), config.publish_time.clone());

    // Create shutdown channel
    let (shutdown_send, shutdown_recv) = oneshot::channel();

    // Spawn signal handler task
    tokio::spawn(async move {
        shutdown::handle_signals(shutdown_send).await;
    });

    info!("Starting trigger server on port {}", config.port);
    server::serve(publisher, config.port, shutdown_recv).await?;

    info!("Shut down cleanly");
    Ok(())
}
