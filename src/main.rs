use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    eventhook::startup::init_logging()?;

    info!("Starting eventhook");

    // Load configuration
    let config = eventhook::startup::load_config()?;

    // Run the scheduler and trigger server
    eventhook::startup::run(config).await
}
