use crate::events::time::next_publish_time;
use crate::publisher::Publisher;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::{sleep, Duration as TokioDuration};
use tracing::{error, info};

/// Start the weekly publish scheduler
pub fn start_scheduler(publisher: Publisher, publish_time: String) {
    tokio::spawn(async move {
        loop {
            let now = Utc::now();
            let next = match next_publish_time(now, &publish_time) {
                Ok(time) => time,
                Err(e) => {
                    error!("Failed to calculate next publish time: {}", e);
                    sleep(TokioDuration::from_secs(3600)).await; // Retry in an hour
                    continue;
                }
            };

            let wait_duration = next - now;
            info!("Next publish scheduled for {}", next);
            sleep(TokioDuration::from_secs(
                wait_duration.num_seconds().max(0) as u64
            ))
            .await;

            // The scheduled path discards the delivery responses;
            // failures go to the log and the loop keeps running
            let mut rng = StdRng::from_os_rng();
            match publisher.publish(&mut rng).await {
                Ok(responses) => {
                    info!("Published weekly events in {} messages", responses.len());
                }
                Err(e) => {
                    error!("Failed to publish events: {}", e);
                }
            }
        }
    });
}
