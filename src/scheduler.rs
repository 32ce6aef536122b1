//! Daily collection trigger.
//!
//! Sleeps until the configured hour (UTC), runs one collection, and
//! repeats. Runs are serialized by the loop itself; a failed run is logged
//! and the loop keeps going until the next day.

use crate::pipeline::Collector;
use chrono::{Duration as ChronoDuration, Timelike, Utc};
use std::time::Duration;
use tracing::{error, info};

/// Time remaining until the next occurrence of `hour`:00 UTC.
fn until_next_run(hour: u32) -> Duration {
    let now = Utc::now();
    let mut next = now
        .with_hour(hour)
        .and_then(|t| t.with_minute(0))
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);

    if next <= now {
        next += ChronoDuration::days(1);
    }

    (next - now).to_std().unwrap_or(Duration::ZERO)
}

/// Run `collector` once a day at `hour`:00 UTC, forever.
pub async fn run_daily(collector: &Collector, hour: u32, max_per_feed: usize) {
    info!("Scheduler started - collecting daily at {:02}:00 UTC", hour);

    loop {
        let wait = until_next_run(hour);
        info!("Next collection in {}s", wait.as_secs());
        tokio::time::sleep(wait).await;

        match collector.collect(max_per_feed).await {
            Ok(stats) => info!(
                "Scheduled collection finished: {} new, {} duplicates, {} filtered",
                stats.new, stats.duplicate, stats.filtered
            ),
            Err(e) => error!("Scheduled collection failed: {}", e),
        }
    }
}
