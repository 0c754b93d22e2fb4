use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tracing::{Instrument, info_span};

/// Counters describing the HTTP traffic of one client.
#[derive(Debug)]
pub struct RequestMetrics {
    start: Instant,
    attempts: AtomicU64,
    retries: AtomicU64,
    name: &'static str,
}

impl RequestMetrics {
    pub fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            start: Instant::now(),
            attempts: AtomicU64::new(0),
            retries: AtomicU64::new(0),
            name,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Count one request sent on the wire.
    pub fn inc(&self) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one retry triggered by a 429 or 503.
    pub fn inc_retry(&self) {
        self.retries.fetch_add(1, Ordering::Relaxed);
    }

    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    pub fn retries(&self) -> u64 {
        self.retries.load(Ordering::Relaxed)
    }

    /// Average attempts per minute since creation.
    pub fn per_minute(&self) -> f64 {
        average_per_minute(self.attempts(), self.start.elapsed())
    }

    pub async fn log_loop(self: Arc<Self>) {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            let span = info_span!("📊 ", client = self.name);
            async {
                interval.tick().await;
                tracing::info!(
                    "{} requests executed, {} retried (avg {:.2} req/min)",
                    self.attempts(),
                    self.retries(),
                    self.per_minute()
                );
            }
            .instrument(span)
            .await
        }
    }
}

fn average_per_minute(total: u64, elapsed: Duration) -> f64 {
    let minutes = elapsed.as_secs_f64() / 60.0;
    if minutes > 0.0 {
        total as f64 / minutes
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_increase() {
        let metrics = RequestMetrics::new("test");
        metrics.inc();
        metrics.inc();
        metrics.inc_retry();

        assert_eq!(metrics.attempts(), 2);
        assert_eq!(metrics.retries(), 1);
        assert_eq!(metrics.name(), "test");
    }

    #[test]
    fn average_over_elapsed_minutes() {
        assert_eq!(average_per_minute(120, Duration::from_secs(120)), 60.0);
        assert_eq!(average_per_minute(5, Duration::ZERO), 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn log_loop_runs_once() {
        let metrics = RequestMetrics::new("test");
        let cloned = metrics.clone();
        let handle = tokio::spawn(async move { cloned.log_loop().await });

        tokio::time::advance(Duration::from_secs(61)).await;
        handle.abort();
        let _ = handle.await;
    }
}
