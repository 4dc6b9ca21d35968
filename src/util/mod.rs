//! Utility functions shared across the crate.

mod secret;

pub use secret::SecretString;

use std::time::Duration;
use tracing::trace;

/// Wait out a fixed, artificial request latency.
///
/// Stands in for a backend round-trip. The delay is not cancellable and
/// the caller never retries; a zero delay returns immediately.
pub async fn simulate_latency(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    trace!(delay_ms = delay.as_millis() as u64, "Simulating request latency");
    tokio::time::sleep(delay).await;
}
