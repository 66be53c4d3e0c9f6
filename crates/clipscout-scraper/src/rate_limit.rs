//! Fixed pacing between outbound requests.
//!
//! Search engines and aggregator sites throttle or block clients that issue
//! requests back to back. The pipeline never retries, so a fixed pause is
//! the only throttle.

use std::time::Duration;

/// Sleeps for `delay`, or returns immediately when it is zero.
pub(crate) async fn pause(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    tokio::time::sleep(delay).await;
}
