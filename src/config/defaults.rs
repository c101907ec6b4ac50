//! Built-in constants.

use std::time::Duration;

/// Seconds between poll cycles.
pub const POLL_INTERVAL_SECS: u64 = 10;

/// Echo service reporting the caller's address in an `origin` field.
pub const PUBLIC_ADDRESS_URL: &str = "https://httpbin.org/get";

/// Poll interval as Duration.
#[must_use]
pub const fn poll_interval() -> Duration {
    Duration::from_secs(POLL_INTERVAL_SECS)
}
