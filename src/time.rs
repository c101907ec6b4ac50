//! Sleep abstraction for testability.
//!
//! The monitor loop waits between poll cycles through a [`Sleeper`],
//! allowing tests to run many cycles without real delays.

use std::time::Duration;

/// Abstraction over asynchronous sleeping.
///
/// # Example
///
/// ```
/// use hostwatch::time::{InstantSleeper, Sleeper};
/// use std::time::Duration;
///
/// let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// runtime.block_on(InstantSleeper.sleep(Duration::from_secs(3600)));
/// ```
pub trait Sleeper: Send + Sync {
    /// Waits for (at least) the given duration.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}

/// Production sleeper backed by [`tokio::time::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sleeper that returns immediately after yielding to the scheduler.
///
/// The yield keeps a loop driven by this sleeper cooperative, so other
/// futures polled alongside it (such as a shutdown signal) still make progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {
        tokio::task::yield_now().await;
    }
}
