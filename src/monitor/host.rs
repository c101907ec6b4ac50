//! Polling monitor announcing host identity changes.

use std::future::Future;
use std::time::Duration;

use crate::config::defaults;
use crate::network::NetworkInspector;
use crate::state::{HostState, StateError, StateStore};
use crate::time::{Sleeper, TokioSleeper};
use crate::uptime::{UptimeSource, describe_uptime};
use crate::webhook::Notifier;

use super::MonitorError;

/// Result of one poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The sample matched the baseline; nothing was sent or written.
    Unchanged,
    /// The sample differed; a notification was attempted and the state saved.
    Changed {
        /// Whether the webhook accepted the notification.
        delivered: bool,
    },
}

/// Polls the host's network identity and announces every change once.
///
/// The monitor owns the comparison baseline: the last announced state with
/// `uptime` cleared. Uptime is reported with each change but never takes
/// part in the comparison, otherwise every cycle would count as a change.
///
/// # Type Parameters
///
/// * `I` - [`NetworkInspector`] producing samples
/// * `U` - [`UptimeSource`] for the report
/// * `N` - [`Notifier`] delivering the report
/// * `S` - [`StateStore`] mirroring the baseline on disk
/// * `Z` - [`Sleeper`] waiting between cycles (defaults to [`TokioSleeper`])
#[derive(Debug)]
pub struct HostMonitor<I, U, N, S, Z = TokioSleeper> {
    inspector: I,
    uptime: U,
    notifier: N,
    store: S,
    sleeper: Z,
    interval: Duration,
    baseline: HostState,
}

impl<I, U, N, S> HostMonitor<I, U, N, S, TokioSleeper>
where
    S: StateStore,
{
    /// Creates a monitor whose baseline is loaded from `store`.
    ///
    /// A missing store is initialised with an all-absent state, so the first
    /// successful sample is always announced.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the store is unusable. This is the only
    /// failure that should stop the process.
    pub fn new(inspector: I, uptime: U, notifier: N, store: S) -> Result<Self, StateError> {
        let mut baseline = store.load()?;
        baseline.uptime = None;

        Ok(Self {
            inspector,
            uptime,
            notifier,
            store,
            sleeper: TokioSleeper,
            interval: defaults::poll_interval(),
            baseline,
        })
    }
}

impl<I, U, N, S, Z> HostMonitor<I, U, N, S, Z> {
    /// Sets a custom sleeper (tests use one that does not wait).
    #[must_use]
    pub fn with_sleeper<Z2>(self, sleeper: Z2) -> HostMonitor<I, U, N, S, Z2> {
        HostMonitor {
            inspector: self.inspector,
            uptime: self.uptime,
            notifier: self.notifier,
            store: self.store,
            sleeper,
            interval: self.interval,
            baseline: self.baseline,
        }
    }

    /// Sets the delay between cycles.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Returns the delay between cycles.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the current comparison baseline.
    #[must_use]
    pub const fn baseline(&self) -> &HostState {
        &self.baseline
    }
}

impl<I, U, N, S, Z> HostMonitor<I, U, N, S, Z>
where
    I: NetworkInspector,
    U: UptimeSource,
    N: Notifier,
    S: StateStore,
    Z: Sleeper,
{
    /// Runs one sample/compare/act step.
    ///
    /// On a change the baseline is replaced first, then the report (with
    /// uptime) is sent and persisted. A failed notification does not prevent
    /// persistence. A failed save restores the previous baseline, so the next
    /// cycle announces the change again and retries the save.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Network`] if sampling failed (nothing else
    /// happened), or [`MonitorError::State`] if the report could not be saved.
    pub async fn poll_once(&mut self) -> Result<PollOutcome, MonitorError> {
        let public_address = self.inspector.public_address().await?;
        let local_addresses = self.inspector.local_addresses()?;
        let candidate = HostState::sampled(local_addresses, public_address);

        if candidate.same_identity(&self.baseline) {
            tracing::debug!("No change detected");
            return Ok(PollOutcome::Unchanged);
        }

        tracing::info!(
            "Host identity changed: public {:?}, local {:?}",
            candidate.public_address,
            candidate.local_addresses
        );
        let previous = std::mem::replace(&mut self.baseline, candidate.clone());

        let report = candidate.with_uptime(describe_uptime(&self.uptime));
        let delivered = match report.to_message() {
            Ok(message) => self.notifier.notify(&message).await,
            Err(e) => {
                tracing::error!("unable to render message: {e}");
                false
            }
        };
        if let Err(e) = self.store.save(&report).await {
            self.baseline = previous;
            return Err(e.into());
        }

        Ok(PollOutcome::Changed { delivered })
    }

    /// Runs one cycle, logging any failure, then waits for the interval.
    async fn cycle(&mut self) {
        if let Err(e) = self.poll_once().await {
            tracing::error!("{e}");
        }
        self.sleeper.sleep(self.interval).await;
    }

    /// Polls forever, until `shutdown` resolves.
    ///
    /// No cycle failure ends the loop. Shutdown is honoured at any point in
    /// a cycle, including while an outbound request is in flight.
    pub async fn run_until<F>(mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tracing::info!(
            "Monitoring host identity every {}s",
            self.interval.as_secs()
        );
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                biased;

                () = &mut shutdown => {
                    tracing::info!("Shutdown signal received, stopping...");
                    return;
                }

                () = self.cycle() => {}
            }
        }
    }
}
