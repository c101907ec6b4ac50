//! Application execution logic.
//!
//! Wires the production components together and drives the monitor on a
//! single-threaded runtime until a shutdown signal arrives.

use thiserror::Error;
use tokio::signal;

use hostwatch::config::ValidatedConfig;
use hostwatch::monitor::HostMonitor;
use hostwatch::network::HostNetwork;
use hostwatch::state::{FileStateStore, StateError};
use hostwatch::uptime::SystemUptime;
use hostwatch::webhook::DiscordWebhook;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for failures that stop the process.
#[derive(Debug, Error)]
pub enum RunError {
    /// The async runtime could not be created.
    #[error("Failed to create runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// The state file is unusable at startup.
    #[error("Failed to initialise state: {0}")]
    Startup(#[from] StateError),
}

/// Builds a current-thread runtime and runs the monitor on it.
///
/// # Errors
///
/// Returns an error if the runtime cannot be built or the state file
/// cannot be loaded.
///
/// Excluded from coverage - requires network access and signal handling.
#[cfg(not(tarpaulin_include))]
pub fn start(config: ValidatedConfig) -> Result<(), RunError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(RunError::Runtime)?;

    runtime.block_on(execute(config))
}

/// Builds the monitor from configuration.
///
/// # Errors
///
/// Returns [`RunError::Startup`] if the state file cannot be created or read.
fn build_monitor(
    config: &ValidatedConfig,
) -> Result<HostMonitor<HostNetwork, SystemUptime, DiscordWebhook, FileStateStore>, RunError> {
    let store = FileStateStore::new(&config.history_file);
    tracing::info!("State file: {}", store.path().display());

    let network = HostNetwork::new(config.public_address_url.clone());
    tracing::info!("Public address service: {}", network.echo_url());

    let webhook = DiscordWebhook::new(config.webhook_url.clone(), config.message_prefix.clone());
    tracing::info!(
        "Webhook host: {}",
        webhook.url().host_str().unwrap_or("<none>")
    );

    let monitor = HostMonitor::new(network, SystemUptime, webhook, store)?;

    Ok(monitor.with_interval(config.poll_interval))
}

/// Runs the monitor until Ctrl+C or SIGTERM.
///
/// Excluded from coverage - requires network access and signal handling.
#[cfg(not(tarpaulin_include))]
async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let monitor = build_monitor(&config)?;
    monitor.run_until(shutdown_signal()).await;
    Ok(())
}

/// Returns a future that completes when a shutdown signal is received.
///
/// If a handler cannot be installed, that signal is simply not awaited and
/// the process keeps running until killed.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
