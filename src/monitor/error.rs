//! Error type for a failed poll cycle.

use thiserror::Error;

use crate::network::NetworkError;
use crate::state::StateError;

/// Failure inside one poll cycle.
///
/// The loop logs these and carries on; none of them stops monitoring.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Sampling the network identity failed; the cycle was skipped.
    #[error("unable to obtain info: {0}")]
    Network(#[from] NetworkError),

    /// The change was announced but could not be persisted.
    #[error("unable to persist state: {0}")]
    State(#[from] StateError),
}
