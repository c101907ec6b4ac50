//! Error type for network inspection.

use thiserror::Error;

use crate::webhook::HttpError;

/// Failure while sampling the host's network identity.
///
/// [`NetworkError::Interface`] is the interface-enumeration failure; every
/// other variant is a failed public address lookup.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The host could not enumerate its network interfaces.
    #[error("Failed to enumerate network interfaces: {0}")]
    Interface(#[source] std::io::Error),

    /// The address echo service could not be reached.
    #[error("Public address request failed: {0}")]
    Request(#[from] HttpError),

    /// The address echo service answered with a non-2xx status.
    #[error("Public address service returned status {0}")]
    Status(http::StatusCode),

    /// The address echo service answered with an unusable body.
    #[error("Malformed public address response: {0}")]
    Malformed(String),
}
