//! Network identity sampling.
//!
//! This module provides:
//! - The sampling seam used by the monitor ([`NetworkInspector`])
//! - The production inspector ([`HostNetwork`])
//! - Interface enumeration helpers ([`InterfaceAddress`], [`collect_ipv4`])
//! - Public address lookup helpers ([`fetch_public_address`], [`parse_origin`])

mod error;
mod local;
mod public;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use error::NetworkError;
pub use local::{InterfaceAddress, collect_ipv4, enumerate_interfaces};
pub use public::{fetch_public_address, parse_origin};

use crate::webhook::{HttpClient, ReqwestClient};

/// Samples the host's network identity.
///
/// # Design
///
/// The monitor loop only depends on this trait, so poll cycles can be
/// driven by scripted inspectors in tests.
pub trait NetworkInspector: Send + Sync {
    /// Returns the IPv4 addresses of all interfaces, sorted as strings.
    ///
    /// An empty list is a valid answer (no IPv4-configured interface).
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Interface`] if interfaces cannot be enumerated.
    fn local_addresses(&self) -> Result<Vec<String>, NetworkError>;

    /// Asks a third-party echo service for this host's public address.
    ///
    /// The answer is best-effort: it reflects what the service saw, not
    /// authoritative routing state.
    ///
    /// # Errors
    ///
    /// Returns a request-family [`NetworkError`] on connection failure,
    /// non-success status, or malformed body.
    fn public_address(
        &self,
    ) -> impl std::future::Future<Output = Result<String, NetworkError>> + Send;
}

/// Production inspector: `if-addrs` for local interfaces, an HTTP echo
/// service for the public address.
#[derive(Debug)]
pub struct HostNetwork<H = ReqwestClient> {
    client: H,
    echo_url: url::Url,
}

impl HostNetwork<ReqwestClient> {
    /// Creates an inspector querying `echo_url` with the default client.
    #[must_use]
    pub fn new(echo_url: url::Url) -> Self {
        Self::with_client(ReqwestClient::new(), echo_url)
    }
}

impl<H> HostNetwork<H> {
    /// Creates an inspector with a custom HTTP client.
    #[must_use]
    pub const fn with_client(client: H, echo_url: url::Url) -> Self {
        Self { client, echo_url }
    }

    /// Returns the echo service URL.
    #[must_use]
    pub const fn echo_url(&self) -> &url::Url {
        &self.echo_url
    }
}

impl<H: HttpClient> NetworkInspector for HostNetwork<H> {
    fn local_addresses(&self) -> Result<Vec<String>, NetworkError> {
        enumerate_interfaces().map(collect_ipv4)
    }

    async fn public_address(&self) -> Result<String, NetworkError> {
        fetch_public_address(&self.client, &self.echo_url).await
    }
}
