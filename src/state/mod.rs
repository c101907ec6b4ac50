//! Last-notified host state and its persistence.
//!
//! Exactly one [`HostState`] is current at a time: the monitor holds it in
//! memory and mirrors it to a [`StateStore`] whenever it changes.

mod file;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use file::FileStateStore;

use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Snapshot of the host's network identity and uptime.
///
/// Serialized with the field names `local_ips`, `public_ip` and `uptime`;
/// absent values are written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostState {
    /// Sorted IPv4 addresses of all interfaces; `None` before the first sample.
    #[serde(rename = "local_ips", default)]
    pub local_addresses: Option<Vec<String>>,

    /// Address reported by the public echo service.
    #[serde(rename = "public_ip", default)]
    pub public_address: Option<String>,

    /// Human-readable uptime; only set on states being reported.
    #[serde(default, deserialize_with = "uptime_text")]
    pub uptime: Option<String>,
}

/// Accepts uptime written either as text or as a bare number (`-1`).
#[derive(Deserialize)]
#[serde(untagged)]
enum UptimeRepr {
    Text(String),
    Number(i64),
}

fn uptime_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(
        Option::<UptimeRepr>::deserialize(deserializer)?.map(|repr| match repr {
            UptimeRepr::Text(text) => text,
            UptimeRepr::Number(n) => n.to_string(),
        }),
    )
}

impl HostState {
    /// Creates a freshly sampled state; uptime is left unset.
    #[must_use]
    pub const fn sampled(local_addresses: Vec<String>, public_address: String) -> Self {
        Self {
            local_addresses: Some(local_addresses),
            public_address: Some(public_address),
            uptime: None,
        }
    }

    /// Compares network identity only.
    ///
    /// Uptime changes on every poll and must never count as a change.
    /// Address order is significant.
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        self.local_addresses == other.local_addresses && self.public_address == other.public_address
    }

    /// Returns this state with `uptime` set.
    #[must_use]
    pub fn with_uptime(mut self, uptime: impl Into<String>) -> Self {
        self.uptime = Some(uptime.into());
        self
    }

    /// Renders the state as JSON indented with four spaces, the body of a
    /// change notification.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Serialize`] if serialization fails.
    pub fn to_message(&self) -> Result<String, StateError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .map_err(StateError::Serialize)?;
        String::from_utf8(buf).map_err(|e| {
            StateError::Serialize(serde_json::Error::io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                e,
            )))
        })
    }
}

/// Errors raised by state persistence.
#[derive(Debug, Error)]
pub enum StateError {
    /// The state file could not be read.
    #[error("Failed to read state file '{}': {source}", path.display())]
    Read {
        /// Path of the state file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The state file could not be created or written.
    #[error("Failed to write state file '{}': {source}", path.display())]
    Write {
        /// Path of the state file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The state file does not hold valid JSON state.
    #[error("Failed to parse state file '{}': {source}", path.display())]
    Parse {
        /// Path of the state file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The state could not be serialized.
    #[error("Failed to serialize state: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Persistence for the last-notified [`HostState`].
///
/// # Testing
///
/// Use [`mock::MockStateStore`] in tests to avoid filesystem dependencies.
pub trait StateStore: Send + Sync {
    /// Loads the stored state, initialising an all-absent store first if
    /// none exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the store cannot be created, read or parsed.
    fn load(&self) -> Result<HostState, StateError>;

    /// Replaces the stored state with `state`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the state cannot be written.
    fn save(
        &self,
        state: &HostState,
    ) -> impl std::future::Future<Output = Result<(), StateError>> + Send;
}
