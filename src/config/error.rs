//! Error types for configuration validation.

use thiserror::Error;

/// Error type for configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A URL could not be parsed.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A URL parsed but does not use http or https.
    #[error("Unsupported URL scheme '{scheme}' in '{url}': expected http or https")]
    UnsupportedScheme {
        /// The offending URL
        url: String,
        /// Its scheme
        scheme: String,
    },
}
