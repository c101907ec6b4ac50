//! Error types for HTTP and webhook delivery.

use thiserror::Error;

/// Transport-level HTTP failure.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Connection could not be established or was dropped
    /// (DNS failure, refused connection, TLS error, truncated body).
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The transport gave up waiting for the server.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built from the given URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Reasons a webhook notification was not delivered.
///
/// Never escapes the notifier: [`crate::webhook::Notifier::notify`] logs it
/// and reports `false`.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The HTTP request itself failed.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The endpoint answered with a status of 300 or above.
    #[error("Webhook rejected the message with status {status}")]
    NonSuccessStatus {
        /// Status returned by the endpoint
        status: http::StatusCode,
        /// Response body, when it was valid UTF-8
        body: Option<String>,
    },

    /// The payload could not be encoded.
    #[error("Failed to encode payload: {0}")]
    Serialize(#[from] serde_json::Error),
}
