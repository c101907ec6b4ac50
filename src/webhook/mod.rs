//! Outbound HTTP and webhook notification.
//!
//! This module provides:
//! - HTTP value types and the client seam ([`HttpRequest`], [`HttpResponse`], [`HttpClient`])
//! - The production client ([`ReqwestClient`])
//! - Best-effort message delivery ([`Notifier`], [`DiscordWebhook`])

mod client;
mod error;
mod http;
mod notifier;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod http_tests;

pub use client::ReqwestClient;
pub use error::{HttpError, WebhookError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use notifier::{DiscordWebhook, Notifier};

#[cfg(test)]
pub use http::mock;
