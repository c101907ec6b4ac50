//! Chat webhook notifier.

use http::HeaderValue;
use http::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use super::{HttpClient, HttpRequest, ReqwestClient, WebhookError};

/// Delivers a text message to an external endpoint.
///
/// Delivery is best-effort: implementations never return an error and never
/// retry. The boolean result only tells the caller whether the endpoint
/// accepted the message.
pub trait Notifier: Send + Sync {
    /// Sends `message`, returning `true` if it was accepted.
    fn notify(&self, message: &str) -> impl std::future::Future<Output = bool> + Send;
}

/// JSON payload understood by Discord-style webhooks.
#[derive(Debug, Serialize)]
struct WebhookPayload {
    content: String,
}

/// Posts messages to a Discord-compatible webhook.
///
/// Each message is sent as `{"content": "<prefix>:\n<message>"}` so that
/// several hosts can share one channel and still be told apart.
///
/// # Example
///
/// ```
/// use hostwatch::webhook::DiscordWebhook;
/// use url::Url;
///
/// let webhook = DiscordWebhook::new(
///     Url::parse("https://discord.com/api/webhooks/1/abc").unwrap(),
///     "build-box",
/// );
/// assert_eq!(webhook.prefix(), "build-box");
/// ```
#[derive(Debug)]
pub struct DiscordWebhook<H = ReqwestClient> {
    client: H,
    url: url::Url,
    prefix: String,
}

impl DiscordWebhook<ReqwestClient> {
    /// Creates a webhook notifier using the default reqwest client.
    #[must_use]
    pub fn new(url: url::Url, prefix: impl Into<String>) -> Self {
        Self::with_client(ReqwestClient::new(), url, prefix)
    }
}

impl<H> DiscordWebhook<H> {
    /// Creates a webhook notifier with a custom HTTP client.
    #[must_use]
    pub fn with_client(client: H, url: url::Url, prefix: impl Into<String>) -> Self {
        Self {
            client,
            url,
            prefix: prefix.into(),
        }
    }

    /// Returns the webhook URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }

    /// Returns the identifying prefix placed before every message.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl<H: HttpClient> DiscordWebhook<H> {
    /// Builds the POST request carrying `message`.
    fn build_request(&self, message: &str) -> Result<HttpRequest, WebhookError> {
        let payload = WebhookPayload {
            content: format!("{}:\n{message}", self.prefix),
        };
        let body = serde_json::to_vec(&payload)?;

        Ok(HttpRequest::post(self.url.clone())
            .with_header(ACCEPT, HeaderValue::from_static("application/json"))
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_body(body))
    }

    /// Sends one delivery attempt.
    ///
    /// Any status below 300 counts as delivered.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] on transport failure or a status of 300 and above.
    pub async fn deliver(&self, message: &str) -> Result<(), WebhookError> {
        let request = self.build_request(message)?;
        let response = self.client.request(request).await?;

        if response.status.as_u16() < 300 {
            return Ok(());
        }

        Err(WebhookError::NonSuccessStatus {
            status: response.status,
            body: response.body_text().map(ToString::to_string),
        })
    }
}

impl<H: HttpClient> Notifier for DiscordWebhook<H> {
    async fn notify(&self, message: &str) -> bool {
        match self.deliver(message).await {
            Ok(()) => {
                tracing::debug!("Notification delivered to {}", self.url);
                true
            }
            Err(e) => {
                tracing::error!("unable to send message: {e}");
                false
            }
        }
    }
}
