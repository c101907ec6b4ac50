//! Public-facing address lookup through an HTTP echo service.

use serde::Deserialize;

use super::NetworkError;
use crate::webhook::{HttpClient, HttpRequest};

/// Body returned by httpbin-style `/get` endpoints.
///
/// Only `origin` is read; other fields are ignored.
#[derive(Debug, Deserialize)]
struct EchoResponse {
    origin: String,
}

/// Extracts the `origin` field from an echo service response body.
///
/// The value is returned verbatim, so a proxied request yields the whole
/// comma-separated chain.
///
/// # Errors
///
/// Returns [`NetworkError::Malformed`] if the body is not JSON or lacks a
/// string `origin`.
pub fn parse_origin(body: &[u8]) -> Result<String, NetworkError> {
    serde_json::from_slice::<EchoResponse>(body)
        .map(|echo| echo.origin)
        .map_err(|e| NetworkError::Malformed(e.to_string()))
}

/// Issues one GET to `url` and returns the reported origin address.
///
/// # Errors
///
/// Returns [`NetworkError::Request`] on transport failure,
/// [`NetworkError::Status`] on a non-2xx response, and
/// [`NetworkError::Malformed`] if the body cannot be parsed.
pub async fn fetch_public_address<H: HttpClient>(
    client: &H,
    url: &url::Url,
) -> Result<String, NetworkError> {
    let response = client.request(HttpRequest::get(url.clone())).await?;

    if !response.is_success() {
        return Err(NetworkError::Status(response.status));
    }

    parse_origin(&response.body)
}
