//! Validated configuration derived from CLI arguments.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;

/// Fully validated configuration ready for use by the application.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Path of the state file
    pub history_file: PathBuf,

    /// Webhook receiving change notifications
    pub webhook_url: Url,

    /// Identifier placed before every message
    pub message_prefix: String,

    /// Echo service queried for the public address
    pub public_address_url: Url,

    /// Delay between poll cycles
    pub poll_interval: Duration,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    /// The webhook URL embeds a secret token, so only its host is shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ history_file: {}, webhook_host: {}, prefix: {:?}, poll_interval: {}s }}",
            self.history_file.display(),
            self.webhook_url.host_str().unwrap_or("<none>"),
            self.message_prefix,
            self.poll_interval.as_secs(),
        )
    }
}

impl ValidatedConfig {
    /// Validates CLI arguments and fills in built-in settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the webhook URL is not a valid http(s) URL.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Ok(Self {
            history_file: cli.history_file.clone(),
            webhook_url: parse_http_url(&cli.discord_channel)?,
            message_prefix: cli.message_prefix.clone(),
            public_address_url: parse_http_url(defaults::PUBLIC_ADDRESS_URL)?,
            poll_interval: defaults::poll_interval(),
            verbose: cli.verbose,
        })
    }
}

fn parse_http_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError::UnsupportedScheme {
            url: raw.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}
