//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::Parser;

/// hostwatch: host identity monitor
///
/// Polls this machine's local and public addresses and posts a message to
/// a chat webhook whenever they change.
#[derive(Debug, Parser)]
#[command(name = "hostwatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// State file remembering the last reported addresses
    #[arg(long = "history-file", value_name = "PATH")]
    pub history_file: PathBuf,

    /// Discord channel webhook URL
    #[arg(long = "discord-channel", value_name = "URL")]
    pub discord_channel: String,

    /// Identifier placed before every message (e.g. the host name)
    #[arg(long = "message-prefix", value_name = "TEXT")]
    pub message_prefix: String,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
