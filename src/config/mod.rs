//! Configuration layer.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Built-in constants ([`defaults`])
//!
//! The three CLI flags are all required; the poll interval and the public
//! address service are fixed.

mod cli;
pub mod defaults;
mod error;
mod validated;


pub use cli::Cli;
pub use error::ConfigError;
pub use validated::ValidatedConfig;
