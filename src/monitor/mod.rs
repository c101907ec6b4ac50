//! Change-detection loop.
//!
//! This module provides:
//! - The polling monitor ([`HostMonitor`]) and its cycle result ([`PollOutcome`])
//! - Per-cycle error handling ([`MonitorError`])

mod error;
mod host;


pub use error::MonitorError;
pub use host::{HostMonitor, PollOutcome};
