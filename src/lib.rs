//! hostwatch: host identity monitor
//!
//! A library for sampling a machine's local and public addresses,
//! detecting changes against the last reported state, and announcing
//! those changes to a chat webhook.

pub mod config;
pub mod monitor;
pub mod network;
pub mod state;
pub mod time;
pub mod uptime;
pub mod webhook;
