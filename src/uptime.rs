//! Host uptime reporting.
//!
//! Uptime is informational only: a failed kernel query degrades the
//! notification text to [`UNKNOWN_UPTIME`] instead of failing the poll cycle.

/// Text reported when the kernel cannot tell how long the host has been up.
pub const UNKNOWN_UPTIME: &str = "-1";

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Source of the time elapsed since boot.
pub trait UptimeSource: Send + Sync {
    /// Seconds since boot, or `None` if the query failed.
    fn seconds_since_boot(&self) -> Option<u64>;
}

/// Kernel uptime through `sysinfo`, which picks the query for the target OS
/// (`/proc/uptime` on Linux, `kern.boottime` on the BSDs and macOS,
/// `GetTickCount64` on Windows).
///
/// `sysinfo` reports a failed query as zero, which is never a real uptime by
/// the time this process runs, so zero maps to `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUptime;

impl UptimeSource for SystemUptime {
    fn seconds_since_boot(&self) -> Option<u64> {
        match sysinfo::System::uptime() {
            0 => None,
            secs => Some(secs),
        }
    }
}

/// Formats seconds as `Uptime: D days, H hours, M minutes, S seconds.`
///
/// Units are never singularised.
///
/// ```
/// use hostwatch::uptime::format_uptime;
///
/// assert_eq!(
///     format_uptime(273_121),
///     "Uptime: 3 days, 3 hours, 52 minutes, 1 seconds."
/// );
/// ```
#[must_use]
pub fn format_uptime(secs: u64) -> String {
    let days = secs / SECS_PER_DAY;
    let hours = secs % SECS_PER_DAY / SECS_PER_HOUR;
    let minutes = secs % SECS_PER_HOUR / SECS_PER_MINUTE;
    let seconds = secs % SECS_PER_MINUTE;
    format!("Uptime: {days} days, {hours} hours, {minutes} minutes, {seconds} seconds.")
}

/// Reads `source` and renders the result for a notification.
///
/// Never fails: a failed query yields [`UNKNOWN_UPTIME`].
#[must_use]
pub fn describe_uptime(source: &impl UptimeSource) -> String {
    source.seconds_since_boot().map_or_else(
        || {
            tracing::warn!("Kernel uptime query failed, reporting unknown uptime");
            UNKNOWN_UPTIME.to_string()
        },
        format_uptime,
    )
}
