//! Local interface address discovery.

use std::net::{IpAddr, Ipv4Addr};

use super::NetworkError;

/// One address entry reported for a network interface.
///
/// Interfaces carrying no IPv4 address produce an entry with `ipv4: None`,
/// a placeholder that [`collect_ipv4`] drops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    /// Interface name (e.g. `eth0`, `lo`).
    pub name: String,
    /// IPv4 address, or `None` as a placeholder.
    pub ipv4: Option<Ipv4Addr>,
}

impl InterfaceAddress {
    /// Creates an entry for an interface address.
    #[must_use]
    pub fn new(name: impl Into<String>, ip: IpAddr) -> Self {
        let ipv4 = match ip {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        };
        Self {
            name: name.into(),
            ipv4,
        }
    }
}

/// Enumerates every address of every interface on the host.
///
/// Loopback interfaces are included, as the host reports them.
///
/// # Errors
///
/// Returns [`NetworkError::Interface`] if the platform cannot enumerate interfaces.
pub fn enumerate_interfaces() -> Result<Vec<InterfaceAddress>, NetworkError> {
    let interfaces = if_addrs::get_if_addrs().map_err(NetworkError::Interface)?;

    Ok(interfaces
        .into_iter()
        .map(|iface| {
            let ip = iface.ip();
            InterfaceAddress::new(iface.name, ip)
        })
        .collect())
}

/// Reduces interface entries to sorted IPv4 address strings.
///
/// Placeholders are dropped. Sorting is lexicographic on the textual form
/// (`"10.0.0.10"` sorts before `"10.0.0.5"`), and the same address reported by
/// two interfaces appears twice.
#[must_use]
pub fn collect_ipv4<I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = InterfaceAddress>,
{
    let mut addresses: Vec<String> = entries
        .into_iter()
        .filter_map(|entry| entry.ipv4)
        .map(|ip| ip.to_string())
        .collect();
    addresses.sort();
    addresses
}
