//! Address range parsing and host enumeration.
//!
//! An [`AddressRange`] is a validated CIDR block. Parsing is non-strict:
//! a descriptor with host bits set (`192.168.1.77/24`) is masked to its
//! containing network rather than rejected. [`Hosts`] enumerates the
//! usable addresses of the range lazily, in ascending order, exactly once.

use ipnetwork::{IpNetwork, IpNetworkIterator, Ipv4Network, Ipv6Network};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// Error type for range parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RangeError {
    #[error("invalid network range: {0}")]
    InvalidCidr(String),
}

/// A validated network range (address + prefix length).
///
/// The stored network is always normalized: whatever host bits the input
/// carried are masked away, so `Display` shows the containing network.
/// Constructed once per sweep and consumed by [`AddressRange::hosts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    network: IpNetwork,
}

impl AddressRange {
    /// Parse a range descriptor.
    ///
    /// Accepts CIDR notation (`10.0.0.0/24`) or a bare address, which is
    /// treated as a full-length prefix (`10.0.0.5` == `10.0.0.5/32`).
    pub fn parse(s: &str) -> Result<Self, RangeError> {
        let s = s.trim();
        let network: IpNetwork = s
            .parse()
            .map_err(|_| RangeError::InvalidCidr(s.to_string()))?;

        // Mask off host bits so the range is the containing network.
        let network = match network {
            IpNetwork::V4(net) => Ipv4Network::new(net.network(), net.prefix())
                .map(IpNetwork::V4)
                .map_err(|_| RangeError::InvalidCidr(s.to_string()))?,
            IpNetwork::V6(net) => Ipv6Network::new(net.network(), net.prefix())
                .map(IpNetwork::V6)
                .map_err(|_| RangeError::InvalidCidr(s.to_string()))?,
        };

        Ok(Self { network })
    }

    /// The network address of the range.
    pub fn network_addr(&self) -> IpAddr {
        self.network.network()
    }

    /// The prefix length of the range.
    pub fn prefix(&self) -> u8 {
        self.network.prefix()
    }

    /// Number of usable host addresses in the range.
    ///
    /// IPv4 prefixes shorter than /31 lose their network and broadcast
    /// addresses; /31 and /32 keep every address. IPv6 has no broadcast
    /// address, so the full prefix counts.
    pub fn host_count(&self) -> u128 {
        match self.network {
            IpNetwork::V4(net) => {
                let size = 1u128 << (32 - u32::from(net.prefix()));
                if net.prefix() < 31 {
                    size.saturating_sub(2)
                } else {
                    size
                }
            }
            IpNetwork::V6(net) => {
                let prefix = u32::from(net.prefix());
                if prefix == 0 {
                    u128::MAX
                } else if prefix >= 128 {
                    1
                } else {
                    1u128 << (128 - prefix)
                }
            }
        }
    }

    /// Enumerate the usable host addresses of the range.
    ///
    /// The iterator is lazy and single-pass: it consumes the range and
    /// yields addresses in ascending numeric order without materializing
    /// the block, so large prefixes cost nothing up front.
    pub fn hosts(self) -> Hosts {
        // Excluded endpoints only exist for IPv4 below /31.
        let skip = match self.network {
            IpNetwork::V4(net) if net.prefix() < 31 => Some((
                IpAddr::V4(net.network()),
                IpAddr::V4(net.broadcast()),
            )),
            _ => None,
        };

        Hosts {
            iter: self.network.iter(),
            skip,
            remaining: self.host_count(),
        }
    }
}

impl FromStr for AddressRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.network)
    }
}

/// Lazy, forward-only iterator over the usable hosts of an [`AddressRange`].
pub struct Hosts {
    iter: IpNetworkIterator,
    skip: Option<(IpAddr, IpAddr)>,
    remaining: u128,
}

impl Iterator for Hosts {
    type Item = IpAddr;

    fn next(&mut self) -> Option<IpAddr> {
        for addr in self.iter.by_ref() {
            if let Some((network, broadcast)) = self.skip {
                if addr == network || addr == broadcast {
                    continue;
                }
            }
            self.remaining = self.remaining.saturating_sub(1);
            return Some(addr);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_parse_cidr() {
        let range = AddressRange::parse("192.168.1.0/24").unwrap();
        assert_eq!(range.prefix(), 24);
        assert_eq!(
            range.network_addr(),
            IpAddr::V4(Ipv4Addr::new(192, 168, 1, 0))
        );
    }

    #[test]
    fn test_parse_masks_host_bits() {
        // Non-strict: host bits are masked, not rejected.
        let range = AddressRange::parse("192.168.1.77/24").unwrap();
        assert_eq!(
            range.network_addr(),
            IpAddr::V4(Ipv4Addr::new(192, 168, 1, 0))
        );
        assert_eq!(range.to_string(), "192.168.1.0/24");
    }

    #[test]
    fn test_parse_bare_address() {
        let range = AddressRange::parse("10.0.0.5").unwrap();
        assert_eq!(range.prefix(), 32);
        assert_eq!(range.host_count(), 1);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(AddressRange::parse("not-an-ip").is_err());
        assert!(AddressRange::parse("192.168.1.0/33").is_err());
        assert!(AddressRange::parse("").is_err());
    }

    #[test]
    fn test_host_count_excludes_endpoints() {
        assert_eq!(AddressRange::parse("10.0.0.0/24").unwrap().host_count(), 254);
        assert_eq!(AddressRange::parse("10.0.0.0/30").unwrap().host_count(), 2);
    }

    #[test]
    fn test_host_count_edge_prefixes() {
        // /31 and /32 have no distinct network/broadcast addresses.
        assert_eq!(AddressRange::parse("10.0.0.0/31").unwrap().host_count(), 2);
        assert_eq!(AddressRange::parse("10.0.0.5/32").unwrap().host_count(), 1);
    }

    #[test]
    fn test_hosts_skips_network_and_broadcast() {
        let hosts: Vec<IpAddr> = AddressRange::parse("192.168.50.0/30")
            .unwrap()
            .hosts()
            .collect();
        assert_eq!(
            hosts,
            vec![
                IpAddr::V4(Ipv4Addr::new(192, 168, 50, 1)),
                IpAddr::V4(Ipv4Addr::new(192, 168, 50, 2)),
            ]
        );
    }

    #[test]
    fn test_hosts_slash_32_yields_single_address() {
        let hosts: Vec<IpAddr> = AddressRange::parse("10.0.0.5/32").unwrap().hosts().collect();
        assert_eq!(hosts, vec![IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5))]);
    }

    #[test]
    fn test_hosts_slash_31_yields_both_addresses() {
        let hosts: Vec<IpAddr> = AddressRange::parse("10.0.0.0/31").unwrap().hosts().collect();
        assert_eq!(
            hosts,
            vec![
                IpAddr::V4(Ipv4Addr::new(10, 0, 0, 0)),
                IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)),
            ]
        );
    }

    #[test]
    fn test_hosts_count_matches_prefix() {
        let range = AddressRange::parse("172.16.0.0/24").unwrap();
        assert_eq!(range.hosts().count(), 254);
    }

    #[test]
    fn test_hosts_ascending_order() {
        let hosts: Vec<IpAddr> = AddressRange::parse("10.1.2.0/28").unwrap().hosts().collect();
        let mut sorted = hosts.clone();
        sorted.sort();
        assert_eq!(hosts, sorted);
        assert_eq!(hosts.len(), 14);
    }

    #[test]
    fn test_hosts_size_hint_is_exact() {
        let mut hosts = AddressRange::parse("10.0.0.0/29").unwrap().hosts();
        assert_eq!(hosts.size_hint(), (6, Some(6)));
        hosts.next();
        assert_eq!(hosts.size_hint(), (5, Some(5)));
    }
}
