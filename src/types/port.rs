//! Port types with validation and parsing.
//!
//! The `Port` newtype ensures values are always valid port numbers
//! (1-65535). `PortList` holds the ports a sweep probes on every host.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated network port number (1-65535).
///
/// Using a newtype prevents accidental misuse of raw u16 values
/// and ensures port numbers are always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Port(u16);

impl Port {
    /// Minimum valid port number.
    pub const MIN: u16 = 1;
    /// Maximum valid port number.
    pub const MAX: u16 = 65535;

    /// Create a new Port from a u16, returning None if invalid.
    #[inline]
    pub const fn new(port: u16) -> Option<Self> {
        if port >= Self::MIN {
            Some(Self(port))
        } else {
            None
        }
    }

    /// Get the raw port number.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for Port {
    type Error = PortError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(PortError::OutOfRange(value))
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

/// Error type for port parsing and validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PortError {
    #[error("port {0} is out of valid range (1-65535)")]
    OutOfRange(u16),
    #[error("invalid port number: {0}")]
    InvalidFormat(String),
    #[error("invalid port range: start ({0}) > end ({1})")]
    InvalidRange(u16, u16),
    #[error("empty port specification")]
    Empty,
}

/// The ordered list of ports probed on every host of a sweep.
///
/// Parsed from comma-separated specs like `"22,80,443"` or
/// `"22,8000-8010"`. Input order is preserved and duplicates are kept:
/// probing follows the list verbatim, so `"80,80"` probes port 80 twice.
/// Shared read-only across all probes for the duration of a sweep.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortList {
    ports: Vec<Port>,
}

impl PortList {
    /// The spec probed when the caller supplies none.
    pub const DEFAULT_SPEC: &'static str = "80,443";

    /// The default web-facing port list (80, 443).
    pub fn default_web() -> Self {
        Self {
            ports: vec![Port(80), Port(443)],
        }
    }

    /// Iterate over the ports in list order.
    pub fn iter(&self) -> impl Iterator<Item = Port> + '_ {
        self.ports.iter().copied()
    }

    /// The ports as a slice, in list order.
    pub fn as_slice(&self) -> &[Port] {
        &self.ports
    }

    /// Number of ports in the list (duplicates counted).
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

impl FromStr for PortList {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PortError::Empty);
        }

        let mut ports = Vec::new();

        for part in s.split(',') {
            let part = part.trim();
            if part.contains('-') {
                let bounds: Vec<&str> = part.split('-').collect();
                if bounds.len() != 2 {
                    return Err(PortError::InvalidFormat(part.to_string()));
                }

                let start: u16 = bounds[0]
                    .trim()
                    .parse()
                    .map_err(|_| PortError::InvalidFormat(bounds[0].to_string()))?;
                let end: u16 = bounds[1]
                    .trim()
                    .parse()
                    .map_err(|_| PortError::InvalidFormat(bounds[1].to_string()))?;

                if start > end {
                    return Err(PortError::InvalidRange(start, end));
                }
                for p in start..=end {
                    ports.push(Port::new(p).ok_or(PortError::OutOfRange(p))?);
                }
            } else {
                let port: u16 = part
                    .parse()
                    .map_err(|_| PortError::InvalidFormat(part.to_string()))?;
                ports.push(Port::new(port).ok_or(PortError::OutOfRange(port))?);
            }
        }

        Ok(Self { ports })
    }
}

impl fmt::Display for PortList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.ports.iter().map(|p| p.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_validation() {
        assert!(Port::new(0).is_none());
        assert!(Port::new(1).is_some());
        assert!(Port::new(80).is_some());
        assert!(Port::new(65535).is_some());
    }

    #[test]
    fn test_default_web_ports() {
        let list = PortList::default_web();
        let ports: Vec<u16> = list.iter().map(Port::as_u16).collect();
        assert_eq!(ports, vec![80, 443]);
    }

    #[test]
    fn test_parse_preserves_order() {
        let list: PortList = "21,22,23".parse().unwrap();
        let ports: Vec<u16> = list.iter().map(Port::as_u16).collect();
        assert_eq!(ports, vec![21, 22, 23]);

        let list: PortList = "443,80,22".parse().unwrap();
        let ports: Vec<u16> = list.iter().map(Port::as_u16).collect();
        assert_eq!(ports, vec![443, 80, 22]);
    }

    #[test]
    fn test_parse_preserves_duplicates() {
        let list: PortList = "80,80".parse().unwrap();
        let ports: Vec<u16> = list.iter().map(Port::as_u16).collect();
        assert_eq!(ports, vec![80, 80]);
    }

    #[test]
    fn test_parse_range() {
        let list: PortList = "22,8000-8002".parse().unwrap();
        let ports: Vec<u16> = list.iter().map(Port::as_u16).collect();
        assert_eq!(ports, vec![22, 8000, 8001, 8002]);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<PortList>().is_err());
        assert!("abc".parse::<PortList>().is_err());
        assert!("0".parse::<PortList>().is_err());
        assert!("70000".parse::<PortList>().is_err());
        assert!("100-50".parse::<PortList>().is_err());
        assert!("1-2-3".parse::<PortList>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let list: PortList = "21,22,23".parse().unwrap();
        assert_eq!(list.to_string(), "21,22,23");
    }
}
