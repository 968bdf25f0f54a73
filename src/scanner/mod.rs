//! Sweep engine - concurrent host reachability scanning.
//!
//! This module holds the core of the tool: the probe abstraction, the
//! per-host scanner, and the coordinator that fans host scans out over a
//! bounded worker pool and folds the outcomes into a [`SweepReport`].

pub mod host;
pub mod probe;
pub mod sweep;

use crate::types::{Port, PortList, SweepId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

pub use host::HostScanner;
pub use probe::{Probe, TcpProbe, DEFAULT_PROBE_TIMEOUT};
pub use sweep::{SweepConfig, SweepCoordinator};

/// Result for a single responsive host.
///
/// Only produced when at least one port accepted a connection; hosts with
/// zero open ports leave no trace in a sweep. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostResult {
    /// The host's address.
    pub ip: IpAddr,
    /// Open ports, in the order they were probed.
    pub open_ports: Vec<Port>,
    /// When the host's scan completed (UTC).
    pub timestamp: DateTime<Utc>,
}

impl HostResult {
    /// Create a result for a responsive host, stamped with the current time.
    pub fn new(ip: IpAddr, open_ports: Vec<Port>) -> Self {
        Self {
            ip,
            open_ports,
            timestamp: Utc::now(),
        }
    }

    /// The open ports as a comma-separated display string.
    pub fn ports_display(&self) -> String {
        let parts: Vec<String> = self.open_ports.iter().map(|p| p.to_string()).collect();
        parts.join(", ")
    }
}

/// Complete results of one sweep.
///
/// Hosts are ordered by completion time, not by address; callers needing
/// address order sort downstream. Owned by the coordinator while the
/// sweep runs and moved to the caller on completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    /// Unique identifier for this sweep.
    pub id: SweepId,
    /// The swept network range, normalized.
    pub network: String,
    /// Ports probed on every host.
    pub ports: Vec<Port>,
    /// When the sweep was started.
    pub started_at: DateTime<Utc>,
    /// When the sweep completed.
    pub completed_at: DateTime<Utc>,
    /// Total sweep duration in milliseconds.
    pub duration_ms: u64,
    /// Number of host addresses scanned.
    pub hosts_scanned: u64,
    /// Number of hosts with at least one open port.
    pub responsive_hosts: usize,
    /// Per-host results, in completion order.
    pub hosts: Vec<HostResult>,
}

impl SweepReport {
    /// Create an empty report for a sweep that is starting now.
    pub fn new(network: impl Into<String>, ports: &PortList) -> Self {
        Self {
            id: SweepId::new(),
            network: network.into(),
            ports: ports.as_slice().to_vec(),
            started_at: Utc::now(),
            completed_at: Utc::now(),
            duration_ms: 0,
            hosts_scanned: 0,
            responsive_hosts: 0,
            hosts: Vec::new(),
        }
    }

    /// Finalize the report with the collected results.
    pub fn finalize(mut self, hosts: Vec<HostResult>, hosts_scanned: u64, duration_ms: u64) -> Self {
        self.completed_at = Utc::now();
        self.duration_ms = duration_ms;
        self.hosts_scanned = hosts_scanned;
        self.responsive_hosts = hosts.len();
        self.hosts = hosts;
        self
    }

    /// Get a short summary of the sweep.
    pub fn summary(&self) -> String {
        format!(
            "{} - {} responsive of {} hosts [{:.2}s]",
            self.network,
            self.responsive_hosts,
            self.hosts_scanned,
            self.duration_ms as f64 / 1000.0
        )
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::probe::Probe;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::net::{IpAddr, SocketAddr};
    use std::time::Duration;

    /// Deterministic probe backed by a fixed set of open endpoints.
    pub struct MockProbe {
        open: HashSet<SocketAddr>,
    }

    impl MockProbe {
        pub fn new(open: &[(IpAddr, u16)]) -> Self {
            Self {
                open: open
                    .iter()
                    .map(|&(ip, port)| SocketAddr::new(ip, port))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl Probe for MockProbe {
        async fn probe(&self, addr: SocketAddr, _timeout: Duration) -> bool {
            self.open.contains(&addr)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_host_result_ports_display() {
        let result = HostResult::new(
            IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)),
            vec![Port::new(80).unwrap(), Port::new(443).unwrap()],
        );
        assert_eq!(result.ports_display(), "80, 443");
    }

    #[test]
    fn test_report_finalize() {
        let ports: PortList = "80,443".parse().unwrap();
        let report = SweepReport::new("10.0.0.0/24", &ports);
        let hosts = vec![HostResult::new(
            IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7)),
            vec![Port::new(80).unwrap()],
        )];

        let report = report.finalize(hosts, 254, 1500);
        assert_eq!(report.hosts_scanned, 254);
        assert_eq!(report.responsive_hosts, 1);
        assert_eq!(report.duration_ms, 1500);
    }

    #[test]
    fn test_report_summary() {
        let ports: PortList = "80".parse().unwrap();
        let report = SweepReport::new("192.168.1.0/24", &ports).finalize(Vec::new(), 254, 2000);
        assert_eq!(
            report.summary(),
            "192.168.1.0/24 - 0 responsive of 254 hosts [2.00s]"
        );
    }

    #[test]
    fn test_report_serialization() {
        let ports: PortList = "80,443".parse().unwrap();
        let report = SweepReport::new("10.0.0.0/30", &ports);
        let json = serde_json::to_string(&report).unwrap();
        let parsed: SweepReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.network, report.network);
        assert_eq!(parsed.id, report.id);
    }
}
