//! Per-host scanning.
//!
//! A host scan probes every port of the sweep's port list against one
//! address and reduces the outcomes to a single result: the set of open
//! ports, or nothing at all when the host never answered.

use crate::scanner::probe::Probe;
use crate::scanner::HostResult;
use crate::types::PortList;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

/// Scans all configured ports of a single host.
///
/// Ports are probed strictly in list order, one at a time: the sweep's
/// concurrency budget is spent across hosts, not within one host.
pub struct HostScanner<P> {
    probe: Arc<P>,
    ports: PortList,
    timeout: Duration,
}

impl<P: Probe> HostScanner<P> {
    /// Create a new host scanner.
    pub fn new(probe: Arc<P>, ports: PortList, timeout: Duration) -> Self {
        Self {
            probe,
            ports,
            timeout,
        }
    }

    /// Probe every port against `ip` and reduce to a per-host outcome.
    ///
    /// Returns `None` when no port is open. A responsive host's open
    /// ports appear in probe (list) order, and the completion timestamp
    /// is taken after the last probe finishes.
    pub async fn scan(&self, ip: IpAddr) -> Option<HostResult> {
        let mut open = Vec::new();

        for port in self.ports.iter() {
            let addr = SocketAddr::new(ip, port.as_u16());
            if self.probe.probe(addr, self.timeout).await {
                open.push(port);
            }
        }

        if open.is_empty() {
            None
        } else {
            Some(HostResult::new(ip, open))
        }
    }
}
