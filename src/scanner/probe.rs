//! Port probing.
//!
//! A probe is a single bounded-time TCP connect attempt. The outcome is a
//! plain boolean: the system deliberately does not distinguish a closed
//! port from a filtered one or from a timeout, so every failure mode
//! collapses to `false`.

use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Default per-port connection timeout.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// Trait for single-port reachability probes.
///
/// Abstracting the probe lets the sweep machinery run against a
/// deterministic implementation in tests instead of the real network.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Attempt one connection to `addr`, bounded by `timeout`.
    ///
    /// Returns `true` iff the connection completed before the deadline.
    async fn probe(&self, addr: SocketAddr, timeout: Duration) -> bool;
}

/// TCP connect probe.
///
/// Uses the operating system's socket API via `TcpStream::connect`; no
/// special privileges required. Each call owns its socket exclusively and
/// the stream is dropped before returning on every path, so no descriptor
/// outlives the probe even under high concurrency.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpProbe;

#[async_trait]
impl Probe for TcpProbe {
    async fn probe(&self, addr: SocketAddr, limit: Duration) -> bool {
        match timeout(limit, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => {
                drop(stream);
                true
            }
            // Refused, unreachable, resource exhaustion or deadline
            // exceeded: all indistinguishable from "closed" here.
            Ok(Err(_)) | Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_probe_open_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let probe = TcpProbe;
        assert!(probe.probe(addr, Duration::from_millis(500)).await);
    }

    #[tokio::test]
    async fn test_probe_closed_port() {
        // Bind to grab a free port, then release it before probing.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let probe = TcpProbe;
        assert!(!probe.probe(addr, Duration::from_millis(500)).await);
    }

    #[tokio::test]
    async fn test_probe_timeout_collapses_to_closed() {
        // RFC 5737 TEST-NET-1 address; nothing routable should answer.
        let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)), 80);

        let probe = TcpProbe;
        assert!(!probe.probe(addr, Duration::from_millis(50)).await);
    }
}
