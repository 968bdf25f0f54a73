//! Sweep coordination.
//!
//! The coordinator owns the worker pool for a sweep: it dispatches one
//! host-scan task per enumerated address, bounded by a semaphore, and
//! folds completed outcomes into the report as they arrive. Completion
//! order is arbitrary; the report preserves it.

use crate::scanner::host::HostScanner;
use crate::scanner::probe::{Probe, DEFAULT_PROBE_TIMEOUT};
use crate::scanner::{HostResult, SweepReport};
use crate::types::PortList;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

/// Upper bound on queued host tasks. Deliberately high: the semaphore
/// controls the actual concurrency, this only caps how far ahead of the
/// workers the enumerator may run.
const TASK_BUFFER: usize = 1000;

/// Configuration for a sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Display form of the swept range, recorded in the report.
    pub network: String,
    /// Ports probed on every host.
    pub ports: PortList,
    /// Maximum number of hosts scanned in parallel.
    pub workers: usize,
    /// Per-port connection timeout.
    pub timeout: Duration,
    /// Drive a progress bar while sweeping.
    pub verbose: bool,
}

impl SweepConfig {
    /// Default worker pool size.
    pub const DEFAULT_WORKERS: usize = 25;

    /// Create a configuration with default ports, workers and timeout.
    pub fn new(network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            ports: PortList::default_web(),
            workers: Self::DEFAULT_WORKERS,
            timeout: DEFAULT_PROBE_TIMEOUT,
            verbose: false,
        }
    }

    /// Set the port list.
    pub fn with_ports(mut self, ports: PortList) -> Self {
        self.ports = ports;
        self
    }

    /// Set the worker pool size.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Set the per-port timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable progress output.
    pub fn with_verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}

/// Callback invoked once per responsive host, as its scan completes.
pub type HostCallback = Box<dyn Fn(&HostResult) + Send + Sync>;

/// Coordinates a sweep over many hosts with bounded concurrency.
///
/// State flows strictly forward: enumerate, dispatch, drain, finalize.
/// There are no retries and no error states; per-task faults are absorbed
/// where they happen and never promoted to the coordinator.
pub struct SweepCoordinator<P> {
    probe: Arc<P>,
    config: SweepConfig,
    on_host: Option<HostCallback>,
}

impl<P: Probe + 'static> SweepCoordinator<P> {
    /// Create a new coordinator.
    pub fn new(probe: P, config: SweepConfig) -> Self {
        Self {
            probe: Arc::new(probe),
            config,
            on_host: None,
        }
    }

    /// Register a callback fired once per responsive host.
    ///
    /// The callback runs on the coordinator's draining task, so it needs
    /// no internal synchronization.
    pub fn on_host(mut self, callback: impl Fn(&HostResult) + Send + Sync + 'static) -> Self {
        self.on_host = Some(Box::new(callback));
        self
    }

    /// Run the sweep to completion and return the finalized report.
    ///
    /// Consumes the coordinator and the address sequence: every address
    /// is scanned exactly once. Dropping the returned future (e.g. on
    /// interrupt) stops dispatching; in-flight tasks are abandoned.
    pub async fn run<I>(self, hosts: I) -> SweepReport
    where
        I: Iterator<Item = IpAddr>,
    {
        let start = Instant::now();
        let report = SweepReport::new(self.config.network.clone(), &self.config.ports);

        info!(
            network = %self.config.network,
            ports = %self.config.ports,
            workers = self.config.workers,
            "starting sweep"
        );

        let progress = if self.config.verbose {
            Some(make_progress_bar(hosts.size_hint().1))
        } else {
            None
        };

        let semaphore = Arc::new(Semaphore::new(self.config.workers));
        let scanner = Arc::new(HostScanner::new(
            Arc::clone(&self.probe),
            self.config.ports.clone(),
            self.config.timeout,
        ));

        let mut completions = stream::iter(hosts)
            .map(|ip| {
                let semaphore = Arc::clone(&semaphore);
                let scanner = Arc::clone(&scanner);

                // Each host scan runs in its own task so a fault there
                // cannot take down the sweep.
                tokio::spawn(async move {
                    // The semaphore is never closed.
                    let _permit = semaphore.acquire_owned().await.unwrap();
                    scanner.scan(ip).await
                })
            })
            .buffer_unordered(TASK_BUFFER);

        let mut found: Vec<HostResult> = Vec::new();
        let mut scanned: u64 = 0;

        while let Some(joined) = completions.next().await {
            scanned += 1;
            if let Some(pb) = &progress {
                pb.inc(1);
            }

            match joined {
                Ok(Some(host)) => {
                    debug!(ip = %host.ip, ports = %host.ports_display(), "host responded");
                    if let Some(pb) = &progress {
                        pb.set_message(format!("{} responded", host.ip));
                    }
                    if let Some(callback) = &self.on_host {
                        callback(&host);
                    }
                    found.push(host);
                }
                // Nothing open on this host; it is not recorded.
                Ok(None) => {}
                Err(err) => {
                    // The task panicked or was cancelled: that host is
                    // forfeited, the sweep keeps going.
                    warn!(error = %err, "host scan task failed");
                }
            }
        }

        if let Some(pb) = progress {
            pb.finish_with_message("sweep complete");
        }

        let report = report.finalize(found, scanned, start.elapsed().as_millis() as u64);
        info!(
            responsive = report.responsive_hosts,
            scanned = report.hosts_scanned,
            duration_ms = report.duration_ms,
            "sweep complete"
        );
        report
    }
}

fn make_progress_bar(total: Option<usize>) -> ProgressBar {
    let pb = match total {
        Some(total) => ProgressBar::new(total as u64),
        None => ProgressBar::new_spinner(),
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
            )
            .unwrap()
            .progress_chars("=>-"),
    );
    pb
}
