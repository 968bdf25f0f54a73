//! Scan subcommand implementation.
//!
//! Handles the `skitter scan <range>` command: resolves settings and
//! flags, runs the sweep, then saves, exports and prints the report.

use crate::cli::OutputFormat;
use crate::config::{AppSettings, Paths};
use crate::error::{CliError, CliResult};
use crate::output;
use crate::scanner::{SweepConfig, SweepCoordinator, TcpProbe};
use crate::storage::{self, ReportStore};
use crate::types::{AddressRange, PortList};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Sweep a network range for responsive hosts.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Network range to sweep, in CIDR notation
    ///
    /// Examples:
    ///   192.168.1.0/24     Whole subnet
    ///   10.0.0.5           Single host (/32)
    ///
    /// Host bits are masked to the containing network, so
    /// 192.168.1.77/24 sweeps 192.168.1.0/24.
    #[arg(value_name = "RANGE")]
    pub range: String,

    /// Ports to probe on every host (e.g. "22,80,443" or "8000-8010")
    #[arg(short, long)]
    pub ports: Option<String>,

    /// Maximum number of hosts swept in parallel
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Per-port connection timeout in milliseconds
    #[arg(short = 't', long)]
    pub timeout: Option<u64>,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,

    /// Export the report to a JSON file (timestamped name if none given)
    #[arg(short, long, value_name = "FILE", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,

    /// Don't record the sweep in history
    #[arg(long)]
    pub no_save: bool,
}

impl ScanCommand {
    /// Execute the scan command.
    pub async fn execute(&self, verbose: bool, quiet: bool) -> CliResult<()> {
        let paths = Paths::resolve()?;
        let settings = AppSettings::load(&paths)?;

        let ports: PortList = self
            .ports
            .clone()
            .unwrap_or_else(|| settings.default_ports.clone())
            .parse()?;
        if ports.is_empty() {
            return Err(CliError::Other("no valid ports specified".to_string()));
        }

        // An invalid range aborts here, before any probing starts.
        let range = AddressRange::parse(&self.range)?;

        let workers = self.workers.unwrap_or(settings.default_workers);
        let timeout = Duration::from_millis(self.timeout.unwrap_or(settings.default_timeout_ms));

        let announce = !quiet && self.output == OutputFormat::Plain;
        if announce {
            output::print_sweep_header(
                &range.to_string(),
                &ports.to_string(),
                range.host_count(),
                workers,
            );
        }

        let config = SweepConfig::new(range.to_string())
            .with_ports(ports)
            .with_workers(workers)
            .with_timeout(timeout);
        let config = if verbose {
            config.with_verbose()
        } else {
            config
        };

        let mut coordinator = SweepCoordinator::new(TcpProbe, config);
        if announce && !verbose {
            coordinator = coordinator.on_host(output::print_host_up);
        }

        // An interrupt stops dispatching new host tasks; in-flight
        // probes are abandoned and no partial report is produced.
        let report = tokio::select! {
            report = coordinator.run(range.hosts()) => report,
            _ = tokio::signal::ctrl_c() => {
                output::print_warning("interrupted, sweep aborted");
                return Ok(());
            }
        };

        if !self.no_save && settings.auto_save {
            let store = ReportStore::open_default(&paths)?;
            store.save(&report)?;

            if announce {
                output::print_info(&format!("Sweep saved as {}", report.id.short()));
            }
        }

        if let Some(dest) = &self.export {
            let path = dest.clone().unwrap_or_else(default_export_path);
            storage::export_to_file(&report, &path)?;

            if !quiet {
                output::print_success(&format!("Results exported to {}", path.display()));
            }
        }

        output::print_results(&report, self.output)?;

        Ok(())
    }
}

/// Timestamped filename for `--export` without an explicit path.
fn default_export_path() -> PathBuf {
    PathBuf::from(format!(
        "skitter_{}.json",
        Utc::now().format("%Y%m%d_%H%M%S")
    ))
}
