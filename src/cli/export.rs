//! Export subcommand implementation.
//!
//! Handles the `skitter export <sweep-id>` command for exporting stored
//! sweep results.

use crate::cli::OutputFormat;
use crate::config::Paths;
use crate::error::{CliError, CliResult};
use crate::output;
use crate::scanner::SweepReport;
use crate::storage::ReportStore;
use crate::types::SweepId;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Export stored sweep results.
#[derive(Parser, Debug)]
pub struct ExportCommand {
    /// Sweep ID or prefix to export
    ///
    /// Can be a full UUID or the first few characters (short ID).
    #[arg(value_name = "SWEEP_ID")]
    pub sweep_id: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<PathBuf>,
}

impl ExportCommand {
    /// Execute the export command.
    pub fn execute(&self, quiet: bool) -> CliResult<()> {
        let paths = Paths::resolve()?;
        let store = ReportStore::open_default(&paths)?;

        // Find the sweep by ID or prefix.
        let report = if self.sweep_id.len() < 36 {
            store.find_by_prefix(&self.sweep_id)?
        } else {
            let id: SweepId = self.sweep_id.parse()?;
            store.load(&id)?
        };

        let content = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::Other(e.to_string()))?,
            OutputFormat::Csv => {
                let mut buf = Vec::new();
                output::write_csv(&report, &mut buf)?;
                String::from_utf8(buf).map_err(|e| CliError::Other(e.to_string()))?
            }
            OutputFormat::Plain => generate_plain(&report),
        };

        if let Some(path) = &self.output_file {
            fs::write(path, &content)?;

            if !quiet {
                output::print_success(&format!(
                    "Exported sweep {} to {}",
                    report.id.short(),
                    path.display()
                ));
            }
        } else {
            println!("{}", content);
        }

        Ok(())
    }
}

/// Generate plain text output without terminal styling.
fn generate_plain(report: &SweepReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Sweep Report: {}\n", report.id));
    out.push_str(&format!("{}\n\n", "=".repeat(60)));

    out.push_str(&format!("Network:      {}\n", report.network));
    out.push_str(&format!(
        "Ports:        {}\n",
        report
            .ports
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(",")
    ));
    out.push_str(&format!("Started:      {}\n", report.started_at));
    out.push_str(&format!("Completed:    {}\n", report.completed_at));
    out.push_str(&format!("Duration:     {} ms\n\n", report.duration_ms));

    out.push_str(&format!(
        "Summary: {} hosts scanned, {} responsive\n\n",
        report.hosts_scanned, report.responsive_hosts
    ));

    if !report.hosts.is_empty() {
        out.push_str("Responsive hosts:\n");
        out.push_str(&format!("{}\n", "-".repeat(60)));
        out.push_str(&format!(
            "{:<17}  {:<24}  {}\n",
            "HOST", "OPEN PORTS", "SEEN (UTC)"
        ));
        out.push_str(&format!("{}\n", "-".repeat(60)));

        for host in &report.hosts {
            out.push_str(&format!(
                "{:<17}  {:<24}  {}\n",
                host.ip,
                host.ports_display(),
                host.timestamp.format("%Y-%m-%d %H:%M:%S")
            ));
        }
    }

    out
}
