//! History subcommand implementation.
//!
//! Handles the `skitter history` command for browsing stored sweeps.

use crate::config::Paths;
use crate::error::CliResult;
use crate::output;
use crate::storage::ReportStore;
use clap::Parser;
use console::style;

/// View and manage sweep history.
#[derive(Parser, Debug)]
pub struct HistoryCommand {
    /// Number of recent sweeps to show
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Show per-host details for each sweep
    #[arg(short, long)]
    pub detailed: bool,

    /// Clear all sweep history
    #[arg(long)]
    pub clear: bool,
}

impl HistoryCommand {
    /// Execute the history command.
    pub fn execute(&self, quiet: bool) -> CliResult<()> {
        let paths = Paths::resolve()?;
        let store = ReportStore::open_default(&paths)?;

        if self.clear {
            let removed = store.clear()?;
            if !quiet {
                output::print_success(&format!("Removed {} stored sweeps", removed));
            }
            return Ok(());
        }

        let reports = store.list_recent(self.count)?;

        if reports.is_empty() {
            if !quiet {
                output::print_info("No stored sweeps.");
            }
            return Ok(());
        }

        for report in &reports {
            println!(
                "{}  {}  {}",
                style(report.id.short()).dim(),
                report.started_at.format("%Y-%m-%d %H:%M:%S"),
                report.summary()
            );

            if self.detailed {
                for host in &report.hosts {
                    println!(
                        "    {:<17} open: {}",
                        style(host.ip).green(),
                        host.ports_display()
                    );
                }
            }
        }

        Ok(())
    }
}
