//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `skitter scan <range>` - Sweep a network range
//! - `skitter history` - View sweep history
//! - `skitter export <sweep-id>` - Export saved sweep results

mod export;
mod history;
mod scan;

pub use export::ExportCommand;
pub use history::HistoryCommand;
pub use scan::ScanCommand;

use clap::{Parser, Subcommand};

/// skitter - a concurrent LAN reachability sweeper.
///
/// skitter enumerates the hosts of a CIDR range, probes a configurable
/// port list on each of them with bounded concurrency, and reports which
/// hosts answered. Finished sweeps can be saved and exported.
#[derive(Parser, Debug)]
#[command(name = "skitter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A concurrent LAN reachability sweeper", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (sweep progress)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sweep a network range for responsive hosts
    #[command(alias = "s")]
    Scan(ScanCommand),

    /// View sweep history
    #[command(alias = "h")]
    History(HistoryCommand),

    /// Export saved sweep results
    #[command(alias = "e")]
    Export(ExportCommand),
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Plain
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_scan_defaults() {
        let cli = Cli::try_parse_from(["skitter", "scan", "192.168.1.0/24"]).unwrap();
        match cli.command {
            Commands::Scan(cmd) => {
                assert_eq!(cmd.range, "192.168.1.0/24");
                assert!(cmd.ports.is_none());
                assert!(cmd.workers.is_none());
                assert_eq!(cmd.output, OutputFormat::Plain);
                assert!(cmd.export.is_none());
            }
            _ => panic!("expected scan subcommand"),
        }
    }

    #[test]
    fn test_export_flag_without_value() {
        let cli = Cli::try_parse_from(["skitter", "scan", "10.0.0.0/30", "--export"]).unwrap();
        match cli.command {
            Commands::Scan(cmd) => assert_eq!(cmd.export, Some(None)),
            _ => panic!("expected scan subcommand"),
        }
    }
}
