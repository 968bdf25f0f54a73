//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::scanner::{HostResult, SweepReport};
use console::style;
use std::io::{self, Write};

/// Print a report in human-readable plain text format.
pub fn print_plain(report: &SweepReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style("═══════════════════════════════════════════════════════════════").cyan()
    )?;
    writeln!(
        out,
        "                    {} Sweep Results",
        style("skitter").cyan().bold()
    )?;
    writeln!(
        out,
        "{}",
        style("═══════════════════════════════════════════════════════════════").cyan()
    )?;
    writeln!(out)?;

    writeln!(out, "  {} {}", style("Network:").bold(), report.network)?;
    writeln!(
        out,
        "  {} {}",
        style("Ports:").bold(),
        report
            .ports
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(",")
    )?;
    writeln!(
        out,
        "  {} {}",
        style("Sweep ID:").bold(),
        style(report.id.short()).dim()
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "  {} {} hosts scanned in {:.2}s",
        style("Statistics:").bold(),
        report.hosts_scanned,
        report.duration_ms as f64 / 1000.0
    )?;
    writeln!(
        out,
        "               {} responsive",
        style(report.responsive_hosts).green().bold()
    )?;
    writeln!(out)?;

    if report.hosts.is_empty() {
        writeln!(out, "  {}", style("No responsive hosts found.").dim())?;
    } else {
        writeln!(
            out,
            "  {}",
            style("───────────────────────────────────────────────────────────────").dim()
        )?;
        writeln!(
            out,
            "  {:<17}  {:<24}  {}",
            style("HOST").bold(),
            style("OPEN PORTS").bold(),
            style("SEEN (UTC)").bold()
        )?;
        writeln!(
            out,
            "  {}",
            style("───────────────────────────────────────────────────────────────").dim()
        )?;

        for host in &report.hosts {
            writeln!(
                out,
                "  {:<17}  {:<24}  {}",
                style(host.ip).green(),
                host.ports_display(),
                style(host.timestamp.format("%H:%M:%S")).dim()
            )?;
        }

        writeln!(
            out,
            "  {}",
            style("───────────────────────────────────────────────────────────────").dim()
        )?;
    }

    writeln!(out)?;

    Ok(())
}

/// Print a sweep header before scanning begins.
pub fn print_sweep_header(network: &str, ports: &str, hosts: u128, workers: usize) {
    println!();
    println!(
        "{} {} v{}",
        style("Starting").cyan(),
        style("skitter").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "{} Network: {}",
        style("•").dim(),
        style(network).white().bold()
    );
    println!("{} Ports: {}", style("•").dim(), style(ports).yellow());
    println!(
        "{} Sweeping {} hosts with {} workers...",
        style("•").dim(),
        style(hosts).white().bold(),
        workers
    );
    println!();
}

/// Print a single responsive host as it is discovered.
pub fn print_host_up(host: &HostResult) {
    println!(
        "{} {:<17} open: {}",
        style("✓").green().bold(),
        style(host.ip).green(),
        host.ports_display()
    );
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}
