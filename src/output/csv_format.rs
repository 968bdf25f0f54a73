//! CSV output formatting.

use crate::scanner::SweepReport;
use std::io::{self, Write};

/// Write a report as CSV, one row per responsive host.
pub fn write_csv<W: Write>(report: &SweepReport, writer: W) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["host", "open_ports", "timestamp"])?;

    for host in &report.hosts {
        let ports = host
            .open_ports
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(";");

        wtr.write_record([
            &host.ip.to_string(),
            &ports,
            &host.timestamp.to_rfc3339(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Print a report in CSV format.
pub fn print_csv(report: &SweepReport) -> io::Result<()> {
    let stdout = io::stdout();
    write_csv(report, stdout.lock())
}
