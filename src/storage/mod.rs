//! Sweep result persistence.
//!
//! Provides JSON-based storage for finished sweep reports.

mod json_store;

pub use json_store::{export_to_file, ReportStore};
