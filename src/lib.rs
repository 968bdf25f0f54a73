//! # skitter - A Concurrent LAN Reachability Sweeper
//!
//! skitter discovers responsive hosts on a network: it enumerates every
//! usable address of a CIDR range, probes a configurable port list on
//! each of them with bounded concurrency, and reports which hosts
//! accepted a connection.
//!
//! ## Features
//!
//! - **Range Sweeping**: CIDR ranges with lazy host enumeration
//! - **Bounded Concurrency**: Fixed-size worker pool, async I/O
//! - **Incremental Results**: Per-host callback as hosts respond
//! - **Result Persistence**: Sweep history with JSON export
//! - **Multiple Output Formats**: Plain text, JSON, and CSV
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use skitter::scanner::{SweepConfig, SweepCoordinator, TcpProbe};
//! use skitter::types::AddressRange;
//!
//! #[tokio::main]
//! async fn main() {
//!     let range = AddressRange::parse("192.168.1.0/24").unwrap();
//!     let config = SweepConfig::new(range.to_string());
//!
//!     let report = SweepCoordinator::new(TcpProbe, config)
//!         .on_host(|host| println!("{} is up", host.ip))
//!         .run(range.hosts())
//!         .await;
//!
//!     println!("{} responsive hosts", report.responsive_hosts);
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`types`] - Core type definitions with newtype patterns for type safety
//! - [`scanner`] - The sweep engine: probe, host scanner and coordinator
//! - [`config`] - Application paths and settings
//! - [`storage`] - Sweep report persistence
//! - [`error`] - Error types
//! - [`output`] - Output formatting utilities

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, ConfigError, StorageError};
pub use scanner::{HostResult, Probe, SweepConfig, SweepCoordinator, SweepReport, TcpProbe};
pub use types::{AddressRange, Port, PortList, SweepId};
