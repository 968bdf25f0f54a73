//! Error types for skitter.
//!
//! Uses `thiserror` for ergonomic error definitions. Range and port
//! parse errors live next to their types in [`crate::types`]; the enums
//! here cover storage, configuration and the CLI layer that funnels
//! everything together.

use crate::types::{PortError, RangeError, SweepIdError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors from sweep report storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access storage directory: {0}")]
    DirectoryError(String),

    #[error("failed to save sweep: {0}")]
    SaveFailed(String),

    #[error("failed to load sweep: {0}")]
    LoadFailed(String),

    #[error("sweep not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors from configuration handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a home directory for configuration")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error for CLI command execution.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Port(#[from] PortError),

    #[error(transparent)]
    SweepId(#[from] SweepIdError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
