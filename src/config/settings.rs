//! Application settings and paths.
//!
//! Manages XDG-compliant paths for configuration and data. Paths and
//! settings are resolved once by the CLI layer and passed down
//! explicitly; nothing here is process-global.

use crate::error::{ConfigError, ConfigResult};
use crate::types::PortList;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application directory paths following the XDG Base Directory
/// Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/skitter)
    pub config_dir: PathBuf,
    /// Data directory (~/.local/share/skitter)
    pub data_dir: PathBuf,
}

impl Paths {
    /// Resolve paths from the XDG directories, creating them if needed.
    pub fn resolve() -> ConfigResult<Self> {
        let project =
            ProjectDirs::from("rs", "skitter", "skitter").ok_or(ConfigError::DirectoryNotFound)?;

        let paths = Self {
            config_dir: project.config_dir().to_path_buf(),
            data_dir: project.data_dir().to_path_buf(),
        };

        fs::create_dir_all(&paths.config_dir)?;
        fs::create_dir_all(&paths.data_dir)?;

        Ok(paths)
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    /// Get the path to the sweep report storage directory.
    pub fn reports_dir(&self) -> PathBuf {
        self.data_dir.join("sweeps")
    }
}

/// Application-wide settings.
///
/// Every field has a default, so a missing or partial settings file is
/// never an error. Command-line flags override these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Default port spec probed on every host.
    pub default_ports: String,
    /// Default worker pool size.
    pub default_workers: usize,
    /// Default per-port timeout in milliseconds.
    pub default_timeout_ms: u64,
    /// Record finished sweeps in the report store.
    pub auto_save: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_ports: PortList::DEFAULT_SPEC.to_string(),
            default_workers: 25,
            default_timeout_ms: 500,
            auto_save: true,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location.
    pub fn load(paths: &Paths) -> ConfigResult<Self> {
        let file = paths.settings_file();

        if !file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Save settings to the default location.
    pub fn save(&self, paths: &Paths) -> ConfigResult<()> {
        let file = paths.settings_file();

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&file, content).map_err(|e| ConfigError::WriteFailed {
            path: file,
            reason: e.to_string(),
        })
    }
}
