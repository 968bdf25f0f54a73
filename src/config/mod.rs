//! Configuration management for skitter.
//!
//! Provides XDG-compliant application paths and user-adjustable default
//! settings.

mod settings;

pub use settings::{AppSettings, Paths};
