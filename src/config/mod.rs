//! Configuration module
//!
//! Handles settings for the command-line tool. The wire primitives in
//! [`crate::core`] take no configuration.

mod settings;

pub use settings::{ConfigError, OutputFormat, WireConfig};

use directories::ProjectDirs;
use std::path::PathBuf;

/// Get the application configuration directory
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "fieldbus-wire", "FieldbusWire")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the default configuration file path
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}
