//! Obscura configuration
//!
//! Config files: `obscura.yaml`, `obscura.yml`, or `obscura.json`.
//! Searched in `./` then the user config directory (`~/.config/obscura/` on
//! Linux). Environment variables override file values.

pub mod loader;
pub mod schema;

pub use loader::{config_dir, discover_and_load, find_config_file, load_explicit, load_from, LoadReport};
pub use schema::{IgnoredOverride, LoggingConfig, ObscuraConfig};

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported config format: .{0}")]
    UnsupportedFormat(String),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
