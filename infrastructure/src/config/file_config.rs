//! Configuration file schema.
//!
//! Everything is optional in the TOML; defaults below apply to whatever a
//! file doesn't set.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub store: StoreConfig,
    pub output: OutputConfig,
}

/// `[store]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Override for the projects file location. When unset, the platform
    /// data directory is used.
    pub path: Option<PathBuf>,
}

/// `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Colored terminal output
    pub color: bool,
    /// Default sort for `list` when no --sort is given
    /// (deadline | created | title | priority)
    pub default_sort: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            default_sort: "deadline".to_string(),
        }
    }
}
