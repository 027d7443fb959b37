//! Project configuration.
//!
//! An optional `pxtrace.yaml` next to the inputs (or in the working
//! directory) provides defaults for the trace command; explicit CLI flags
//! always win.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TraceError};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "pxtrace.yaml";

/// Defaults for the trace command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output directory for generated SVG files.
    pub output: Option<PathBuf>,
    /// Emit one rect per pixel instead of tracing regions.
    pub pixels: bool,
    /// Keep every lattice point (disable collinear merging).
    pub keep_all_points: bool,
    /// Trace fully transparent pixels too.
    pub include_transparent: bool,
}

impl Config {
    /// Load `pxtrace.yaml` from `dir`, if present.
    pub fn load(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(None);
        }
        let source = fs::read_to_string(&path).map_err(|e| TraceError::Io {
            path: path.clone(),
            message: format!("Failed to read config: {}", e),
        })?;
        let config = serde_yaml::from_str(&source).map_err(|e| TraceError::Config {
            message: format!("Invalid {}: {}", CONFIG_FILENAME, e),
            help: Some("Run 'pxtrace init --force' to regenerate a default config".to_string()),
        })?;
        Ok(Some(config))
    }
}
