//! Init command implementation.
//!
//! Generates a commented `pxtrace.yaml` with the default settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::CONFIG_FILENAME;
use crate::error::{Result, TraceError};
use crate::output::{display_path, Printer};

/// Initialize a pxtrace project by generating a pxtrace.yaml config
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing pxtrace.yaml
    #[arg(long)]
    pub force: bool,
}

/// Default config, written manually so the comments survive.
const DEFAULT_CONFIG: &str = "\
# pxtrace configuration. CLI flags override these defaults.

# Output directory for generated SVG files.
output: dist

# Emit one rect per pixel instead of tracing regions.
pixels: false

# Keep every boundary point (disable collinear merging).
keep_all_points: false

# Trace fully transparent pixels too.
include_transparent: false
";

pub fn run(args: InitArgs) -> Result<()> {
    let printer = Printer::new();
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(TraceError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    fs::write(&config_path, DEFAULT_CONFIG).map_err(|e| TraceError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.status("Created", &display_path(&config_path));
    Ok(())
}
