pub mod completions;
pub mod init;
pub mod inspect;
pub mod trace;

use clap::{Parser, Subcommand};

/// pxtrace - Pixel raster to SVG tracer
#[derive(Parser, Debug)]
#[command(name = "pxtrace")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Trace raster images into SVG files
    Trace(trace::TraceArgs),

    /// Report per-colour region statistics for a raster
    Inspect(inspect::InspectArgs),

    /// Initialize a pxtrace project (generates pxtrace.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
