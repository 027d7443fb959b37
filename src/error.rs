use miette::Diagnostic;
use thiserror::Error;

use crate::types::{Colour, Point};

/// Main error type for pxtrace operations
#[derive(Error, Diagnostic, Debug)]
pub enum TraceError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pxtrace::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {}: {message}", path.display())]
    #[diagnostic(code(pxtrace::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Could not decode {}: {message}", path.display())]
    #[diagnostic(code(pxtrace::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(pxtrace::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A degenerate edge was normalized. Boundary edges are always unit
    /// grid segments, so this signals a malformed edge set.
    #[error("Cannot normalize degenerate edge {start} -> {end}")]
    #[diagnostic(code(pxtrace::geometry))]
    InvalidVector { start: Point, end: Point },

    /// The stitcher found no connecting edge for a non-empty remainder:
    /// the edge set does not form closed simple curves.
    #[error("No connecting edge found at {at} while tracing colour {colour} ({remaining} edge(s) remaining)")]
    #[diagnostic(
        code(pxtrace::boundary),
        help("the boundary edge set is inconsistent; this indicates a segmentation bug")
    )]
    BrokenBoundary {
        colour: Colour,
        at: Point,
        remaining: usize,
    },

    #[error("Watch error: {message}")]
    #[diagnostic(code(pxtrace::watch))]
    Watch { message: String },
}

pub type Result<T> = std::result::Result<T, TraceError>;
