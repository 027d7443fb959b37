//! pxtrace - Pixel raster to SVG tracer
//!
//! A library for converting RGBA rasters into vector shapes: maximal
//! 4-connected regions of identical colour are flood-filled, their
//! boundary edges extracted and stitched into closed loops, and the
//! loops serialized as SVG paths.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod svg;
pub mod trace;
pub mod types;

pub use config::{Config, CONFIG_FILENAME};
pub use error::{Result, TraceError};
pub use svg::{render, render_contiguous, render_pixel_rects, RenderOptions};
pub use trace::{extract_edges, segment, stitch, trace, Layer, Region, Shape, TraceOptions, Tracing};
pub use types::{Colour, Edge, Loop, Point, Raster};
