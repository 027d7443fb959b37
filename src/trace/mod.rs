//! The raster-to-vector tracing pipeline.
//!
//! Data flows strictly forward: raster → per-colour pixel regions →
//! per-region boundary edge sets → closed loops → [`Tracing`]. Each stage
//! owns and consumes its predecessor's output; nothing is shared.

mod boundary;
mod segment;
mod stitch;

pub use boundary::extract_edges;
pub use segment::{segment, Region};
pub use stitch::stitch;

use crate::error::Result;
use crate::types::{Colour, Loop, Raster};

/// Options for the tracing pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceOptions {
    /// Skip fully transparent pixels entirely.
    pub opaque_only: bool,
    /// Keep every lattice point instead of merging collinear runs.
    pub keep_every_point: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            opaque_only: true,
            keep_every_point: false,
        }
    }
}

/// One region's traced boundary: the outer loop plus one loop per
/// interior hole, in stitch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    pub loops: Vec<Loop>,
}

/// All traced shapes of one colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub colour: Colour,
    pub shapes: Vec<Shape>,
}

/// The complete tracing of a raster, grouped by colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tracing {
    pub width: u32,
    pub height: u32,
    pub layers: Vec<Layer>,
}

impl Tracing {
    /// Total number of loops across all layers.
    pub fn loop_count(&self) -> usize {
        self.layers
            .iter()
            .flat_map(|l| &l.shapes)
            .map(|s| s.loops.len())
            .sum()
    }
}

/// Trace a raster into closed per-colour boundary loops.
///
/// A [`TraceError::BrokenBoundary`](crate::error::TraceError::BrokenBoundary)
/// from any region aborts the whole raster; it signals a segmentation bug,
/// not a property of the input image.
pub fn trace(raster: &Raster, options: &TraceOptions) -> Result<Tracing> {
    let mut layers = Vec::new();
    for (colour, regions) in segment(raster, options.opaque_only) {
        let mut shapes = Vec::with_capacity(regions.len());
        for region in &regions {
            let edges = extract_edges(region);
            let loops = stitch(colour, edges, options.keep_every_point)?;
            shapes.push(Shape { loops });
        }
        layers.push(Layer { colour, shapes });
    }
    Ok(Tracing {
        width: raster.width(),
        height: raster.height(),
        layers,
    })
}
