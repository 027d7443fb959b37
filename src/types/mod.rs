//! Core domain types for pxtrace.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values
//! - `Point` / `Edge` / `Loop` - lattice geometry for boundary tracing
//! - `Raster` - decoded row-major pixel grids

mod colour;
mod geometry;
mod raster;

pub use colour::Colour;
pub use geometry::{Edge, Loop, Point};
pub use raster::Raster;
