//! Lattice geometry for boundary tracing.
//!
//! Pixels live on the integer grid; boundary corners live on the lattice
//! one unit larger in each direction. Both are represented as [`Point`].

use std::fmt;
use std::ops::Add;

use crate::error::{Result, TraceError};

/// An integer lattice point (pixel coordinate or pixel-square corner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A directed segment between two corner points.
///
/// Freshly extracted boundary edges are unit segments; the stitcher may
/// extend an edge along its axis when merging collinear runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    /// Create a new directed edge.
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The unit direction of the edge.
    ///
    /// Edges are axis-aligned, so component-wise signum is exact
    /// normalization. A zero-length edge cannot be normalized and is
    /// rejected rather than coerced.
    pub fn direction(&self) -> Result<Point> {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        if dx == 0 && dy == 0 {
            return Err(TraceError::InvalidVector {
                start: self.start,
                end: self.end,
            });
        }
        Ok(Point::new(dx.signum(), dy.signum()))
    }
}

/// A closed sequence of directed edges: each edge starts where the
/// previous one ends, and the last edge ends at the first edge's start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loop {
    edges: Vec<Edge>,
}

impl Loop {
    /// Wrap a closed edge sequence. The stitcher is the only producer.
    pub(crate) fn new(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    /// The edges of the loop in traversal order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges (equivalently, of distinct vertices).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The vertex sequence of the loop: each edge's start point. The
    /// closing point is implicit (equal to the first).
    pub fn points(&self) -> Vec<Point> {
        self.edges.iter().map(|e| e.start).collect()
    }
}
