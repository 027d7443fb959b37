//! Boundary extraction: the set of directed unit edges where a region
//! meets anything that is not itself.

use std::collections::BTreeSet;

use crate::types::{Edge, Point};

use super::Region;

/// For each cardinal direction, the side of the unit pixel square facing
/// it, as (start, end) corner offsets. The winding of the four sides is
/// what gives stitched loops their consistent orientation.
const SIDES: [(Point, (Point, Point)); 4] = [
    (Point::new(-1, 0), (Point::new(0, 0), Point::new(0, 1))),
    (Point::new(0, 1), (Point::new(0, 1), Point::new(1, 1))),
    (Point::new(1, 0), (Point::new(1, 1), Point::new(1, 0))),
    (Point::new(0, -1), (Point::new(1, 0), Point::new(0, 0))),
];

/// Compute the boundary edge set of a region.
///
/// A pixel side is a boundary edge unless the facing neighbour belongs to
/// the same region. Out-of-raster neighbours are never members, so border
/// pixels contribute their outward sides automatically, and hole-facing
/// sides are included just like exterior ones.
///
/// The result is duplicate-free and ordered, which makes the downstream
/// stitching deterministic.
pub fn extract_edges(region: &Region) -> BTreeSet<Edge> {
    let mut edges = BTreeSet::new();
    for &pixel in region.pixels() {
        for (offset, (start, end)) in SIDES {
            if region.contains(pixel + offset) {
                continue;
            }
            edges.insert(Edge::new(pixel + start, pixel + end));
        }
    }
    edges
}
