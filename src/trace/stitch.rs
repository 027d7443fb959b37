//! Contour stitching: join an unordered boundary edge set into closed,
//! consistently oriented loops.

use std::collections::BTreeSet;

use crate::error::{Result, TraceError};
use crate::types::{Colour, Edge, Loop, Point};

/// The cyclic reference frame of cardinal directions.
const FRAME: [Point; 4] = [
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, 0),
];

/// Candidate offsets from the current heading's frame index, in priority
/// order: turn one way, continue straight, turn the other way. Straight
/// ahead is offset 0, which is where collinear merging applies.
const SCAN: [usize; 3] = [3, 0, 1];

/// Stitch a boundary edge set into closed loops, draining it.
///
/// Each loop starts from the smallest remaining edge and repeatedly probes
/// the three candidate directions from the current endpoint, consuming the
/// first edge found. With `keep_every_point` unset, a straight-ahead
/// continuation extends the current edge instead of appending, and a
/// collinear seam between the closing and the opening edge is merged when
/// the loop closes.
///
/// Every edge is consumed exactly once. If no candidate direction yields
/// an edge the set does not form closed simple curves and stitching aborts
/// with [`TraceError::BrokenBoundary`]; `colour` is carried purely for
/// that error's context.
pub fn stitch(
    colour: Colour,
    mut edges: BTreeSet<Edge>,
    keep_every_point: bool,
) -> Result<Vec<Loop>> {
    let mut loops = Vec::new();

    while let Some(seed) = edges.pop_first() {
        let mut piece = vec![seed];
        loop {
            let last = piece[piece.len() - 1];
            let heading = last.direction()?;
            let slot = FRAME
                .iter()
                .position(|d| *d == heading)
                .ok_or(TraceError::InvalidVector {
                    start: last.start,
                    end: last.end,
                })?;

            let mut advanced = false;
            for delta in SCAN {
                let direction = FRAME[(slot + delta) % 4];
                let candidate = Edge::new(last.end, last.end + direction);
                if edges.remove(&candidate) {
                    if delta == 0 && !keep_every_point {
                        let n = piece.len();
                        piece[n - 1].end = candidate.end;
                    } else {
                        piece.push(candidate);
                    }
                    advanced = true;
                    break;
                }
            }
            if !advanced {
                return Err(TraceError::BrokenBoundary {
                    colour,
                    at: last.end,
                    remaining: edges.len() + piece.len(),
                });
            }

            let first = piece[0];
            let tail = piece[piece.len() - 1];
            if first.start == tail.end {
                // Closed. Merge a collinear seam so the start point does
                // not split a straight run in two.
                if !keep_every_point
                    && piece.len() > 1
                    && first.direction()? == tail.direction()?
                {
                    let opener = piece.remove(0);
                    let n = piece.len();
                    piece[n - 1].end = opener.end;
                }
                loops.push(Loop::new(piece));
                break;
            }
        }
    }

    Ok(loops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{extract_edges, segment};
    use crate::types::Raster;

    fn boundary_of(raster: &Raster, colour: Colour) -> BTreeSet<Edge> {
        let regions = segment(raster, false);
        extract_edges(&regions[&colour][0])
    }

    /// Twice the signed area of a loop (shoelace over its vertices).
    fn signed_area2(lp: &Loop) -> i64 {
        let points = lp.points();
        let mut sum = 0i64;
        for (i, p) in points.iter().enumerate() {
            let q = points[(i + 1) % points.len()];
            sum += i64::from(p.x) * i64::from(q.y) - i64::from(q.x) * i64::from(p.y);
        }
        sum
    }

    fn assert_closed(lp: &Loop) {
        let edges = lp.edges();
        for pair in edges.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(edges[edges.len() - 1].end, edges[0].start);
    }

    #[test]
    fn test_unit_square_stitches_to_4_points() {
        let raster = Raster::from_fn(1, 1, |_, _| Colour::BLACK);
        let loops = stitch(Colour::BLACK, boundary_of(&raster, Colour::BLACK), false).unwrap();

        assert_eq!(loops.len(), 1);
        assert_eq!(loops[0].len(), 4);
        assert_closed(&loops[0]);
    }

    #[test]
    fn test_2x1_rectangle_merges_collinear_runs() {
        let raster = Raster::from_fn(2, 1, |_, _| Colour::BLACK);
        let edges = boundary_of(&raster, Colour::BLACK);
        assert_eq!(edges.len(), 6);

        let loops = stitch(Colour::BLACK, edges, false).unwrap();
        assert_eq!(loops.len(), 1);
        // the two-unit top and bottom runs collapse to single edges
        assert_eq!(loops[0].len(), 4);
        assert_closed(&loops[0]);

        let mut points = loops[0].points();
        points.sort();
        assert_eq!(
            points,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(2, 0),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_2x1_rectangle_keep_every_point() {
        let raster = Raster::from_fn(2, 1, |_, _| Colour::BLACK);
        let loops = stitch(Colour::BLACK, boundary_of(&raster, Colour::BLACK), true).unwrap();

        assert_eq!(loops.len(), 1);
        assert_eq!(loops[0].len(), 6);
        assert_closed(&loops[0]);
    }

    #[test]
    fn test_merged_loop_has_no_consecutive_collinear_edges() {
        // an L-shaped region exercises turns in both directions
        let raster = Raster::from_fn(3, 3, |x, y| {
            if x == 0 || y == 2 {
                Colour::BLACK
            } else {
                Colour::WHITE
            }
        });
        let loops = stitch(Colour::BLACK, boundary_of(&raster, Colour::BLACK), false).unwrap();

        assert_eq!(loops.len(), 1);
        let edges = loops[0].edges();
        for i in 0..edges.len() {
            let a = edges[i].direction().unwrap();
            let b = edges[(i + 1) % edges.len()].direction().unwrap();
            assert_ne!(a, b, "collinear edges {i} and {} left unmerged", i + 1);
        }
    }

    #[test]
    fn test_ring_produces_outer_and_hole_loops() {
        let a = Colour::rgb(1, 1, 1);
        let b = Colour::rgb(2, 2, 2);
        let raster = Raster::from_fn(3, 3, |x, y| if x == 1 && y == 1 { b } else { a });
        let loops = stitch(a, boundary_of(&raster, a), false).unwrap();
        assert_eq!(loops.len(), 2);
        for lp in &loops {
            assert_closed(lp);
            assert_eq!(lp.len(), 4);
        }

        // opposite winding: outer area 9, hole area 1, opposite signs
        let areas: Vec<i64> = loops.iter().map(signed_area2).collect();
        assert_eq!(areas.iter().map(|a| a.abs()).sum::<i64>(), 20);
        assert!(areas[0].signum() != areas[1].signum());
    }

    #[test]
    fn test_every_edge_consumed_without_merging() {
        let a = Colour::rgb(1, 1, 1);
        let b = Colour::rgb(2, 2, 2);
        let raster = Raster::from_fn(3, 3, |x, y| if x == 1 && y == 1 { b } else { a });
        let edges = boundary_of(&raster, a);
        let total = edges.len();

        let loops = stitch(a, edges, true).unwrap();
        let stitched: usize = loops.iter().map(Loop::len).sum();
        assert_eq!(stitched, total);
    }

    #[test]
    fn test_broken_boundary_is_reported_not_guessed() {
        let raster = Raster::from_fn(1, 1, |_, _| Colour::BLACK);
        let mut edges = boundary_of(&raster, Colour::BLACK);
        // removing one side leaves an open curve
        edges.pop_last().unwrap();

        let err = stitch(Colour::BLACK, edges, false).unwrap_err();
        match err {
            TraceError::BrokenBoundary {
                colour, remaining, ..
            } => {
                assert_eq!(colour, Colour::BLACK);
                assert!(remaining > 0);
            }
            other => panic!("expected BrokenBoundary, got {other:?}"),
        }
    }

    #[test]
    fn test_stitching_is_deterministic() {
        let raster = Raster::from_fn(4, 3, |x, _| {
            if x < 2 {
                Colour::BLACK
            } else {
                Colour::WHITE
            }
        });
        let first = stitch(Colour::BLACK, boundary_of(&raster, Colour::BLACK), false).unwrap();
        let second = stitch(Colour::BLACK, boundary_of(&raster, Colour::BLACK), false).unwrap();
        assert_eq!(first, second);
    }
}
