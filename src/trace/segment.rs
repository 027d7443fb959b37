//! Region segmentation: flood-fill the raster into maximal 4-connected
//! regions of identical colour.

use std::collections::{BTreeMap, HashSet};

use crate::types::{Colour, Point, Raster};

/// The four cardinal neighbour offsets (right, down, left, up).
pub(crate) const ADJACENT: [Point; 4] = [
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(0, -1),
];

/// A maximal 4-connected set of same-colour pixels.
///
/// Built once by [`segment`] and immutable afterwards; the boundary
/// extractor consumes it by membership lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    colour: Colour,
    pixels: HashSet<Point>,
}

impl Region {
    pub(crate) fn new(colour: Colour, pixels: HashSet<Point>) -> Self {
        Self { colour, pixels }
    }

    /// The shared colour of every member pixel.
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Number of member pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Membership test for a pixel coordinate.
    pub fn contains(&self, pixel: Point) -> bool {
        self.pixels.contains(&pixel)
    }

    /// Iterate over member pixels (unordered).
    pub fn pixels(&self) -> impl Iterator<Item = &Point> {
        self.pixels.iter()
    }
}

/// Partition the raster into per-colour region lists.
///
/// Pixels are scanned row-major; each unvisited pixel seeds a depth-first
/// flood fill over 4-connected neighbours of the exact same colour. When
/// `opaque_only` is set, fully transparent pixels are skipped entirely:
/// they are never visited and contribute no regions.
///
/// Every non-skipped pixel ends up in exactly one region, no region is
/// empty, and disconnected same-colour components stay separate. Colour
/// keys are ordered and regions appear in scan-discovery order, so the
/// partition is deterministic. The visited plane is local to this call.
pub fn segment(raster: &Raster, opaque_only: bool) -> BTreeMap<Colour, Vec<Region>> {
    let mut regions: BTreeMap<Colour, Vec<Region>> = BTreeMap::new();
    if raster.is_empty() {
        return regions;
    }

    let width = raster.width() as i32;
    let height = raster.height() as i32;
    let mut visited = vec![false; width as usize * height as usize];
    let index = |p: Point| p.y as usize * width as usize + p.x as usize;

    for y in 0..height {
        for x in 0..width {
            let here = Point::new(x, y);
            if visited[index(here)] {
                continue;
            }
            let Some(colour) = raster.get(x, y) else {
                continue;
            };
            if opaque_only && colour.is_transparent() {
                continue;
            }

            let mut pixels = HashSet::new();
            let mut queue = vec![here];
            visited[index(here)] = true;
            while let Some(current) = queue.pop() {
                for offset in ADJACENT {
                    let neighbour = current + offset;
                    let Some(neighbour_colour) = raster.get(neighbour.x, neighbour.y) else {
                        continue;
                    };
                    if visited[index(neighbour)] || neighbour_colour != colour {
                        continue;
                    }
                    visited[index(neighbour)] = true;
                    queue.push(neighbour);
                }
                pixels.insert(current);
            }

            regions
                .entry(colour)
                .or_default()
                .push(Region::new(colour, pixels));
        }
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(side: u32) -> Raster {
        Raster::from_fn(side, side, |x, y| {
            if (x + y) % 2 == 0 {
                Colour::BLACK
            } else {
                Colour::WHITE
            }
        })
    }

    #[test]
    fn test_single_colour_is_one_region() {
        let raster = Raster::from_fn(3, 2, |_, _| Colour::rgb(10, 20, 30));
        let regions = segment(&raster, false);

        assert_eq!(regions.len(), 1);
        let list = &regions[&Colour::rgb(10, 20, 30)];
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].len(), 6);
    }

    #[test]
    fn test_partition_covers_every_pixel_once() {
        let raster = Raster::from_fn(5, 4, |x, y| {
            if x < 2 {
                Colour::rgb(200, 0, 0)
            } else if y < 2 {
                Colour::rgb(0, 200, 0)
            } else {
                Colour::rgb(0, 0, 200)
            }
        });
        let regions = segment(&raster, false);

        let mut seen = HashSet::new();
        let mut total = 0;
        for list in regions.values() {
            for region in list {
                assert!(!region.is_empty());
                total += region.len();
                for &p in region.pixels() {
                    assert!(seen.insert(p), "pixel {p} assigned to two regions");
                }
            }
        }
        assert_eq!(total, 20);
    }

    #[test]
    fn test_regions_are_4_connected() {
        let regions = segment(&checkerboard(4), false);
        for list in regions.values() {
            for region in list {
                // every pixel of a multi-pixel region has a member neighbour
                if region.len() == 1 {
                    continue;
                }
                for &p in region.pixels() {
                    let connected = ADJACENT.iter().any(|&o| region.contains(p + o));
                    assert!(connected, "pixel {p} disconnected from its region");
                }
            }
        }
    }

    #[test]
    fn test_checkerboard_keeps_diagonals_separate() {
        // 2x2 checkerboard: 4 single-pixel regions, two per colour
        let regions = segment(&checkerboard(2), false);
        assert_eq!(regions.len(), 2);
        for list in regions.values() {
            assert_eq!(list.len(), 2);
            for region in list {
                assert_eq!(region.len(), 1);
            }
        }
    }

    #[test]
    fn test_same_colour_disconnected_components_not_merged() {
        // red | blue | red in one row
        let red = Colour::rgb(255, 0, 0);
        let blue = Colour::rgb(0, 0, 255);
        let raster = Raster::from_fn(3, 1, |x, _| if x == 1 { blue } else { red });

        let regions = segment(&raster, false);
        assert_eq!(regions[&red].len(), 2);
        assert_eq!(regions[&blue].len(), 1);
    }

    #[test]
    fn test_opaque_only_skips_transparent_pixels() {
        let raster = Raster::from_fn(2, 1, |x, _| {
            if x == 0 {
                Colour::rgb(9, 9, 9)
            } else {
                Colour::TRANSPARENT
            }
        });

        let regions = segment(&raster, true);
        assert_eq!(regions.len(), 1);
        assert!(!regions.contains_key(&Colour::TRANSPARENT));

        // without the flag the transparent pixel forms its own region
        let regions = segment(&raster, false);
        assert_eq!(regions.len(), 2);
    }

    #[test]
    fn test_fully_transparent_raster_with_opaque_only_is_empty() {
        let raster = Raster::from_fn(5, 5, |_, _| Colour::TRANSPARENT);
        assert!(segment(&raster, true).is_empty());
    }

    #[test]
    fn test_zero_dimension_raster_is_empty() {
        let raster = Raster::from_fn(0, 0, |_, _| Colour::BLACK);
        assert!(segment(&raster, false).is_empty());
    }
}
