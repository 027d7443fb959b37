//! SVG output for traced rasters.
//!
//! Two renderers share the same document frame: the contiguous mode emits
//! one `<path>` per traced region (hole loops become extra subpaths), and
//! the fallback mode emits one `<rect>` per pixel.

use std::fmt::Write;

use crate::error::Result;
use crate::trace::{trace, Shape, TraceOptions, Tracing};
use crate::types::{Colour, Raster};

/// Options for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Trace contiguous regions into paths; otherwise emit one rect per pixel.
    pub contiguous: bool,
    /// Skip fully transparent pixels entirely.
    pub opaque_only: bool,
    /// Keep every lattice point instead of merging collinear runs.
    pub keep_every_point: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            contiguous: true,
            opaque_only: true,
            keep_every_point: false,
        }
    }
}

/// Render a raster to a complete SVG document.
pub fn render(raster: &Raster, options: &RenderOptions) -> Result<String> {
    if options.contiguous {
        let tracing = trace(
            raster,
            &TraceOptions {
                opaque_only: options.opaque_only,
                keep_every_point: options.keep_every_point,
            },
        )?;
        Ok(render_contiguous(&tracing))
    } else {
        Ok(render_pixel_rects(raster, options.opaque_only))
    }
}

/// Serialize a tracing: one `<path>` per region, one subpath per loop.
pub fn render_contiguous(tracing: &Tracing) -> String {
    let mut out = header(tracing.width, tracing.height);
    for layer in &tracing.layers {
        for shape in &layer.shapes {
            let _ = writeln!(
                out,
                " <path d=\"{}\" style=\"{}\" />",
                path_data(shape),
                style(layer.colour)
            );
        }
    }
    out.push_str(FOOTER);
    out
}

/// The one-rect-per-pixel fallback (no tracing).
pub fn render_pixel_rects(raster: &Raster, opaque_only: bool) -> String {
    let mut out = header(raster.width(), raster.height());
    for y in 0..raster.height() as i32 {
        for x in 0..raster.width() as i32 {
            let Some(colour) = raster.get(x, y) else {
                continue;
            };
            if opaque_only && colour.is_transparent() {
                continue;
            }
            let _ = writeln!(
                out,
                " <rect x=\"{x}\" y=\"{y}\" width=\"1\" height=\"1\" style=\"{}\" />",
                style(colour)
            );
        }
    }
    out.push_str(FOOTER);
    out
}

fn header(width: u32, height: u32) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n\
         <!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\"\n  \
         \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n\
         <svg width=\"{width}\" height=\"{height}\"\n     \
         xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n"
    )
}

const FOOTER: &str = "</svg>\n";

fn style(colour: Colour) -> String {
    format!(
        "fill:{}; fill-opacity:{:.3}; stroke:none;",
        colour.css(),
        colour.opacity()
    )
}

fn path_data(shape: &Shape) -> String {
    let mut subpaths = Vec::with_capacity(shape.loops.len());
    for lp in &shape.loops {
        let mut points = lp.points().into_iter();
        let Some(first) = points.next() else {
            continue;
        };
        let mut d = format!("M {},{}", first.x, first.y);
        for p in points {
            let _ = write!(d, " L {},{}", p.x, p.y);
        }
        d.push_str(" Z");
        subpaths.push(d);
    }
    subpaths.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn empty_document(width: u32, height: u32) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n\
             <!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\"\n  \
             \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n\
             <svg width=\"{width}\" height=\"{height}\"\n     \
             xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n\
             </svg>\n"
        )
    }

    #[test]
    fn test_single_red_pixel_document() {
        let raster = Raster::from_fn(1, 1, |_, _| Colour::rgb(255, 0, 0));
        let svg = render(&raster, &RenderOptions::default()).unwrap();

        let expected = format!(
            "{}{}{}",
            header(1, 1),
            " <path d=\"M 0,0 L 0,1 L 1,1 L 1,0 Z\" \
             style=\"fill:rgb(255,0,0); fill-opacity:1.000; stroke:none;\" />\n",
            FOOTER
        );
        assert_eq!(svg, expected);
    }

    #[test]
    fn test_transparent_raster_is_header_and_footer_only() {
        let raster = Raster::from_fn(5, 5, |_, _| Colour::TRANSPARENT);
        let svg = render(&raster, &RenderOptions::default()).unwrap();
        assert_eq!(svg, empty_document(5, 5));

        let rects = render(
            &raster,
            &RenderOptions {
                contiguous: false,
                ..RenderOptions::default()
            },
        )
        .unwrap();
        assert_eq!(rects, empty_document(5, 5));
    }

    #[test]
    fn test_hole_becomes_second_subpath_of_one_path() {
        let a = Colour::rgb(1, 1, 1);
        let b = Colour::rgb(2, 2, 2);
        let raster = Raster::from_fn(3, 3, |x, y| if x == 1 && y == 1 { b } else { a });
        let svg = render(&raster, &RenderOptions::default()).unwrap();

        let expected = format!(
            "{}{}{}{}",
            header(3, 3),
            " <path d=\"M 0,0 L 0,3 L 3,3 L 3,0 Z M 1,1 L 2,1 L 2,2 L 1,2 Z\" \
             style=\"fill:rgb(1,1,1); fill-opacity:1.000; stroke:none;\" />\n",
            " <path d=\"M 1,1 L 1,2 L 2,2 L 2,1 Z\" \
             style=\"fill:rgb(2,2,2); fill-opacity:1.000; stroke:none;\" />\n",
            FOOTER
        );
        assert_eq!(svg, expected);
    }

    #[test]
    fn test_semi_transparent_opacity_three_decimals() {
        let raster = Raster::from_fn(1, 1, |_, _| Colour::new(0, 0, 0, 128));
        let svg = render(&raster, &RenderOptions::default()).unwrap();
        assert!(svg.contains("fill-opacity:0.502;"));
    }

    #[test]
    fn test_pixel_rect_fallback() {
        let raster = Raster::from_fn(2, 1, |x, _| {
            if x == 0 {
                Colour::rgb(255, 0, 0)
            } else {
                Colour::TRANSPARENT
            }
        });
        let svg = render_pixel_rects(&raster, true);

        let expected = format!(
            "{}{}{}",
            header(2, 1),
            " <rect x=\"0\" y=\"0\" width=\"1\" height=\"1\" \
             style=\"fill:rgb(255,0,0); fill-opacity:1.000; stroke:none;\" />\n",
            FOOTER
        );
        assert_eq!(svg, expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let raster = Raster::from_fn(8, 8, |x, y| {
            Colour::rgb((x * 37 % 3 * 80) as u8, (y * 11 % 2 * 100) as u8, 40)
        });
        let a = render(&raster, &RenderOptions::default()).unwrap();
        let b = render(&raster, &RenderOptions::default()).unwrap();
        assert_eq!(a, b);
    }
}
