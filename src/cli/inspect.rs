//! Inspect command implementation.
//!
//! Reports per-colour pixel, region and loop counts for a raster without
//! writing any SVG. Useful for checking what a trace will produce.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::error::{Result, TraceError};
use crate::trace::{extract_edges, segment, stitch};
use crate::types::Raster;

/// Report per-colour region statistics for a raster
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input image file
    pub file: PathBuf,

    /// Emit the report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Count fully transparent pixels too
    #[arg(long)]
    pub include_transparent: bool,
}

/// Statistics for one distinct colour.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ColourStats {
    /// Hex notation (#RRGGBB or #RRGGBBAA).
    pub colour: String,
    pub pixels: usize,
    pub regions: usize,
    pub loops: usize,
}

/// The full inspection report.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Report {
    pub file: String,
    pub width: u32,
    pub height: u32,
    pub colours: Vec<ColourStats>,
}

/// Build the report by running the tracer stages per colour.
pub fn report(file: &PathBuf, raster: &Raster, include_transparent: bool) -> Result<Report> {
    let mut colours = Vec::new();
    for (colour, regions) in segment(raster, !include_transparent) {
        let mut pixels = 0;
        let mut loops = 0;
        for region in &regions {
            pixels += region.len();
            loops += stitch(colour, extract_edges(region), false)?.len();
        }
        colours.push(ColourStats {
            colour: colour.to_string(),
            pixels,
            regions: regions.len(),
            loops,
        });
    }
    Ok(Report {
        file: file.display().to_string(),
        width: raster.width(),
        height: raster.height(),
        colours,
    })
}

pub fn run(args: InspectArgs) -> Result<()> {
    let raster = Raster::open(&args.file)?;
    let report = report(&args.file, &raster, args.include_transparent)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| TraceError::Config {
            message: format!("Failed to serialize report: {}", e),
            help: None,
        })?;
        println!("{json}");
    } else {
        println!("{} ({}x{})", report.file, report.width, report.height);
        for stats in &report.colours {
            println!(
                "  {:<10} pixels={:<6} regions={:<4} loops={}",
                stats.colour, stats.pixels, stats.regions, stats.loops
            );
        }
    }

    Ok(())
}
