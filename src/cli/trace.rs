//! Trace command implementation.
//!
//! Converts raster image files (or directories of them) into SVG files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use clap::Args;
use notify::{RecursiveMode, Watcher};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Result, TraceError};
use crate::output::{display_path, plural, Printer};
use crate::svg::{render, RenderOptions};
use crate::types::Raster;

/// File extensions accepted when expanding directory inputs.
const RASTER_EXTENSIONS: [&str; 5] = ["png", "gif", "bmp", "jpg", "jpeg"];

/// Trace raster images into SVG files
#[derive(Args, Debug)]
pub struct TraceArgs {
    /// Input image files or directories to scan
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output directory (default: dist, or the config file's `output`)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Emit one rect per pixel instead of tracing regions
    #[arg(long)]
    pub pixels: bool,

    /// Keep every boundary point (disable collinear merging)
    #[arg(long)]
    pub keep_all_points: bool,

    /// Trace fully transparent pixels too
    #[arg(long)]
    pub include_transparent: bool,

    /// Keep running and re-trace inputs when they change
    #[arg(long)]
    pub watch: bool,
}

pub fn run(args: TraceArgs) -> Result<()> {
    let printer = Printer::new();
    let config = Config::load(Path::new("."))?.unwrap_or_default();

    let options = RenderOptions {
        contiguous: !(args.pixels || config.pixels),
        opaque_only: !(args.include_transparent || config.include_transparent),
        keep_every_point: args.keep_all_points || config.keep_all_points,
    };
    let output = args
        .output
        .clone()
        .or(config.output)
        .unwrap_or_else(|| PathBuf::from("dist"));

    let inputs = collect_inputs(&args.files);
    if inputs.is_empty() {
        return Err(TraceError::Config {
            message: "no raster inputs found".to_string(),
            help: Some("pass image files or directories containing them".to_string()),
        });
    }

    ensure_output_dir(&output)?;
    for input in &inputs {
        convert(input, &output, &options, &printer)?;
    }
    println!(
        "Traced {} to {}",
        plural(inputs.len(), "image", "images"),
        output.display()
    );

    if args.watch {
        watch(&args.files, &output, &options, &printer)?;
    }

    Ok(())
}

/// Expand files and directories into a sorted list of raster paths.
///
/// Explicit file arguments are taken as-is; directories are walked
/// recursively and filtered by extension.
fn collect_inputs(files: &[PathBuf]) -> Vec<PathBuf> {
    let mut inputs = Vec::new();
    for file in files {
        if file.is_dir() {
            for entry in WalkDir::new(file)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                if path.is_file() && is_raster(path) {
                    inputs.push(path.to_path_buf());
                }
            }
        } else {
            inputs.push(file.clone());
        }
    }
    inputs.sort();
    inputs.dedup();
    inputs
}

fn is_raster(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            RASTER_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

fn ensure_output_dir(output: &Path) -> Result<()> {
    if !output.exists() {
        fs::create_dir_all(output).map_err(|e| TraceError::Io {
            path: output.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    Ok(())
}

/// Trace one raster file and write the SVG next to its stem in `output`.
fn convert(path: &Path, output: &Path, options: &RenderOptions, printer: &Printer) -> Result<()> {
    let raster = Raster::open(path)?;
    let svg = render(&raster, options)?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let target = output.join(format!("{stem}.svg"));

    fs::write(&target, svg).map_err(|e| TraceError::Io {
        path: target.clone(),
        message: format!("Failed to write SVG: {}", e),
    })?;

    printer.status(
        "Tracing",
        &format!(
            "{} ({}x{}) -> {}",
            display_path(path),
            raster.width(),
            raster.height(),
            display_path(&target)
        ),
    );
    Ok(())
}

/// Re-trace inputs as they change. Runs until the process is interrupted.
fn watch(
    roots: &[PathBuf],
    output: &Path,
    options: &RenderOptions,
    printer: &Printer,
) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).map_err(watch_error)?;
    for root in roots {
        watcher
            .watch(root, RecursiveMode::Recursive)
            .map_err(watch_error)?;
    }
    printer.info("Watching", "inputs for changes (Ctrl-C to stop)");

    for event in rx {
        let event = match event {
            Ok(event) => event,
            Err(e) => {
                printer.warning("Watch", &e.to_string());
                continue;
            }
        };
        if !event.kind.is_create() && !event.kind.is_modify() {
            continue;
        }
        for path in event.paths.iter().filter(|p| is_raster(p)) {
            if let Err(e) = convert(path, output, options, printer) {
                printer.warning("Skipping", &format!("{}: {}", display_path(path), e));
            }
        }
    }

    Ok(())
}

fn watch_error(e: notify::Error) -> TraceError {
    TraceError::Watch {
        message: e.to_string(),
    }
}
