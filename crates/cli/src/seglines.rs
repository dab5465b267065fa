//! seglines - segment manuscript page images into per-line crops
//!
//! For every page image, loads the matching text-detection heatmap and
//! writes one `lineNNN.jpg` per detected line. With an annotation directory
//! the human-labeled manual path is used instead of the automatic baseline
//! path.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use rayon::prelude::*;
use scriptorium_core::SegParams;
use scriptorium_core::annot::{LabeledPoint, parse_annotations};
use scriptorium_core::high_level::{segment_page, segment_page_manual};
use scriptorium_core::layout::{
    LeaveUnassigned, assign_lines_manual, extract_regions, line_file_name, render_overlay,
};
use tracing::info;

/// Segment manuscript page images into per-line crops.
#[derive(Parser, Debug)]
#[command(name = "seglines")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more paths to page images
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Directory holding heatmaps named like the page images
    #[arg(short = 'H', long = "heatmap-dir")]
    heatmap_dir: PathBuf,

    /// Directory to write per-page line folders into
    #[arg(short = 'o', long = "out-dir", default_value = "lines")]
    out_dir: PathBuf,

    /// Directory holding `<page>_points.txt` / `<page>_labels.txt`
    /// annotation files; enables the manual segmentation path
    #[arg(short = 'a', long = "annot-dir")]
    annot_dir: Option<PathBuf>,

    /// Also write an `overlay.png` review image per page (manual mode)
    #[arg(long, action = ArgAction::SetTrue)]
    overlay: bool,

    /// Heatmap binarization threshold (0-255)
    #[arg(short = 't', long, default_value = "100")]
    threshold: u8,

    /// Maximum distance in pixels from a blended baseline before a region
    /// is treated as an outlier
    #[arg(short = 'D', long = "max-distance", default_value = "20.0")]
    max_distance: f64,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn build_params(args: &Args) -> SegParams {
    SegParams {
        binarize_threshold: args.threshold,
        max_baseline_distance: args.max_distance,
        ..SegParams::default()
    }
}

fn load_annotations(annot_dir: &Path, stem: &str) -> Result<Vec<LabeledPoint>> {
    let points_path = annot_dir.join(format!("{stem}_points.txt"));
    let labels_path = annot_dir.join(format!("{stem}_labels.txt"));
    let points_src = fs::read_to_string(&points_path)
        .with_context(|| format!("reading {}", points_path.display()))?;
    let labels_src = fs::read_to_string(&labels_path)
        .with_context(|| format!("reading {}", labels_path.display()))?;
    Ok(parse_annotations(&points_src, &labels_src)?)
}

/// Process a single page image end to end.
fn process_page(path: &Path, args: &Args, params: &SegParams) -> Result<()> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("unusable file name: {}", path.display()))?;
    let heatmap_path = args.heatmap_dir.join(
        path.file_name()
            .with_context(|| format!("unusable file name: {}", path.display()))?,
    );

    let page = image::open(path)
        .with_context(|| format!("loading page {}", path.display()))?
        .to_luma8();
    let heatmap = image::open(&heatmap_path)
        .with_context(|| format!("loading heatmap {}", heatmap_path.display()))?
        .to_luma8();

    let page_dir = args.out_dir.join(stem);
    fs::create_dir_all(&page_dir)
        .with_context(|| format!("creating {}", page_dir.display()))?;

    let lines = match &args.annot_dir {
        Some(annot_dir) => {
            let annotations = load_annotations(annot_dir, stem)?;
            if args.overlay {
                let boxes = extract_regions(&heatmap, &[], params);
                let rows = assign_lines_manual(&boxes, &annotations, &LeaveUnassigned);
                let overlay = render_overlay(&page, &rows, &annotations);
                overlay
                    .save(page_dir.join("overlay.png"))
                    .context("writing overlay")?;
            }
            segment_page_manual(&page, &heatmap, &annotations, params)?
        }
        None => segment_page(&page, &heatmap, params)?,
    };

    for (ordinal, line) in lines.iter().enumerate() {
        let out_path = page_dir.join(line_file_name(ordinal + 1));
        line.image
            .save(&out_path)
            .with_context(|| format!("writing {}", out_path.display()))?;
    }
    info!(page = stem, lines = lines.len(), "segmented");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let params = build_params(&args);

    // Pages are independent engine invocations; fan them out.
    let failures: Vec<String> = args
        .files
        .par_iter()
        .filter_map(|path| {
            process_page(path, &args, &params)
                .err()
                .map(|e| format!("{}: {e:#}", path.display()))
        })
        .collect();

    if !failures.is_empty() {
        for failure in &failures {
            eprintln!("error: {failure}");
        }
        bail!("{} of {} pages failed", failures.len(), args.files.len());
    }
    Ok(())
}
