//! linegraph - build the neighbor review graph from annotation points
//!
//! Reads a points file (one `"x y"` row per point) and writes the review
//! graph as JSON: `{nodes: [{id, x, y}], edges: [{source, target, label}]}`.
//! Edges labeled -1 are statistical outliers worth a reviewer's look.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use scriptorium_core::SegParams;
use scriptorium_core::annot::parse_points;
use scriptorium_core::graph::build_review_graph;

/// Build the neighbor review graph from annotation points.
#[derive(Parser, Debug)]
#[command(name = "linegraph")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the points file, one "x y" pair per line
    points: PathBuf,

    /// Path to file where JSON is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Neighbor count for the k-nearest-neighbor query
    #[arg(short = 'k', long, default_value = "8")]
    neighbors: usize,

    /// Cosine-similarity ceiling for an opposed neighbor pair
    #[arg(short = 'c', long = "cosine-threshold", default_value = "-0.8", allow_hyphen_values = true)]
    cosine_threshold: f64,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let src = fs::read_to_string(&args.points)
        .with_context(|| format!("reading {}", args.points.display()))?;
    let points = parse_points(&src)?;

    let params = SegParams {
        neighbor_k: args.neighbors,
        opposition_threshold: args.cosine_threshold,
        ..SegParams::default()
    };
    let graph = build_review_graph(&points, &params);

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("creating {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };
    serde_json::to_writer_pretty(&mut output, &graph).context("serializing graph")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
