//! Constellation Dataset Preparation Tool
//!
//! This binary reads the per-constellation IAU border files, joins them with
//! the bundled properties and line-figure tables, and writes the GeoJSON
//! dataset consumed by star chart plotting.
//!
//! Usage:
//!   cargo run --bin prep_constellations -- [--synthetic] [--borders-dir DIR] [--output FILE]

use std::fs;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use skyatlas::borders::synthetic::{write_synthetic_borders, DEFAULT_SEED};
use skyatlas::{build_all, ConstellationDataset};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Constellation Dataset Preparation Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Builds the constellation boundary dataset from IAU border files",
    long_about = None
)]
struct Args {
    /// Directory holding the per-constellation border files
    #[arg(long, default_value = "data/raw/iau")]
    borders_dir: PathBuf,

    /// Output dataset path, replaced on every run
    #[arg(short, long, default_value = "data/library/constellations.geojson")]
    output: PathBuf,

    /// Generate synthetic border files into the borders directory first
    #[arg(short, long, action = ArgAction::SetTrue)]
    synthetic: bool,

    /// RNG seed for synthetic border generation
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

/// Helper to print named values in a formatted way
fn print_named_value(name: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", name, value);
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.synthetic {
        let written = write_synthetic_borders(&args.borders_dir, args.seed)?;
        println!(
            "Generated {} synthetic border files in {}",
            written,
            args.borders_dir.display()
        );
    }

    let records = build_all(&args.borders_dir)?;
    let dataset = ConstellationDataset::from_records(records);

    if let Some(parent) = args.output.parent() {
        fs::create_dir_all(parent)?;
    }
    dataset.save(&args.output)?;
    println!("Wrote {}", args.output.display());

    if let Some(uma) = dataset.get("uma") {
        println!("\nSample record (uma):");
        print_named_value("iau_id", &uma.iau_id);
        print_named_value("name", &uma.name);
        print_named_value("center_ra", uma.center_ra);
        print_named_value("center_dec", uma.center_dec);
        print_named_value("lines_hip_ids", &uma.lines_hip_ids);
        print_named_value("boundary rings", uma.boundary.ring_count());
    }

    println!("\nTotal Constellations: {}", dataset.len());

    Ok(())
}
