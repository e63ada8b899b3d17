//! Ovito export - Entry point
//!
//! Converts a JSON frame sequence into an Ovito-readable text file.
//!
//! CLI Usage:
//!   ovito-export -i frames.json                  # Timestamped file in exports/
//!   ovito-export -i frames.json -o run.xyz       # Explicit destination
//!   ovito-export -i frames.json -p export.json   # Custom export parameters

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use ovito_frame_export::{
    config::{ExportParameters, DEFAULT_PARAMETERS_PATH},
    export::FrameExporter,
    state::SimulationData,
};

/// Parsed command line
struct Args {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    params: Option<PathBuf>,
}

/// Parse CLI arguments
fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        input: None,
        output: None,
        params: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-i" | "--input" => {
                i += 1;
                if i < args.len() {
                    parsed.input = Some(PathBuf::from(&args[i]));
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    parsed.output = Some(PathBuf::from(&args[i]));
                }
            }
            "-p" | "--params" => {
                i += 1;
                if i < args.len() {
                    parsed.params = Some(PathBuf::from(&args[i]));
                }
            }
            "--help" | "-h" => {
                println!("Ovito export");
                println!();
                println!("Usage: ovito-export -i FRAMES.json [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -i, --input FILE   JSON array of frames (required)");
                println!("  -o, --output FILE  Destination (default: timestamped file in output_dir)");
                println!("  -p, --params FILE  Export parameters (default: {})", DEFAULT_PARAMETERS_PATH);
                println!("  --help, -h         Show this help");
                std::process::exit(0);
            }
            other => log::warn!("Ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    parsed
}

/// Read the whole frame sequence
fn load_frames(path: &Path) -> Result<Vec<SimulationData>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let frames = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse frames from {}", path.display()))?;
    Ok(frames)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args();
    let Some(input) = args.input else {
        bail!("missing --input (see --help)");
    };

    let frames = load_frames(&input)?;
    log::info!("Loaded {} frames from {}", frames.len(), input.display());

    let exporter = match args.output {
        Some(path) => FrameExporter::new(path),
        None => {
            let params = match &args.params {
                Some(path) => ExportParameters::load_from(path),
                None => ExportParameters::load_or_default(),
            };
            FrameExporter::timestamped(&params)?
        }
    };

    let path = exporter.export_all(&frames)?;

    println!("Wrote {} frames to {}", frames.len(), path.display());
    Ok(())
}
