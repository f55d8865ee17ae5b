//! Command-line front end for the geodata transform.
//!
//! Reads the converter's GeoJSON output for one boundary, runs the pipeline and
//! writes the place and its roads as GeoJSON.

mod config;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use streetgeo::codec::{decode_features, encode_response};
use streetgeo::names::{generate_alternate_names, NameMode};
use streetgeo::{transform, PIPELINE_VERSION};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "streetgeo")]
#[command(about = "Turn a boundary and its streets into a street-guessing map")]
struct Args {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transform a converted GeoJSON FeatureCollection into a place and roads
    Transform {
        /// GeoJSON FeatureCollection; the first feature is the boundary
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Optional TOML config
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the accepted guesses for a street name
    Names {
        name: String,

        #[arg(long, default_value = "easy")]
        mode: NameMode,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Transform {
            input,
            output,
            config,
        } => run_transform(input, output, config),
        Command::Names { name, mode } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for alternate in generate_alternate_names(&name, mode).into_iter().unique() {
                writeln!(out, "{}", alternate)?;
            }
            Ok(())
        }
    }
}

fn run_transform(input: PathBuf, output: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let config = match &config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    info!("Streetgeo transform (pipeline version {})", PIPELINE_VERSION);
    info!("Input: {}", input.display());

    let text = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read input file {}", input.display()))?;
    let features = decode_features(&text).context("Failed to decode input")?;
    info!("Decoded {} features", features.len());

    let response = transform(&features, &config.transform_options())
        .context("This place could not be loaded")?;

    let json = encode_response(&response);
    let body = if config.output.pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };

    match output {
        Some(path) => {
            fs::write(&path, body)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            info!("Wrote {} roads to {}", response.roads.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            writeln!(out, "{}", body)?;
        }
    }

    Ok(())
}
