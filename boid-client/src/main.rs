use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use boid_client::{build_simulation, load_settings, Runner};
use boid_shared::SimulationSettings;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless boid flock runner", long_about = None)]
struct Args {
    /// JSON settings file; missing fields use reference values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of steps to run
    #[arg(short, long, default_value_t = 600)]
    steps: u64,

    /// Steps per second; 0 runs as fast as possible
    #[arg(short, long, default_value_t = 0)]
    fps: u32,

    /// Override the random seed for the initial flock
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of boids
    #[arg(short, long)]
    boids: Option<usize>,

    /// Write every k-th frame; 0 writes none
    #[arg(short, long, default_value_t = 1)]
    every: u64,

    /// Output file for JSON-lines frames (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let mut settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => SimulationSettings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if let Some(boids) = args.boids {
        settings.boid_count = boids;
    }

    log::info!("Boid client starting...");
    log::info!(
        "World {}x{}, {} boids, seed {}",
        settings.world_width,
        settings.world_height,
        settings.boid_count,
        settings.seed
    );

    let sim = build_simulation(&settings)?;

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut runner = Runner::new(sim, out).every(args.every).fps(args.fps);
    runner.run(args.steps).context("Simulation run failed")?;

    log::info!("Wrote {} frames", runner.frames_written());
    Ok(())
}
