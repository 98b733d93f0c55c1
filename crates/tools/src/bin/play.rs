use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tools::{SimConfig, run_episode};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1)]
    episodes: u64,
    /// Optional TOML file with simulator settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Where to write the transcript of the last episode
    #[arg(short, long)]
    transcript: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => SimConfig::default(),
    };

    let mut last = None;
    for seed in args.seed..args.seed.saturating_add(args.episodes) {
        let report = run_episode(seed, &config);
        println!(
            "seed {seed}: {}x{} cave, {:?} after {} actions",
            report.cave.width,
            report.cave.height,
            report.outcome,
            report.actions()
        );
        last = Some(report);
    }

    if let (Some(path), Some(report)) = (&args.transcript, &last) {
        report
            .transcript
            .save(path)
            .with_context(|| format!("Failed to write transcript: {}", path.display()))?;
        println!("Transcript for seed {} written to {}", report.seed, path.display());
    }

    Ok(())
}
