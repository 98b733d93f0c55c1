use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tools::{Transcript, replay};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the transcript JSON file to replay
    #[arg(short, long)]
    transcript: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let transcript = Transcript::load(&args.transcript)
        .with_context(|| format!("Failed to load transcript: {}", args.transcript.display()))?;
    let result = replay(&transcript).context("Replay diverged from the recorded transcript")?;

    println!("Replay complete.");
    println!("Seed: {}", transcript.seed);
    println!("Steps: {}", result.steps);
    println!("Snapshot Hash: {}", result.final_snapshot_hash);

    Ok(())
}
