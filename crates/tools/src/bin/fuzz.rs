use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tools::{Outcome, SimConfig, replay, run_episode};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    episodes: u32,
    /// Optional TOML file with simulator settings
    #[arg(short, long)]
    config: Option<PathBuf>,
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

    println!("Starting fuzz harness on seed {} for {} episodes...", args.seed, args.episodes);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut tally: BTreeMap<String, u32> = BTreeMap::new();

    for _ in 0..args.episodes {
        let cave_seed = rng.next_u64();
        let report = run_episode(cave_seed, &config);

        // Invariants: the agent never walks into a hazard and never faults.
        match &report.outcome {
            Outcome::Died { cause } => bail!("seed {cave_seed}: agent died ({cause:?})"),
            Outcome::AgentFault(error) => bail!("seed {cave_seed}: agent fault: {error}"),
            Outcome::Escaped { .. } | Outcome::Stalled => {}
        }
        let replayed = replay(&report.transcript)
            .with_context(|| format!("seed {cave_seed}: transcript does not replay"))?;
        if replayed.final_snapshot_hash != report.final_snapshot_hash {
            bail!("seed {cave_seed}: replay reached a different agent state");
        }

        let key = match report.outcome {
            Outcome::Escaped { with_gold: true } => "escaped with gold",
            Outcome::Escaped { with_gold: false } => "escaped empty-handed",
            _ => "stalled",
        };
        *tally.entry(key.to_string()).or_default() += 1;
    }

    for (outcome, count) in &tally {
        println!("{outcome}: {count}");
    }
    println!("Fuzzing completed successfully.");
    Ok(())
}
