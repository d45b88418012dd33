//! Generate self-avoiding walks and print them as JSON lines.
//!
//! Usage: cargo run --release --example generate -- --steps <n> [--count k] [--seed s] [--policy restart|stall]
//!
//! Example:
//!   cargo run --release --example generate -- --steps 50 --count 1000 --seed 42 > walks.jsonl

use std::io::{self, BufWriter, Write};

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sarw_sampler::{RestartPolicy, Sampler};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "generate", about = "Sample self-avoiding random walks as JSON lines")]
struct Cli {
    /// Steps per walk (each walk has steps + 1 coordinates)
    #[arg(short = 'n', long)]
    steps: usize,

    /// Number of walks to emit
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Seed for the ChaCha20 generator
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// What to do when a walk traps itself: restart or stall
    #[arg(short, long, default_value_t = RestartPolicy::Restart)]
    policy: RestartPolicy,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let rng = ChaCha20Rng::seed_from_u64(cli.seed);
    let sampler = Sampler::new(cli.steps, cli.policy, rng);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut restarts = 0u64;
    let mut trapped = 0usize;
    for walk in sampler.take(cli.count) {
        restarts += walk.restarts();
        trapped += usize::from(walk.is_trapped());
        serde_json::to_writer(&mut out, &walk)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    info!(
        count = cli.count,
        steps = cli.steps,
        policy = %cli.policy,
        restarts,
        trapped,
        "done"
    );
    Ok(())
}
