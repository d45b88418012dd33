//! Timing comparison between one-shot `generate()` and the `Sampler` iterator.
//!
//! Usage: cargo run --release --example throughput -- [steps] [--stall]
//!
//! The default reproduces the classic driver loop: 10,000 walks of 50 steps.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sarw_sampler::{RestartPolicy, Sampler, generate};
use std::env;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

const TRIALS: usize = 5;
const WALKS: usize = 10_000;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    let n: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(50);
    let policy = if args.iter().any(|s| s == "--stall") {
        RestartPolicy::Stall
    } else {
        RestartPolicy::Restart
    };

    info!(steps = n, walks = WALKS, %policy, "benchmark: generate() vs Sampler");

    let oneshot = run_trials(TRIALS, || {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        for _ in 0..WALKS {
            std::hint::black_box(generate(n, policy, &mut rng));
        }
    });

    let iter = run_trials(TRIALS, || {
        let sampler = Sampler::new(n, policy, ChaCha20Rng::seed_from_u64(42));
        for walk in sampler.take(WALKS) {
            std::hint::black_box(walk);
        }
    });

    report("generate()", &oneshot);
    report("Sampler", &iter);

    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let restarts: u64 = (0..WALKS)
        .map(|_| generate(n, policy, &mut rng).restarts())
        .sum();
    info!(
        mean_restarts = restarts as f64 / WALKS as f64,
        "restarts per walk"
    );
}

fn report(label: &str, times: &[Duration]) {
    if let Some(stats) = Stats::from(times) {
        let per_walk_us = stats.mean.as_secs_f64() * 1e6 / WALKS as f64;
        info!(
            "{label:<11} mean={:>9.2}ms  min={:>9.2}ms  max={:>9.2}ms  ({per_walk_us:.2}us/walk)",
            stats.mean.as_secs_f64() * 1000.0,
            stats.min.as_secs_f64() * 1000.0,
            stats.max.as_secs_f64() * 1000.0
        );
    }
}

fn run_trials<F: FnMut()>(trials: usize, mut f: F) -> Vec<Duration> {
    (0..trials)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect()
}

struct Stats {
    mean: Duration,
    min: Duration,
    max: Duration,
}

impl Stats {
    fn from(times: &[Duration]) -> Option<Self> {
        let sum: Duration = times.iter().sum();
        let mean = sum / u32::try_from(times.len()).ok()?;
        let min = *times.iter().min()?;
        let max = *times.iter().max()?;
        Some(Self { mean, min, max })
    }
}
