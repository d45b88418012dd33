//! Sanity statistics for the walk generator.
//!
//! Usage: cargo run --release --example statistics -- [samples]
//!
//! Reports:
//! - first-step direction counts with a chi-square against the uniform 1/4
//! - mean restarts per walk and stall trap rate for several lengths
//! - mean squared end-to-end distance <R²> and the fitted exponent 2ν
//!
//! For self-avoiding walks on the square lattice <R²> ~ n^{2ν} with ν = 3/4.
//! The walks sampled here are kinetic (growth) walks with restarts, whose
//! exponent sits close to, but not exactly at, the equilibrium value.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sarw_sampler::{RestartPolicy, Sampler};
use std::env;

const LENGTHS: [usize; 5] = [8, 16, 32, 64, 128];

fn main() {
    let args: Vec<String> = env::args().collect();
    let samples: usize = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(20_000);

    println!("=== SARW statistics ({} samples per length) ===", samples);
    println!();

    first_step_uniformity(samples);
    trap_rates(samples);
    end_to_end_scaling(samples);
}

fn first_step_uniformity(samples: usize) {
    let sampler = Sampler::new(1, RestartPolicy::Restart, ChaCha20Rng::seed_from_u64(0));
    let mut counts = [0usize; 4];
    for walk in sampler.take(samples) {
        if let Some(dir) = walk.directions().first() {
            counts[dir.index()] += 1;
        }
    }

    let expected = samples as f64 / 4.0;
    let chi_square: f64 = counts
        .iter()
        .map(|&c| {
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum();

    println!("First step (up, down, left, right): {:?}", counts);
    // df = 3, 99th percentile = 11.34
    println!(
        "  chi^2 = {:.3} (df = 3) -> {}",
        chi_square,
        if chi_square < 11.34 { "PASS" } else { "FAIL" }
    );
    println!();
}

fn trap_rates(samples: usize) {
    println!("Traps:");
    for n in LENGTHS {
        let restart = Sampler::new(n, RestartPolicy::Restart, ChaCha20Rng::seed_from_u64(1));
        let restarts: u64 = restart.take(samples).map(|w| w.restarts()).sum();

        let stall = Sampler::new(n, RestartPolicy::Stall, ChaCha20Rng::seed_from_u64(1));
        let trapped = stall.take(samples).filter(|w| w.is_trapped()).count();

        println!(
            "  n={:>4}: restarts/walk = {:>8.4}, stall trap rate = {:>6.2}%",
            n,
            restarts as f64 / samples as f64,
            100.0 * trapped as f64 / samples as f64
        );
    }
    println!();
}

fn end_to_end_scaling(samples: usize) {
    println!("End-to-end distance:");
    let mut points = Vec::with_capacity(LENGTHS.len());
    for n in LENGTHS {
        let sampler = Sampler::new(n, RestartPolicy::Restart, ChaCha20Rng::seed_from_u64(2));
        let total: i64 = sampler.take(samples).map(|w| w.end_to_end_sq()).sum();
        let mean = total as f64 / samples as f64;
        println!("  n={:>4}: <R^2> = {:>10.2}", n, mean);
        points.push(((n as f64).ln(), mean.ln()));
    }

    // least-squares slope of ln<R²> against ln n
    let k = points.len() as f64;
    let sx: f64 = points.iter().map(|p| p.0).sum();
    let sy: f64 = points.iter().map(|p| p.1).sum();
    let sxx: f64 = points.iter().map(|p| p.0 * p.0).sum();
    let sxy: f64 = points.iter().map(|p| p.0 * p.1).sum();
    let slope = (k * sxy - sx * sy) / (k * sxx - sx * sx);

    println!("  fitted 2nu = {:.3} (equilibrium SAW: 1.5)", slope);
}
