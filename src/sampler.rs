use crate::builder::WalkBuilder;
use crate::{UniformSource, Walk, WalkError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// What to do when the walk reaches a cell with no unvisited neighbour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestartPolicy {
    /// Discard the attempt and start again from the origin.
    ///
    /// Every returned walk is self-avoiding.
    #[default]
    Restart,
    /// Stop moving and repeat the trap cell until the requested length.
    ///
    /// Returned walks may end with a frozen run of the trap cell.
    Stall,
}

impl RestartPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            RestartPolicy::Restart => "restart",
            RestartPolicy::Stall => "stall",
        }
    }
}

impl fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RestartPolicy {
    type Err = WalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "restart" => Ok(RestartPolicy::Restart),
            "stall" => Ok(RestartPolicy::Stall),
            _ => Err(WalkError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Generates a walk of `n` steps, i.e. `n + 1` coordinates starting at the origin.
///
/// Each step moves to one of the unvisited neighbours of the current cell,
/// chosen uniformly through `rng`. When the walk traps itself, `policy`
/// decides between starting over and freezing in place. The result is
/// deterministic for a deterministic source.
///
/// `n = 0` returns the origin alone without drawing from `rng`.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sarw_sampler::{RestartPolicy, generate};
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let walk = generate(50, RestartPolicy::Restart, &mut rng);
/// assert_eq!(walk.len(), 51);
/// assert!(walk.is_self_avoiding());
/// ```
pub fn generate<S: UniformSource + ?Sized>(n: usize, policy: RestartPolicy, rng: &mut S) -> Walk {
    let target = n.saturating_add(1);
    let mut builder = WalkBuilder::new(target);

    while builder.len() < target {
        let next = builder.candidates();
        if next.is_empty() {
            trace!(
                at = %builder.head(),
                len = builder.len(),
                %policy,
                "walk trapped"
            );
            match policy {
                RestartPolicy::Restart => {
                    builder.reset();
                    continue;
                }
                RestartPolicy::Stall => {
                    builder.freeze(target);
                    break;
                }
            }
        }
        let choice = next[rng.pick(next.len())];
        builder.advance(choice);
    }

    let walk = builder.finish();
    debug!(
        steps = walk.steps(),
        restarts = walk.restarts(),
        frozen = walk.frozen_len(),
        "walk generated"
    );
    walk
}

/// Like [`generate`], for callers holding a signed length.
///
/// Negative lengths are rejected before any work is done.
pub fn try_generate<S: UniformSource + ?Sized>(
    n: i64,
    policy: RestartPolicy,
    rng: &mut S,
) -> Result<Walk, WalkError> {
    if n < 0 {
        return Err(WalkError::NegativeLength(n));
    }
    let n = usize::try_from(n).map_err(|_| WalkError::LengthOverflow(n))?;
    Ok(generate(n, policy, rng))
}

/// An iterator that produces independent walks of a fixed length.
///
/// Created by [`Sampler::new`]. Each item is what [`generate`] would return
/// for the next draws of the owned source, so a seeded source gives a
/// reproducible stream.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sarw_sampler::{RestartPolicy, Sampler};
///
/// let rng = StdRng::seed_from_u64(0);
/// let sampler = Sampler::new(20, RestartPolicy::Restart, rng);
///
/// for walk in sampler.take(10) {
///     assert_eq!(walk.len(), 21);
/// }
/// ```
pub struct Sampler<S> {
    n: usize,
    policy: RestartPolicy,
    rng: S,
}

impl<S: UniformSource> Sampler<S> {
    /// Create a sampler for walks of `n` steps.
    pub fn new(n: usize, policy: RestartPolicy, rng: S) -> Self {
        Self { n, policy, rng }
    }

    pub fn steps(&self) -> usize {
        self.n
    }

    pub fn policy(&self) -> RestartPolicy {
        self.policy
    }

    /// Give back the random source.
    pub fn into_inner(self) -> S {
        self.rng
    }
}

impl<S: UniformSource> Iterator for Sampler<S> {
    type Item = Walk;

    fn next(&mut self) -> Option<Self::Item> {
        Some(generate(self.n, self.policy, &mut self.rng))
    }
}
