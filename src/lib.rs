#![doc = include_str!("../README.md")]

mod builder;
mod coord;
mod error;
mod sampler;
mod source;
mod walk;

pub use coord::{Coord, Direction, candidates};
pub use error::WalkError;
pub use sampler::{RestartPolicy, Sampler, generate, try_generate};
pub use source::UniformSource;
pub use walk::Walk;
