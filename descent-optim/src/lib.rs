//! Optimizer loop of the descent workspace.
//!
//! A [`RunConfig`] selects the sampling scheme (full batch, stochastic,
//! mini-batch) and the update rule (plain, momentum, RMSprop). [`run`] executes
//! it against a [`LinearDataset`](descent_data::LinearDataset) and records the
//! visited parameters in a [`Trajectory`]. Shuffling uses the generator passed by
//! the caller.

pub mod config;
pub mod runner;
pub mod trajectory;

pub use config::{RunConfig, Sampling};
pub use runner::{run, run_all, seeded_rng};
pub use trajectory::{RunOutput, Trajectory};
