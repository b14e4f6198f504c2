//! Stopping criteria for iterative search.
//!
//! A [`StoppingCriterion`] is a pure predicate over an [`AlgorithmState`]:
//! given a read-only view of the running algorithm, it decides whether the
//! loop must end after the current generation. Criteria hold only their own
//! fixed configuration and keep no counters between calls.
//!
//! # Variants
//!
//! - [`MaxGenerations`]: generation budget
//! - [`MaxStagnation`]: generations without improvement
//! - [`MaxTime`]: wall-clock budget
//! - [`TargetFitness`]: good-enough objective value reached
//!
//! Several criteria are combined with [`CriteriaSet`], which stops as soon as
//! any member does. [`StoppingConfig`] builds a validated set from a
//! declarative description.
//!
//! # Example
//!
//! ```
//! use u_stopping::criteria::{CriteriaSet, MaxGenerations, MaxStagnation, RunState};
//!
//! let set = CriteriaSet::new()
//!     .with(MaxGenerations::new(10))
//!     .with(MaxStagnation::new(5).unwrap());
//!
//! let state = RunState::at_generation(10);
//! assert!(set.should_stop(&state).unwrap());
//! assert_eq!(set.triggered(&state).unwrap(), vec!["max_generations"]);
//! ```

mod config;
mod max_generations;
mod max_time;
mod set;
mod stagnation;
mod target_fitness;

pub use config::{CriterionConfig, StoppingConfig};
pub use max_generations::MaxGenerations;
pub use max_time::MaxTime;
pub use set::CriteriaSet;
pub use stagnation::MaxStagnation;
pub use target_fitness::TargetFitness;

use crate::error::StoppingError;
use std::time::Duration;

/// Read-only view of a running iterative algorithm.
///
/// Only [`generation`](AlgorithmState::generation) is mandatory. The other
/// signals default to "not tracked" so a minimal driver can expose just its
/// counter.
pub trait AlgorithmState {
    /// Number of completed generations. Never decreases during a run.
    fn generation(&self) -> u64;

    /// Best (lowest) fitness found so far, if any individual was evaluated.
    fn best_fitness(&self) -> Option<f64> {
        None
    }

    /// Consecutive generations without significant improvement.
    fn stagnant_generations(&self) -> u64 {
        0
    }

    /// Wall-clock time since the run started.
    fn elapsed(&self) -> Duration {
        Duration::ZERO
    }
}

/// Snapshot of algorithm state taken by the driver after each generation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunState {
    pub generation: u64,
    pub best_fitness: Option<f64>,
    pub stagnant_generations: u64,
    pub elapsed: Duration,
}

impl RunState {
    /// A state that carries only a generation counter.
    pub fn at_generation(generation: u64) -> Self {
        Self {
            generation,
            ..Self::default()
        }
    }

    /// Sets the best fitness.
    pub fn with_best_fitness(mut self, fitness: f64) -> Self {
        self.best_fitness = Some(fitness);
        self
    }

    /// Sets the stagnation counter.
    pub fn with_stagnant_generations(mut self, n: u64) -> Self {
        self.stagnant_generations = n;
        self
    }

    /// Sets the elapsed time.
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }
}

impl AlgorithmState for RunState {
    fn generation(&self) -> u64 {
        self.generation
    }

    fn best_fitness(&self) -> Option<f64> {
        self.best_fitness
    }

    fn stagnant_generations(&self) -> u64 {
        self.stagnant_generations
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// A condition under which an iterative algorithm must stop.
///
/// Implementations must be pure: the result depends only on `state` and the
/// criterion's own configuration, so calling twice with the same state gives
/// the same answer.
pub trait StoppingCriterion: Send + Sync {
    /// Stable identifier used when reporting which criterion fired.
    fn name(&self) -> &str;

    /// Returns `true` if the algorithm must terminate after the current generation.
    ///
    /// # Errors
    /// [`StoppingError::PreconditionViolated`] if `state` is malformed.
    fn should_stop(&self, state: &dyn AlgorithmState) -> Result<bool, StoppingError>;

    /// Relative progress towards termination in `[0, 1]`.
    ///
    /// Informational only; never consulted for the stop decision.
    fn estimate(&self, state: &dyn AlgorithmState) -> f64;
}

/// Ratio of `value` to `limit`, clamped to `[0, 1]`. A zero limit is already reached.
fn progress(value: f64, limit: f64) -> f64 {
    if limit <= 0.0 {
        1.0
    } else {
        (value / limit).clamp(0.0, 1.0)
    }
}
