//! Generation budget.

use super::{progress, AlgorithmState, StoppingCriterion};
use crate::error::StoppingError;

/// Stops once the algorithm has completed at least `max_generations` generations.
///
/// A bound of zero is valid and stops the run before the first generation.
/// The bound may be changed between runs with
/// [`set_max_generations`](Self::set_max_generations); the new value applies
/// to the next evaluation.
///
/// # Examples
///
/// ```
/// use u_stopping::criteria::{MaxGenerations, RunState, StoppingCriterion};
///
/// let criterion = MaxGenerations::new(10);
/// assert!(!criterion.should_stop(&RunState::at_generation(9)).unwrap());
/// assert!(criterion.should_stop(&RunState::at_generation(10)).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxGenerations {
    max_generations: u64,
}

impl MaxGenerations {
    /// Creates the criterion with the given bound.
    pub fn new(max_generations: u64) -> Self {
        Self { max_generations }
    }

    /// Creates the criterion from a signed bound, e.g. one read from a config file.
    ///
    /// # Errors
    /// [`StoppingError::InvalidConfiguration`] if `max_generations` is negative.
    pub fn from_signed(max_generations: i64) -> Result<Self, StoppingError> {
        u64::try_from(max_generations)
            .map(Self::new)
            .map_err(|_| {
                StoppingError::invalid(
                    "max_generations",
                    format!("must be non-negative, got {max_generations}"),
                )
            })
    }

    /// Returns the generation bound.
    pub fn max_generations(&self) -> u64 {
        self.max_generations
    }

    /// Replaces the generation bound.
    ///
    /// Call between runs; the exclusive borrow prevents concurrent evaluation.
    pub fn set_max_generations(&mut self, max_generations: u64) {
        self.max_generations = max_generations;
    }
}

impl StoppingCriterion for MaxGenerations {
    fn name(&self) -> &str {
        "max_generations"
    }

    fn should_stop(&self, state: &dyn AlgorithmState) -> Result<bool, StoppingError> {
        Ok(state.generation() >= self.max_generations)
    }

    fn estimate(&self, state: &dyn AlgorithmState) -> f64 {
        progress(state.generation() as f64, self.max_generations as f64)
    }
}
