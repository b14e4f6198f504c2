//! Target objective value.

use super::{AlgorithmState, StoppingCriterion};
use crate::error::StoppingError;

/// Stops once the best fitness is at or below `target` (minimization).
///
/// A state that has not reported a best fitness yet never stops this
/// criterion. A NaN best fitness is rejected as a malformed state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetFitness {
    target: f64,
}

impl TargetFitness {
    /// Creates the criterion.
    ///
    /// # Errors
    /// [`StoppingError::InvalidConfiguration`] if `target` is NaN or infinite.
    pub fn new(target: f64) -> Result<Self, StoppingError> {
        if !target.is_finite() {
            return Err(StoppingError::invalid(
                "target_fitness",
                format!("must be finite, got {target}"),
            ));
        }
        Ok(Self { target })
    }

    /// Returns the target fitness.
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl StoppingCriterion for TargetFitness {
    fn name(&self) -> &str {
        "target_fitness"
    }

    fn should_stop(&self, state: &dyn AlgorithmState) -> Result<bool, StoppingError> {
        match state.best_fitness() {
            None => Ok(false),
            Some(best) if best.is_nan() => Err(StoppingError::precondition(
                self.name(),
                format!("best fitness is NaN at generation {}", state.generation()),
            )),
            Some(best) => Ok(best <= self.target),
        }
    }

    fn estimate(&self, state: &dyn AlgorithmState) -> f64 {
        // Binary: distance to the target has no natural scale.
        match state.best_fitness() {
            Some(best) if best <= self.target => 1.0,
            _ => 0.0,
        }
    }
}
