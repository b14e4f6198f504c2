//! Stagnation limit.

use super::{progress, AlgorithmState, StoppingCriterion};
use crate::error::StoppingError;

/// Stops after `limit` consecutive generations without significant improvement.
///
/// What counts as "significant" is decided by the driver when it maintains
/// [`AlgorithmState::stagnant_generations`]; see
/// [`GaConfig::convergence_threshold`](crate::ga::GaConfig::convergence_threshold).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxStagnation {
    limit: u64,
}

impl MaxStagnation {
    /// Creates the criterion.
    ///
    /// # Errors
    /// [`StoppingError::InvalidConfiguration`] if `limit` is zero. Leave the
    /// criterion out of the set to disable stagnation stopping.
    pub fn new(limit: u64) -> Result<Self, StoppingError> {
        if limit == 0 {
            return Err(StoppingError::invalid(
                "stagnation_limit",
                "must be at least 1",
            ));
        }
        Ok(Self { limit })
    }

    /// Returns the stagnation limit.
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl StoppingCriterion for MaxStagnation {
    fn name(&self) -> &str {
        "max_stagnation"
    }

    fn should_stop(&self, state: &dyn AlgorithmState) -> Result<bool, StoppingError> {
        Ok(state.stagnant_generations() >= self.limit)
    }

    fn estimate(&self, state: &dyn AlgorithmState) -> f64 {
        progress(state.stagnant_generations() as f64, self.limit as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::RunState;

    #[test]
    fn test_zero_limit_rejected() {
        assert!(matches!(
            MaxStagnation::new(0),
            Err(StoppingError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_threshold() {
        let criterion = MaxStagnation::new(5).unwrap();
        let state = RunState::at_generation(100);

        assert!(!criterion
            .should_stop(&state.with_stagnant_generations(4))
            .unwrap());
        assert!(criterion
            .should_stop(&state.with_stagnant_generations(5))
            .unwrap());
    }

    #[test]
    fn test_ignores_generation_count() {
        let criterion = MaxStagnation::new(3).unwrap();
        assert!(!criterion
            .should_stop(&RunState::at_generation(1_000_000))
            .unwrap());
    }

    #[test]
    fn test_estimate() {
        let criterion = MaxStagnation::new(4).unwrap();
        let state = RunState::default().with_stagnant_generations(1);
        assert_eq!(criterion.estimate(&state), 0.25);
    }
}
