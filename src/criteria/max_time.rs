//! Wall-clock budget.

use super::{progress, AlgorithmState, StoppingCriterion};
use crate::error::StoppingError;
use std::time::Duration;

/// Stops once the run has been going for at least `limit`.
///
/// The criterion never reads the clock itself; it compares against
/// [`AlgorithmState::elapsed`], which the driver samples once per generation.
/// The actual runtime may therefore exceed the limit by one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxTime {
    limit: Duration,
}

impl MaxTime {
    /// Creates the criterion.
    ///
    /// # Errors
    /// [`StoppingError::InvalidConfiguration`] if `limit` is zero.
    pub fn new(limit: Duration) -> Result<Self, StoppingError> {
        if limit.is_zero() {
            return Err(StoppingError::invalid("time_limit", "must be positive"));
        }
        Ok(Self { limit })
    }

    /// Shorthand for [`new`](Self::new) with a millisecond limit.
    pub fn from_millis(ms: u64) -> Result<Self, StoppingError> {
        Self::new(Duration::from_millis(ms))
    }

    /// Returns the time limit.
    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl StoppingCriterion for MaxTime {
    fn name(&self) -> &str {
        "max_time"
    }

    fn should_stop(&self, state: &dyn AlgorithmState) -> Result<bool, StoppingError> {
        Ok(state.elapsed() >= self.limit)
    }

    fn estimate(&self, state: &dyn AlgorithmState) -> f64 {
        progress(state.elapsed().as_secs_f64(), self.limit.as_secs_f64())
    }
}
