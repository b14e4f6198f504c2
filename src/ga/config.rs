//! GA configuration.
//!
//! [`GaConfig`] holds the parameters of the evolutionary loop itself. When to
//! stop is not part of it; that is decided by the
//! [`CriteriaSet`](crate::criteria::CriteriaSet) handed to the runner.

use super::selection::Selection;
use crate::error::StoppingError;

/// Parameters of the generational loop.
///
/// # Builder Pattern
///
/// ```
/// use u_stopping::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Rank)
///     .with_mutation_rate(0.2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals per generation.
    pub population_size: usize,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Fraction of the population copied unchanged into the next generation.
    pub elite_ratio: f64,

    /// Probability of recombining a parent pair instead of cloning parent 1.
    pub crossover_rate: f64,

    /// Probability of mutating each offspring.
    pub mutation_rate: f64,

    /// Minimum relative improvement that resets the stagnation counter.
    ///
    /// An improvement from `old` to `new` counts when
    /// `|old - new| / |old| >= convergence_threshold`. With the default of
    /// 0.0 any strict improvement counts.
    pub convergence_threshold: f64,

    /// Evaluate offspring on rayon's thread pool (requires the `parallel` feature).
    pub parallel: bool,

    /// Random seed; `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            selection: Selection::default(),
            elite_ratio: 0.1,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            convergence_threshold: 0.0,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the elite ratio, clamped to `[0, 1]`.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate, clamped to `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the convergence threshold; negative values become 0.
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold.max(0.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elites carried over each generation.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_ratio) as usize
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`StoppingError::InvalidConfiguration`] naming the offending field.
    pub fn validate(&self) -> Result<(), StoppingError> {
        if self.population_size < 2 {
            return Err(StoppingError::invalid(
                "population_size",
                format!("must be at least 2, got {}", self.population_size),
            ));
        }
        if self.elite_count() >= self.population_size {
            return Err(StoppingError::invalid(
                "elite_ratio",
                "elites fill the entire population",
            ));
        }
        for (name, rate) in [
            ("elite_ratio", self.elite_ratio),
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(StoppingError::invalid(name, format!("must be in [0, 1], got {rate}")));
            }
        }
        if self.convergence_threshold.is_nan() || self.convergence_threshold < 0.0 {
            return Err(StoppingError::invalid(
                "convergence_threshold",
                "must be non-negative",
            ));
        }
        if let Selection::Tournament(0) = self.selection {
            return Err(StoppingError::invalid("selection", "tournament size must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.selection, Selection::Tournament(3));
        assert_eq!(config.elite_count(), 10);
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rates_are_clamped() {
        let config = GaConfig::default()
            .with_elite_ratio(1.5)
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0)
            .with_convergence_threshold(-1.0);

        assert_eq!(config.elite_ratio, 1.0);
        assert_eq!(config.crossover_rate, 0.0);
        assert_eq!(config.mutation_rate, 1.0);
        assert_eq!(config.convergence_threshold, 0.0);
    }

    #[test]
    fn test_population_too_small() {
        let err = GaConfig::default()
            .with_population_size(1)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            StoppingError::InvalidConfiguration {
                parameter: "population_size",
                ..
            }
        ));
    }

    #[test]
    fn test_elites_fill_population() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_elite_ratio(1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_field_rejected() {
        let mut config = GaConfig::default();
        config.mutation_rate = 1.5;
        assert!(config.validate().is_err());

        let mut config = GaConfig::default();
        config.convergence_threshold = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_tournament_rejected() {
        let config = GaConfig::default().with_selection(Selection::Tournament(0));
        assert!(config.validate().is_err());
    }
}
