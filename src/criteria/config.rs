//! Declarative criteria configuration.
//!
//! [`StoppingConfig`] describes a criteria set as plain data so it can be
//! loaded from whatever configuration source the caller uses (enable the
//! `serde` feature for derives). [`StoppingConfig::build`] validates every
//! entry up front, so a bad bound is reported before any generation runs.

use super::{CriteriaSet, MaxGenerations, MaxStagnation, MaxTime, StoppingCriterion, TargetFitness};
use crate::error::StoppingError;

/// One criterion in declarative form.
///
/// With the `serde` feature the enum is internally tagged:
///
/// ```json
/// { "type": "max_generations", "max_generations": 500 }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum CriterionConfig {
    /// See [`MaxGenerations`]. Signed so that negative values from external
    /// sources are reported instead of failing to parse.
    MaxGenerations { max_generations: i64 },
    /// See [`MaxStagnation`].
    MaxStagnation { limit: u64 },
    /// See [`MaxTime`].
    MaxTime { limit_ms: u64 },
    /// See [`TargetFitness`].
    TargetFitness { target: f64 },
}

impl CriterionConfig {
    /// Constructs and validates the criterion.
    pub fn build(&self) -> Result<Box<dyn StoppingCriterion>, StoppingError> {
        Ok(match *self {
            Self::MaxGenerations { max_generations } => {
                Box::new(MaxGenerations::from_signed(max_generations)?)
            }
            Self::MaxStagnation { limit } => Box::new(MaxStagnation::new(limit)?),
            Self::MaxTime { limit_ms } => Box::new(MaxTime::from_millis(limit_ms)?),
            Self::TargetFitness { target } => Box::new(TargetFitness::new(target)?),
        })
    }
}

/// A declarative criteria set.
///
/// # Examples
///
/// ```
/// use u_stopping::criteria::{RunState, StoppingConfig};
///
/// let set = StoppingConfig::default()
///     .with_max_generations(100)
///     .with_stagnation_limit(20)
///     .build()
///     .unwrap();
/// assert_eq!(set.len(), 2);
/// assert!(set.should_stop(&RunState::at_generation(100)).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoppingConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub criteria: Vec<CriterionConfig>,
}

impl StoppingConfig {
    /// Adds a generation budget.
    pub fn with_max_generations(mut self, n: i64) -> Self {
        self.criteria
            .push(CriterionConfig::MaxGenerations { max_generations: n });
        self
    }

    /// Adds a stagnation limit.
    pub fn with_stagnation_limit(mut self, limit: u64) -> Self {
        self.criteria.push(CriterionConfig::MaxStagnation { limit });
        self
    }

    /// Adds a wall-clock limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.criteria.push(CriterionConfig::MaxTime { limit_ms: ms });
        self
    }

    /// Adds a target fitness.
    pub fn with_target_fitness(mut self, target: f64) -> Self {
        self.criteria.push(CriterionConfig::TargetFitness { target });
        self
    }

    /// Preset matching a short run: 100 generations, 20 stagnant, 10s.
    pub fn fast() -> Self {
        Self::default()
            .with_max_generations(100)
            .with_stagnation_limit(20)
            .with_time_limit_ms(10_000)
    }

    /// Preset for a long, quality-oriented run: 500 generations, 80 stagnant, 60s.
    pub fn quality() -> Self {
        Self::default()
            .with_max_generations(500)
            .with_stagnation_limit(80)
            .with_time_limit_ms(60_000)
    }

    /// Validates every entry and builds the set, preserving order.
    ///
    /// # Errors
    /// The first [`StoppingError::InvalidConfiguration`] encountered.
    pub fn build(&self) -> Result<CriteriaSet, StoppingError> {
        let mut set = CriteriaSet::new();
        for entry in &self.criteria {
            set.push_boxed(entry.build()?);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::RunState;
    use std::time::Duration;

    #[test]
    fn test_build_preserves_order() {
        let set = StoppingConfig::default()
            .with_target_fitness(-5.0)
            .with_max_generations(10)
            .build()
            .unwrap();

        let names: Vec<&str> = set.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["target_fitness", "max_generations"]);
    }

    #[test]
    fn test_build_rejects_negative_generations() {
        let err = StoppingConfig::default()
            .with_max_generations(-1)
            .build()
            .unwrap_err();
        assert!(matches!(err, StoppingError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_build_rejects_each_invalid_variant() {
        for config in [
            StoppingConfig::default().with_stagnation_limit(0),
            StoppingConfig::default().with_time_limit_ms(0),
            StoppingConfig::default().with_target_fitness(f64::NAN),
        ] {
            assert!(config.build().is_err(), "{config:?} should be rejected");
        }
    }

    #[test]
    fn test_zero_generations_accepted() {
        let set = StoppingConfig::default()
            .with_max_generations(0)
            .build()
            .unwrap();
        assert!(set.should_stop(&RunState::at_generation(0)).unwrap());
    }

    #[test]
    fn test_presets_build() {
        let fast = StoppingConfig::fast().build().unwrap();
        assert_eq!(fast.len(), 3);
        let state = RunState::at_generation(1).with_elapsed(Duration::from_secs(10));
        assert_eq!(fast.triggered(&state).unwrap(), vec!["max_time"]);

        let quality = StoppingConfig::quality().build().unwrap();
        assert!(!quality.should_stop(&RunState::at_generation(499)).unwrap());
        assert!(quality.should_stop(&RunState::at_generation(500)).unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_tagged() {
        let json = r#"{
            "criteria": [
                { "type": "max_generations", "max_generations": 50 },
                { "type": "max_time", "limit_ms": 2000 },
                { "type": "target_fitness", "target": -20.0 }
            ]
        }"#;
        let config: StoppingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config,
            StoppingConfig::default()
                .with_max_generations(50)
                .with_time_limit_ms(2000)
                .with_target_fitness(-20.0)
        );
        assert_eq!(config.build().unwrap().len(), 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_negative_reported_on_build() {
        let json = r#"{ "criteria": [{ "type": "max_generations", "max_generations": -4 }] }"#;
        let config: StoppingConfig = serde_json::from_str(json).unwrap();
        assert!(config.build().is_err());
    }
}
