//! Composite evaluation.

use super::{AlgorithmState, StoppingCriterion};
use crate::error::StoppingError;
use std::fmt;

/// An ordered collection of criteria combined with logical OR.
///
/// The set stops as soon as any member stops. An empty set never stops, so a
/// driver holding one runs until cancelled.
///
/// `CriteriaSet` is itself a [`StoppingCriterion`], so sets can be nested.
#[derive(Default)]
pub struct CriteriaSet {
    criteria: Vec<Box<dyn StoppingCriterion>>,
}

impl CriteriaSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a criterion (builder form).
    pub fn with<C: StoppingCriterion + 'static>(mut self, criterion: C) -> Self {
        self.push(criterion);
        self
    }

    /// Adds a criterion.
    pub fn push<C: StoppingCriterion + 'static>(&mut self, criterion: C) {
        self.criteria.push(Box::new(criterion));
    }

    /// Adds an already boxed criterion.
    pub fn push_boxed(&mut self, criterion: Box<dyn StoppingCriterion>) {
        self.criteria.push(criterion);
    }

    /// Number of criteria in the set.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Returns `true` if the set holds no criteria.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Iterates over the criteria in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn StoppingCriterion> {
        self.criteria.iter().map(|c| c.as_ref())
    }

    /// Returns `true` if any criterion signals stop.
    ///
    /// Every member is evaluated, so a malformed state is reported no matter
    /// where the rejecting criterion sits in the set.
    ///
    /// # Errors
    /// The first error returned by a member, in insertion order.
    pub fn should_stop(&self, state: &dyn AlgorithmState) -> Result<bool, StoppingError> {
        let mut stop = false;
        for criterion in &self.criteria {
            stop |= criterion.should_stop(state)?;
        }
        Ok(stop)
    }

    /// Names of all criteria that signal stop, in insertion order.
    pub fn triggered(&self, state: &dyn AlgorithmState) -> Result<Vec<&str>, StoppingError> {
        let mut names = Vec::new();
        for criterion in &self.criteria {
            if criterion.should_stop(state)? {
                names.push(criterion.name());
            }
        }
        Ok(names)
    }

    /// The largest progress estimate among members, or 0 for an empty set.
    pub fn estimate(&self, state: &dyn AlgorithmState) -> f64 {
        self.criteria
            .iter()
            .map(|c| c.estimate(state))
            .fold(0.0, f64::max)
    }
}

impl StoppingCriterion for CriteriaSet {
    fn name(&self) -> &str {
        "any"
    }

    fn should_stop(&self, state: &dyn AlgorithmState) -> Result<bool, StoppingError> {
        CriteriaSet::should_stop(self, state)
    }

    fn estimate(&self, state: &dyn AlgorithmState) -> f64 {
        CriteriaSet::estimate(self, state)
    }
}

impl fmt::Debug for CriteriaSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.criteria.iter().map(|c| c.name()))
            .finish()
    }
}

impl<C: StoppingCriterion + 'static> FromIterator<C> for CriteriaSet {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        let mut set = Self::new();
        for criterion in iter {
            set.push(criterion);
        }
        set
    }
}
