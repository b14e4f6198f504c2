//! Traits connecting the GA driver to a problem.
//!
//! The driver knows nothing about genome layout or operators; it only asks the
//! problem to create, evaluate, recombine and perturb individuals.

use rand::Rng;

/// Scalar fitness value. Lower is better.
///
/// For maximization, negate the objective.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Converts the fitness to `f64` for stopping criteria, logging and history.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A candidate solution that carries its own fitness.
pub trait Individual: Clone + Send + Sync {
    type Fitness: Fitness;

    fn fitness(&self) -> Self::Fitness;

    /// Stores the value computed by [`GaProblem::evaluate`].
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Problem definition plugged into [`GaRunner`](super::GaRunner).
///
/// `Send + Sync` is required because fitness evaluation may run on rayon's
/// thread pool when the `parallel` feature is enabled.
pub trait GaProblem: Send + Sync {
    type Individual: Individual;

    /// Creates a random, valid individual for the initial population.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Computes the fitness of an individual. Lower is better.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Recombines two parents into one or more children.
    ///
    /// Defaults to cloning `parent1`.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Vec<Self::Individual> {
        vec![parent1.clone()]
    }

    /// Perturbs an individual in place. Defaults to a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called after each completed generation with the new generation count
    /// and the best fitness so far.
    fn on_generation(
        &self,
        _generation: u64,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}
