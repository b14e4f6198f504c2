//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives a run through `Initialized → Running → Stopped`:
//! initialize and evaluate the population, then alternate between asking the
//! stopping criteria and breeding one generation
//! (selection → crossover → mutation → evaluation).

use super::config::GaConfig;
use super::types::{Fitness, GaProblem, Individual};
use crate::criteria::{CriteriaSet, RunState};
use crate::error::StoppingError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Lifecycle of a single run. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Initialized,
    Running,
    Stopped,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual found during the entire run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Number of completed generations.
    pub generations: u64,

    /// Names of the criteria that fired, in set order. Empty if cancelled.
    pub stopped_by: Vec<String>,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,
}

impl<I: Individual> GaResult<I> {
    /// Returns `true` if the criterion named `name` was among those that fired.
    pub fn was_stopped_by(&self, name: &str) -> bool {
        self.stopped_by.iter().any(|n| n == name)
    }
}

/// Executes the GA evolutionary loop.
///
/// ```
/// # use rand::Rng;
/// # use u_stopping::ga::{GaProblem, Individual};
/// # #[derive(Clone)] struct Point(f64, f64);
/// # impl Individual for Point {
/// #     type Fitness = f64;
/// #     fn fitness(&self) -> f64 { self.1 }
/// #     fn set_fitness(&mut self, f: f64) { self.1 = f; }
/// # }
/// # struct Parabola;
/// # impl GaProblem for Parabola {
/// #     type Individual = Point;
/// #     fn create_individual<R: Rng>(&self, rng: &mut R) -> Point { Point(rng.random_range(-5.0..5.0), f64::INFINITY) }
/// #     fn evaluate(&self, p: &Point) -> f64 { p.0 * p.0 }
/// # }
/// use u_stopping::criteria::{CriteriaSet, MaxGenerations};
/// use u_stopping::ga::{GaConfig, GaRunner};
///
/// let criteria = CriteriaSet::new().with(MaxGenerations::new(20));
/// let config = GaConfig::default().with_population_size(20).with_seed(1);
///
/// let result = GaRunner::run(&Parabola, &config, &criteria).unwrap();
/// assert_eq!(result.generations, 20);
/// assert_eq!(result.stopped_by, vec!["max_generations"]);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs until any criterion in `criteria` fires.
    ///
    /// # Errors
    /// - [`StoppingError::InvalidConfiguration`] if `config` is invalid or
    ///   `criteria` is empty (the run could never end).
    /// - [`StoppingError::PreconditionViolated`] if the problem produced a
    ///   NaN fitness, or if a criterion rejects the run state.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        criteria: &CriteriaSet,
    ) -> Result<GaResult<P::Individual>, StoppingError> {
        Self::run_with_cancel(problem, config, criteria, None)
    }

    /// Runs with an optional cancellation flag.
    ///
    /// The flag is checked once per generation, after the criteria. When a
    /// flag is supplied the criteria set may be empty.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        criteria: &CriteriaSet,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual>, StoppingError> {
        config.validate()?;
        if criteria.is_empty() && cancel.is_none() {
            return Err(StoppingError::invalid(
                "criteria",
                "at least one stopping criterion is required without a cancellation flag",
            ));
        }

        let started = Instant::now();
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
        let mut phase = RunPhase::Initialized;
        tracing::debug!(?phase, population_size = config.population_size, ?criteria, "GA run initialized");

        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        evaluate_all(problem, &mut population, config.parallel);
        ensure_comparable(&population, 0)?;

        let elite_count = config.elite_count();
        let mut best = population[best_index(&population)].clone();
        let mut generation = 0u64;
        let mut stagnant = 0u64;
        let mut fitness_history = vec![best.fitness().to_f64()];
        let mut cancelled = false;

        let stopped_by: Vec<String> = loop {
            let state = RunState {
                generation,
                best_fitness: Some(best.fitness().to_f64()),
                stagnant_generations: stagnant,
                elapsed: started.elapsed(),
            };
            let triggered = criteria.triggered(&state)?;
            if !triggered.is_empty() {
                break triggered.into_iter().map(String::from).collect();
            }
            if cancel.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                cancelled = true;
                break Vec::new();
            }

            if phase == RunPhase::Initialized {
                phase = RunPhase::Running;
                tracing::debug!(?phase, "GA run started");
            }

            population = breed(problem, config, &mut population, elite_count, &mut rng);
            generation += 1;
            ensure_comparable(&population, generation)?;

            let candidate = &population[best_index(&population)];
            if compare(candidate, &best).is_lt() {
                let significant = is_significant(
                    best.fitness().to_f64(),
                    candidate.fitness().to_f64(),
                    config.convergence_threshold,
                );
                stagnant = if significant { 0 } else { stagnant + 1 };
                best = candidate.clone();
            } else {
                stagnant += 1;
            }

            fitness_history.push(best.fitness().to_f64());
            problem.on_generation(generation, best.fitness());
            tracing::trace!(generation, best = best.fitness().to_f64(), stagnant, "generation complete");
        };

        phase = RunPhase::Stopped;
        tracing::info!(
            ?phase,
            generations = generation,
            ?stopped_by,
            cancelled,
            best = best.fitness().to_f64(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "GA run stopped"
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: generation,
            stopped_by,
            cancelled,
            fitness_history,
        })
    }
}

/// Produces and evaluates the next generation. Sorts `population` best-first.
fn breed<P: GaProblem, R: Rng>(
    problem: &P,
    config: &GaConfig,
    population: &mut [P::Individual],
    elite_count: usize,
    rng: &mut R,
) -> Vec<P::Individual> {
    population.sort_by(compare);

    let mut offspring = population[..elite_count].to_vec();
    while offspring.len() < config.population_size {
        let first = config.selection.select(population, rng);
        let second = config.selection.select(population, rng);

        let mut children = if rng.random_bool(config.crossover_rate) {
            problem.crossover(&population[first], &population[second], rng)
        } else {
            Vec::new()
        };
        if children.is_empty() {
            children.push(population[first].clone());
        }

        let room = config.population_size - offspring.len();
        for mut child in children.into_iter().take(room) {
            if rng.random_bool(config.mutation_rate) {
                problem.mutate(&mut child, rng);
            }
            offspring.push(child);
        }
    }

    evaluate_all(problem, &mut offspring[elite_count..], config.parallel);
    offspring
}

#[cfg(feature = "parallel")]
fn evaluate_all<P: GaProblem>(problem: &P, individuals: &mut [P::Individual], parallel: bool) {
    use rayon::prelude::*;

    if parallel {
        individuals.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
    } else {
        evaluate_sequential(problem, individuals);
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all<P: GaProblem>(problem: &P, individuals: &mut [P::Individual], _parallel: bool) {
    evaluate_sequential(problem, individuals);
}

fn evaluate_sequential<P: GaProblem>(problem: &P, individuals: &mut [P::Individual]) {
    for ind in individuals.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Total order on fitness shared by sorting, best tracking and improvement checks.
fn compare<I: Individual>(a: &I, b: &I) -> std::cmp::Ordering {
    a.fitness().to_f64().total_cmp(&b.fitness().to_f64())
}

fn best_index<I: Individual>(population: &[I]) -> usize {
    (1..population.len()).fold(0, |best, i| {
        if compare(&population[i], &population[best]).is_lt() {
            i
        } else {
            best
        }
    })
}

/// Rejects a population containing NaN fitness; it has no place in the ordering.
fn ensure_comparable<I: Individual>(population: &[I], generation: u64) -> Result<(), StoppingError> {
    match population.iter().position(|ind| ind.fitness().to_f64().is_nan()) {
        Some(index) => Err(StoppingError::precondition(
            "ga_runner",
            format!("individual {index} has NaN fitness at generation {generation}"),
        )),
        None => Ok(()),
    }
}

/// Whether improving from `old` to `new` resets the stagnation counter.
fn is_significant(old: f64, new: f64, threshold: f64) -> bool {
    if threshold <= 0.0 || old == 0.0 || !old.is_finite() {
        return true;
    }
    (old - new).abs() / old.abs() >= threshold
}
