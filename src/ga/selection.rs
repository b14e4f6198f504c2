//! Parent selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use super::types::{Fitness, Individual};
use rand::Rng;

/// Selection strategy for choosing parents. Assumes minimization.
///
/// ```
/// use u_stopping::ga::Selection;
///
/// assert_eq!(Selection::default(), Selection::Tournament(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Draw `k` individuals with replacement and keep the fittest.
    ///
    /// Larger `k` means stronger pressure; `k = 1` is uniform sampling.
    Tournament(usize),

    /// Linear ranking: the i-th best of `n` has weight `n - i`.
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Returns the index of the selected parent.
    ///
    /// `population` must be non-empty; [`GaConfig::validate`](super::GaConfig::validate)
    /// guarantees this for the driver.
    pub fn select<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> usize {
        debug_assert!(!population.is_empty(), "cannot select from empty population");

        match *self {
            Selection::Tournament(k) => tournament(population, k, rng),
            Selection::Rank => rank(population, rng),
        }
    }
}

fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let n = population.len();
    (1..k.max(1)).fold(rng.random_range(0..n), |winner, _| {
        let challenger = rng.random_range(0..n);
        if population[challenger].fitness() < population[winner].fitness() {
            challenger
        } else {
            winner
        }
    })
}

fn rank<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        population[a]
            .fitness()
            .to_f64()
            .total_cmp(&population[b].fitness().to_f64())
    });

    // Draw an integer ticket over the triangular weights n, n-1, ..., 1.
    // u64 keeps the sum exact on 32-bit targets.
    let size = n as u64;
    let total = size * (size + 1) / 2;
    let mut ticket = rng.random_range(0..total);
    for (position, &index) in order.iter().enumerate() {
        let weight = size - position as u64;
        if ticket < weight {
            return index;
        }
        ticket -= weight;
    }

    order[n - 1]
}
