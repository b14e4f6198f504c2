//! Generational genetic algorithm driver.
//!
//! The driver owns the run lifecycle and consults a
//! [`CriteriaSet`](crate::criteria::CriteriaSet) after initialization and after
//! every completed generation. Genome representation and variation operators
//! come from the user's [`GaProblem`].
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, selection, operator rates
//! - [`GaRunner`]: executes the loop until a criterion fires or the run is cancelled
//! - [`GaResult`]: best solution, generation count, and which criteria fired
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner, RunPhase};
pub use selection::Selection;
pub use types::{Fitness, GaProblem, Individual};
