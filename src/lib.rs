//! Pluggable stopping criteria for iterative search.
//!
//! - **Criteria**: pure predicates over the state of a running algorithm
//!   ([`criteria::StoppingCriterion`]), with generation, stagnation, time and
//!   target-fitness variants, combined by logical OR in a
//!   [`criteria::CriteriaSet`].
//! - **GA driver**: a representation-agnostic generational genetic algorithm
//!   ([`ga::GaRunner`]) that owns the run lifecycle and consults a criteria set
//!   after every generation.
//!
//! # Architecture
//!
//! Criteria depend only on the read-only [`criteria::AlgorithmState`] view, so
//! any iterative driver can use them. The GA driver is one such consumer; it
//! snapshots its state into a [`criteria::RunState`] once per generation.
//!
//! # Features
//!
//! - `parallel` (default): evaluate fitness on rayon's thread pool.
//! - `serde`: derives for [`criteria::StoppingConfig`] and [`ga::GaConfig`].

pub mod criteria;
pub mod error;
pub mod ga;

pub use error::StoppingError;
