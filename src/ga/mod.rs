//! Genetic Algorithm framework.
//!
//! A generic GA engine built on trait-based abstractions. The timetable
//! problem plugs in by implementing [`GaProblem`], which specifies how to
//! create, evaluate, crossover, and mutate individuals.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with associated fitness type
//! - [`GaProblem`]: Problem definition — initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Population size, generation count, tournament size, elitism
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final population's best individual with run statistics
//!
//! Fitness is maximized.
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
pub use runner::{GaResult, GaRunner};
pub use selection::tournament_select;
pub use types::{Fitness, GaProblem, Individual};
