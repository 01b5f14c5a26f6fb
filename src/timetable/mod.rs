//! Timetable construction on top of the GA framework.
//!
//! # Pipeline
//!
//! 1. [`TimetableEngine`] validates the [`TimetableInput`] snapshot
//! 2. [`generator`] builds a population of random, best-effort-feasible
//!    timetables
//! 3. [`fitness`] scores each timetable against four pass/fail criteria
//! 4. [`operators`] recombine and perturb timetables between generations
//! 5. The fittest timetable of the final population is returned
//!
//! [`run_genetic_algorithm`] wraps the whole pipeline with default settings.

mod config;
mod engine;
pub mod fitness;
pub mod generator;
mod input;
pub mod operators;
mod problem;

pub use config::{default_calendar_start, TimetableConfig};
pub use engine::{run_genetic_algorithm, TimetableEngine, TimetableOutcome};
pub use fitness::{evaluate_fitness, FitnessBreakdown};
pub use input::TimetableInput;
pub use problem::TimetableProblem;
