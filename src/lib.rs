//! Stochastic course timetable generation.
//!
//! Builds weekly class timetables (which professor teaches which
//! discipline on which day, shift and hour) with a genetic algorithm:
//!
//! - **Models**: disciplines, professors, availability slots, classes,
//!   timetables and the proposal handed back for persistence.
//! - **Genetic Algorithm (GA)**: a generic, trait-based evolutionary
//!   engine with tournament selection, optional elitism, cancellation and
//!   wall-clock limits.
//! - **Timetable**: the domain problem plugged into the GA, covering random
//!   construction, slot matching, fitness evaluation, crossover and
//!   mutation.
//! - **Validation**: structural checks of the input snapshot.
//!
//! # Quick start
//!
//! ```
//! use chrono::Weekday;
//! use u_timetable::models::{Availability, Discipline, Parameterization, Professor, Shift};
//! use u_timetable::timetable::{TimetableConfig, TimetableEngine, TimetableInput};
//!
//! let disciplines = vec![Discipline::new(1, 4, 1)];
//! let professors = vec![Professor::new(1, 8).with_discipline(1)];
//! let availabilities = vec![Availability::new(1, Weekday::Mon, Shift::Morning)];
//! let param = Parameterization::new(20, 1, 1)
//!     .with_disciplines(disciplines.clone())
//!     .with_professors(professors.clone());
//! let input = TimetableInput::new(disciplines, professors, availabilities, param);
//!
//! let config = TimetableConfig::default()
//!     .with_population_size(10)
//!     .with_max_generations(5)
//!     .with_seed(7);
//! let engine = TimetableEngine::new(config).unwrap();
//! let outcome = engine.run(&input).unwrap();
//! assert_eq!(outcome.timetable.len(), 1);
//! assert_eq!(outcome.timetable.fitness, 4.0);
//! ```
//!
//! # Logging
//!
//! Diagnostics go through the `log` facade. The crate never installs a
//! logger.

pub mod error;
pub mod ga;
pub mod models;
pub mod timetable;
pub mod validation;

pub use error::{Result, SkipCounts, SkipReason, SkipStats, TimetableError};
