//! Evolution orchestrator.
//!
//! [`TimetableEngine`] validates the input, seeds a population of random
//! timetables, evolves it for the configured number of generations and
//! returns the fittest timetable of the final population.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::fitness::{fitness_breakdown, FitnessBreakdown};
use super::problem::TimetableProblem;
use super::{TimetableConfig, TimetableInput};
use crate::error::{Result, SkipCounts, TimetableError};
use crate::ga::GaRunner;
use crate::models::{Availability, Discipline, Parameterization, Professor, Proposal, Timetable};
use crate::validation::validate_input;

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct TimetableOutcome {
    /// Fittest timetable of the final population.
    pub timetable: Timetable,
    /// Sub-scores of `timetable`.
    ///
    /// All zero when `empty_input` is set, so that `breakdown.total()`
    /// equals the reported fitness of `0.0`.
    pub breakdown: FitnessBreakdown,
    /// Construction skips over the whole run.
    pub skips: SkipCounts,
    /// Generations completed.
    pub generations: usize,
    /// Whether the run was cancelled.
    pub cancelled: bool,
    /// Whether the run hit its time limit.
    pub timed_out: bool,
    /// Whether the input had no disciplines, professors or availabilities.
    pub empty_input: bool,
    /// Best population fitness after initialization and each generation.
    pub fitness_history: Vec<f64>,
}

impl TimetableOutcome {
    fn empty() -> Self {
        Self {
            timetable: Timetable::new(),
            breakdown: FitnessBreakdown {
                credit_goals: 0.0,
                distribution: 0.0,
                no_overlaps: 0.0,
                teacher_hours: 0.0,
            },
            skips: SkipCounts::default(),
            generations: 0,
            cancelled: false,
            timed_out: false,
            empty_input: true,
            fitness_history: Vec::new(),
        }
    }
}

/// Runs the timetable GA with a fixed configuration.
///
/// # Usage
///
/// ```ignore
/// let engine = TimetableEngine::new(TimetableConfig::default().with_seed(42))?;
/// let proposal = engine.generate_proposal(&input)?;
/// ```
#[derive(Debug, Clone)]
pub struct TimetableEngine {
    config: TimetableConfig,
}

impl TimetableEngine {
    /// Creates an engine, rejecting an invalid configuration.
    pub fn new(config: TimetableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &TimetableConfig {
        &self.config
    }

    /// Runs to completion.
    pub fn run(&self, input: &TimetableInput) -> Result<TimetableOutcome> {
        self.run_with_cancel(input, None)
    }

    /// Runs until completion, cancellation or the time limit.
    ///
    /// Malformed input fails with [`TimetableError::MalformedInput`].
    /// An empty discipline, professor or availability set is not an error:
    /// the outcome holds an empty timetable with fitness `0.0` and
    /// `empty_input` set.
    pub fn run_with_cancel(
        &self,
        input: &TimetableInput,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TimetableOutcome> {
        check_input(input)?;

        if input.has_empty_set() {
            log::warn!(
                "empty input set ({} disciplines, {} professors, {} availabilities); returning empty timetable",
                input.disciplines.len(),
                input.professors.len(),
                input.availabilities.len()
            );
            return Ok(TimetableOutcome::empty());
        }

        log::info!(
            "generating timetable: {} disciplines, {} professors, {} weeks, population {}, {} generations",
            input.disciplines.len(),
            input.professors.len(),
            input.weeks_to_generate,
            self.config.ga.population_size,
            self.config.ga.max_generations
        );

        let problem = TimetableProblem::new(input, &self.config);
        let result = GaRunner::run_with_cancel(&problem, &self.config.ga, cancel)?;
        let breakdown = fitness_breakdown(&result.best, &input.parameterization);
        let skips = problem.stats().snapshot();

        log::info!(
            "timetable ready: fitness {} with {} classes after {} generations ({} skipped candidates)",
            result.best_fitness,
            result.best.len(),
            result.generations,
            skips.total()
        );

        Ok(TimetableOutcome {
            timetable: result.best,
            breakdown,
            skips,
            generations: result.generations,
            cancelled: result.cancelled,
            timed_out: result.timed_out,
            empty_input: false,
            fitness_history: result.fitness_history,
        })
    }

    /// Runs and wraps the best timetable as a [`Proposal`] for persistence.
    pub fn generate_proposal(&self, input: &TimetableInput) -> Result<Proposal> {
        let outcome = self.run(input)?;
        Ok(Proposal::new(&input.parameterization, outcome.timetable))
    }
}

/// Runs the GA with the default configuration and returns the best timetable.
pub fn run_genetic_algorithm(
    disciplines: Vec<Discipline>,
    professors: Vec<Professor>,
    availabilities: Vec<Availability>,
    parameterization: Parameterization,
    weeks_to_generate: usize,
) -> Result<Timetable> {
    let input = TimetableInput::new(disciplines, professors, availabilities, parameterization)
        .with_weeks(weeks_to_generate);
    let engine = TimetableEngine::new(TimetableConfig::default())?;
    Ok(engine.run(&input)?.timetable)
}

/// Rejects fatal input problems and logs the rest.
fn check_input(input: &TimetableInput) -> Result<()> {
    let Err(errors) = validate_input(input) else {
        return Ok(());
    };

    let mut fatal = Vec::new();
    for e in errors {
        if e.is_fatal() {
            fatal.push(e.message);
        } else {
            log::warn!("input warning: {}", e.message);
        }
    }
    if fatal.is_empty() {
        Ok(())
    } else {
        Err(TimetableError::MalformedInput(fatal.join("; ")))
    }
}
