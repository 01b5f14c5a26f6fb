//! Timetable GA problem definition.
//!
//! Implements [`GaProblem`] for timetable construction, bridging the
//! input snapshot to the generic GA framework.

use rand::Rng;

use super::fitness::fitness_breakdown;
use super::generator::generate_random_timetable;
use super::operators;
use super::{TimetableConfig, TimetableInput};
use crate::error::SkipStats;
use crate::ga::GaProblem;
use crate::models::Timetable;

/// GA problem over one input snapshot.
///
/// Construction skips are tallied in [`stats`](Self::stats) across the
/// whole run.
pub struct TimetableProblem<'a> {
    input: &'a TimetableInput,
    config: &'a TimetableConfig,
    stats: SkipStats,
}

impl<'a> TimetableProblem<'a> {
    /// Creates a problem for `input`.
    pub fn new(input: &'a TimetableInput, config: &'a TimetableConfig) -> Self {
        Self {
            input,
            config,
            stats: SkipStats::new(),
        }
    }

    /// Skip counters accumulated by candidate construction.
    pub fn stats(&self) -> &SkipStats {
        &self.stats
    }
}

impl GaProblem for TimetableProblem<'_> {
    type Individual = Timetable;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Timetable {
        generate_random_timetable(self.input, self.config, &self.stats, rng)
    }

    fn evaluate(&self, individual: &Timetable) -> f64 {
        fitness_breakdown(individual, &self.input.parameterization).total()
    }

    fn crossover<R: Rng>(&self, parent1: &Timetable, parent2: &Timetable, rng: &mut R) -> Timetable {
        operators::crossover(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&self, individual: &mut Timetable, rng: &mut R) {
        operators::mutate(individual, self.input, self.config, &self.stats, rng);
    }
}
