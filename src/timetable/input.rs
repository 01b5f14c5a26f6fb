//! Input snapshot of one timetable run.

use crate::models::{Availability, Discipline, Parameterization, Professor};

/// Everything the engine reads during a run.
///
/// Loaded once by the caller and never modified by the engine.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimetableInput {
    /// Disciplines to place, in iteration order.
    pub disciplines: Vec<Discipline>,
    /// Professors with their eligible disciplines.
    pub professors: Vec<Professor>,
    /// Declared availability slots of all professors.
    pub availabilities: Vec<Availability>,
    /// Offer limits and course-scoped lists for evaluation.
    pub parameterization: Parameterization,
    /// Number of consecutive weeks to generate.
    pub weeks_to_generate: usize,
}

impl TimetableInput {
    /// Creates an input snapshot generating a single week.
    pub fn new(
        disciplines: Vec<Discipline>,
        professors: Vec<Professor>,
        availabilities: Vec<Availability>,
        parameterization: Parameterization,
    ) -> Self {
        Self {
            disciplines,
            professors,
            availabilities,
            parameterization,
            weeks_to_generate: 1,
        }
    }

    /// Sets how many weeks to generate.
    pub fn with_weeks(mut self, weeks: usize) -> Self {
        self.weeks_to_generate = weeks;
        self
    }

    /// Whether any of the construction sets is empty, which makes every
    /// candidate timetable empty.
    pub fn has_empty_set(&self) -> bool {
        self.disciplines.is_empty() || self.professors.is_empty() || self.availabilities.is_empty()
    }
}
