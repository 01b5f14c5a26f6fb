//! Timetable (candidate solution) model.

use chrono::{NaiveDateTime, Weekday};

use super::{Class, ProfessorId, Shift};
use crate::ga::Individual;

/// A candidate weekly schedule: ordered classes plus a fitness score.
///
/// Class order reflects construction order only. `fitness` is `0.0`
/// until the timetable has been evaluated.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timetable {
    /// Scheduled classes.
    pub classes: Vec<Class>,
    /// Additive score in `0.0..=4.0`, higher is better.
    pub fitness: f64,
}

impl Timetable {
    /// Creates an empty, unevaluated timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unevaluated timetable from classes.
    pub fn from_classes(classes: Vec<Class>) -> Self {
        Self {
            classes,
            fitness: 0.0,
        }
    }

    /// Number of classes.
    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether no class is scheduled.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Whether any class already occupies the (day, shift, start) slot.
    pub fn is_class_scheduled(&self, day_of_week: Weekday, shift: Shift, start: NaiveDateTime) -> bool {
        self.classes
            .iter()
            .any(|c| c.occupies(day_of_week, shift, start))
    }

    /// Total scheduled hours for one professor.
    pub fn hours_for(&self, professor_id: ProfessorId) -> f64 {
        self.classes
            .iter()
            .filter(|c| c.professor_id == professor_id)
            .map(Class::duration_hours)
            .sum()
    }
}

impl Individual for Timetable {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}
