//! Fitness evaluation.
//!
//! Four independent pass/fail criteria, each worth exactly `0.0` or
//! `1.0`, summed into a score in `0.0..=4.0`:
//!
//! | Criterion      | Passes when                                              |
//! |----------------|----------------------------------------------------------|
//! | credit goals   | credits of all scheduled classes ≤ `max_credits_to_offer` |
//! | distribution   | always (reserved for balancing rules)                    |
//! | no overlaps    | no two classes share (day, shift, start) and professor or discipline |
//! | teacher hours  | no course professor exceeds their whole-hour cap         |
//!
//! A single violation fails its whole criterion.

use std::collections::{HashMap, HashSet};

use crate::models::{Parameterization, ProfessorId, Timetable};

/// Per-criterion scores of one timetable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessBreakdown {
    /// Credit-goal compliance.
    pub credit_goals: f64,
    /// Distribution placeholder.
    pub distribution: f64,
    /// No-overlap compliance.
    pub no_overlaps: f64,
    /// Teacher-hour compliance.
    pub teacher_hours: f64,
}

impl FitnessBreakdown {
    /// Additive fitness, `0.0..=4.0`.
    pub fn total(&self) -> f64 {
        self.credit_goals + self.distribution + self.no_overlaps + self.teacher_hours
    }
}

/// Scores every criterion without touching the timetable.
pub fn fitness_breakdown(timetable: &Timetable, parameterization: &Parameterization) -> FitnessBreakdown {
    FitnessBreakdown {
        credit_goals: evaluate_credit_goals(timetable, parameterization),
        distribution: evaluate_distribution(timetable),
        no_overlaps: evaluate_no_overlaps(timetable),
        teacher_hours: evaluate_teacher_hours(timetable, parameterization),
    }
}

/// Scores the timetable and stores the result in its `fitness` field.
pub fn evaluate_fitness(timetable: &mut Timetable, parameterization: &Parameterization) -> f64 {
    let fitness = fitness_breakdown(timetable, parameterization).total();
    timetable.fitness = fitness;
    fitness
}

/// `1.0` when the credits of all scheduled classes fit the offer limit.
///
/// Credits are counted per class, so a discipline taught twice counts
/// twice. Classes of disciplines outside the parameterization count zero.
pub fn evaluate_credit_goals(timetable: &Timetable, parameterization: &Parameterization) -> f64 {
    let mut credits_by_discipline: HashMap<i64, i64> = HashMap::new();
    for d in &parameterization.disciplines {
        *credits_by_discipline.entry(d.id).or_insert(0) += i64::from(d.credits);
    }

    let total: i64 = timetable
        .classes
        .iter()
        .filter_map(|c| credits_by_discipline.get(&c.discipline_id))
        .sum();

    if total <= i64::from(parameterization.max_credits_to_offer) {
        1.0
    } else {
        0.0
    }
}

/// Always `1.0`.
pub fn evaluate_distribution(_timetable: &Timetable) -> f64 {
    1.0
}

/// `1.0` unless two classes share (day, shift, start) together with their
/// professor or their discipline.
pub fn evaluate_no_overlaps(timetable: &Timetable) -> f64 {
    let mut by_professor = HashSet::with_capacity(timetable.len());
    let mut by_discipline = HashSet::with_capacity(timetable.len());

    for c in &timetable.classes {
        let slot = (c.day_of_week, c.shift, c.start);
        if !by_professor.insert((slot, c.professor_id)) || !by_discipline.insert((slot, c.discipline_id)) {
            return 0.0;
        }
    }
    1.0
}

/// `1.0` unless some professor of the parameterization is scheduled for
/// more whole hours than their cap.
pub fn evaluate_teacher_hours(timetable: &Timetable, parameterization: &Parameterization) -> f64 {
    let mut hours: HashMap<ProfessorId, f64> = HashMap::new();
    for c in &timetable.classes {
        *hours.entry(c.professor_id).or_insert(0.0) += c.duration_hours();
    }

    let over_cap = parameterization.professors.iter().any(|p| {
        let scheduled = hours.get(&p.id).copied().unwrap_or(0.0);
        scheduled as i64 > i64::from(p.hours_to_allocate)
    });

    if over_cap {
        0.0
    } else {
        1.0
    }
}
