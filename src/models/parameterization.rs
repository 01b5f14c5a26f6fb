//! Run parameterization and the resulting proposal record.

use super::{Class, Discipline, Professor, Timetable};

/// Scheduling parameters for one course and semester.
///
/// `disciplines` and `professors` are the course-scoped lists used by the
/// fitness evaluator; they may differ from the lists used to build
/// candidates.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameterization {
    /// Parameterization identifier.
    pub id: i64,
    /// Upper bound on credits offered by one timetable.
    pub max_credits_to_offer: i32,
    /// Requested classes per discipline. Carried for the caller; the
    /// evaluator does not score it.
    pub num_classes_per_discipline: i32,
    /// Target semester.
    pub semester_id: i64,
    /// Target course.
    pub course_id: i64,
    /// Disciplines of the course, used for credit lookup.
    pub disciplines: Vec<Discipline>,
    /// Professors of the course, used for the hour-cap check.
    pub professors: Vec<Professor>,
}

impl Parameterization {
    /// Creates a parameterization with empty course lists.
    pub fn new(max_credits_to_offer: i32, semester_id: i64, course_id: i64) -> Self {
        Self {
            max_credits_to_offer,
            semester_id,
            course_id,
            ..Self::default()
        }
    }

    /// Sets the course disciplines.
    pub fn with_disciplines(mut self, disciplines: Vec<Discipline>) -> Self {
        self.disciplines = disciplines;
        self
    }

    /// Sets the course professors.
    pub fn with_professors(mut self, professors: Vec<Professor>) -> Self {
        self.professors = professors;
        self
    }

    /// Sets the requested classes per discipline.
    pub fn with_num_classes_per_discipline(mut self, n: i32) -> Self {
        self.num_classes_per_discipline = n;
        self
    }
}

/// The schedule handed back to the caller for persistence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Proposal {
    /// Target semester.
    pub semester_id: i64,
    /// Target course.
    pub course_id: i64,
    /// Classes of the chosen timetable, in timetable order.
    pub classes: Vec<Class>,
}

impl Proposal {
    /// Builds a proposal from the chosen timetable.
    pub fn new(parameterization: &Parameterization, timetable: Timetable) -> Self {
        Self {
            semester_id: parameterization.semester_id,
            course_id: parameterization.course_id,
            classes: timetable.classes,
        }
    }
}
