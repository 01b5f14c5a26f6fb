//! Scheduled class model.

use chrono::{NaiveDateTime, Weekday};

use super::{DisciplineId, ProfessorId, Shift};

/// One scheduled meeting of a discipline with a professor.
///
/// Times are calendar instants, so classes in different weeks never share
/// a start time even when they fall on the same weekday and hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Class {
    /// Day of the week the class meets.
    pub day_of_week: Weekday,
    /// Shift the class belongs to.
    pub shift: Shift,
    /// Start instant (inclusive).
    pub start: NaiveDateTime,
    /// End instant (exclusive).
    pub end: NaiveDateTime,
    /// Discipline taught.
    pub discipline_id: DisciplineId,
    /// Professor teaching.
    pub professor_id: ProfessorId,
}

impl Class {
    /// Class length in (possibly fractional) hours.
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }

    /// Whether this class occupies the given (day, shift, start) slot.
    #[inline]
    pub fn occupies(&self, day_of_week: Weekday, shift: Shift, start: NaiveDateTime) -> bool {
        self.day_of_week == day_of_week && self.shift == shift && self.start == start
    }
}
