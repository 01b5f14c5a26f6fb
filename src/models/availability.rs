//! Professor availability.

use chrono::Weekday;

use super::{ProfessorId, Shift};
use crate::error::TimetableError;

/// A professor's declared willingness to teach in one day/shift window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Availability {
    /// Professor this slot belongs to.
    pub professor_id: ProfessorId,
    /// Day of the week.
    pub day_of_week: Weekday,
    /// Shift within the day.
    pub shift: Shift,
}

impl Availability {
    /// Creates an availability slot.
    pub fn new(professor_id: ProfessorId, day_of_week: Weekday, shift: Shift) -> Self {
        Self {
            professor_id,
            day_of_week,
            shift,
        }
    }

    /// Builds a slot from stored names such as `("Monday", "Morning")`.
    ///
    /// An unknown shift name yields [`TimetableError::InvalidShiftWindow`].
    pub fn from_names(
        professor_id: ProfessorId,
        day_of_week: &str,
        shift: &str,
    ) -> Result<Self, TimetableError> {
        let day = day_of_week
            .parse::<Weekday>()
            .map_err(|_| TimetableError::InvalidDayOfWeek(day_of_week.to_string()))?;
        let shift = shift.parse::<Shift>()?;
        Ok(Self::new(professor_id, day, shift))
    }

    /// Whether this slot covers the given day and shift.
    #[inline]
    pub fn matches(&self, day_of_week: Weekday, shift: Shift) -> bool {
        self.day_of_week == day_of_week && self.shift == shift
    }
}
