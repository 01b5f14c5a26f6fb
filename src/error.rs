//! Error and outcome types.
//!
//! Only malformed input or configuration is an error. Failing to place a
//! single class is an expected outcome of randomized construction and is
//! counted as a [`SkipReason`] instead of being reported.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

/// Errors surfaced to the caller of the timetable engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimetableError {
    /// A shift name is unknown, or a shift's hour window is malformed.
    #[error("invalid shift window: {0}")]
    InvalidShiftWindow(String),

    /// A day-of-week name could not be parsed.
    #[error("invalid day of week: {0}")]
    InvalidDayOfWeek(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The input snapshot violates a hard structural rule
    /// (negative hour cap, negative credits, ...).
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TimetableError>;

/// Why a (week, day, shift, discipline) tuple produced no class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// No professor lists the discipline as eligible.
    NoEligibleProfessor,
    /// The chosen professor declared no availability for the day and shift.
    NoAvailableSlot,
    /// Every hour of the shift window is already taken.
    NoFreeHour,
    /// The class would push the professor over their weekly hour cap.
    HourCapExceeded,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::NoEligibleProfessor => "no eligible professor",
            SkipReason::NoAvailableSlot => "no available slot",
            SkipReason::NoFreeHour => "no free hour",
            SkipReason::HourCapExceeded => "hour cap exceeded",
        };
        f.write_str(s)
    }
}

/// Thread-safe counters of skipped tuples over one engine run.
///
/// Shared by reference between the population initializer and the
/// mutator, so the counters are atomics rather than plain integers.
#[derive(Debug, Default)]
pub struct SkipStats {
    no_eligible_professor: AtomicUsize,
    no_available_slot: AtomicUsize,
    no_free_hour: AtomicUsize,
    hour_cap_exceeded: AtomicUsize,
}

impl SkipStats {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one skipped tuple.
    pub fn record(&self, reason: SkipReason) {
        log::trace!("skipped class candidate: {reason}");
        let counter = match reason {
            SkipReason::NoEligibleProfessor => &self.no_eligible_professor,
            SkipReason::NoAvailableSlot => &self.no_available_slot,
            SkipReason::NoFreeHour => &self.no_free_hour,
            SkipReason::HourCapExceeded => &self.hour_cap_exceeded,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the current count for one reason.
    pub fn count(&self, reason: SkipReason) -> usize {
        let counter = match reason {
            SkipReason::NoEligibleProfessor => &self.no_eligible_professor,
            SkipReason::NoAvailableSlot => &self.no_available_slot,
            SkipReason::NoFreeHour => &self.no_free_hour,
            SkipReason::HourCapExceeded => &self.hour_cap_exceeded,
        };
        counter.load(Ordering::Relaxed)
    }

    /// Takes a plain copy of all counters.
    pub fn snapshot(&self) -> SkipCounts {
        SkipCounts {
            no_eligible_professor: self.count(SkipReason::NoEligibleProfessor),
            no_available_slot: self.count(SkipReason::NoAvailableSlot),
            no_free_hour: self.count(SkipReason::NoFreeHour),
            hour_cap_exceeded: self.count(SkipReason::HourCapExceeded),
        }
    }
}

/// Plain snapshot of [`SkipStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkipCounts {
    /// Tuples whose discipline had no eligible professor.
    pub no_eligible_professor: usize,
    /// Tuples whose professor had no matching availability.
    pub no_available_slot: usize,
    /// Tuples whose shift window was exhausted.
    pub no_free_hour: usize,
    /// Tuples rejected by the professor's hour cap.
    pub hour_cap_exceeded: usize,
}

impl SkipCounts {
    /// Sum over all reasons.
    pub fn total(&self) -> usize {
        self.no_eligible_professor + self.no_available_slot + self.no_free_hour + self.hour_cap_exceeded
    }
}
