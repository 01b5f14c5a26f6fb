//! Shifts and their hour windows.
//!
//! A day is split into three fixed shifts. Each shift maps to a half-open
//! hour window `[start_hour, end_hour)`; a class may start at any whole
//! hour inside it and lasts exactly one hour.

use std::fmt;
use std::str::FromStr;

use crate::error::TimetableError;

/// One of the three daily teaching windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shift {
    /// 08:00–12:00 by default.
    Morning,
    /// 13:00–18:00 by default.
    Afternoon,
    /// 19:00–23:00 by default.
    Night,
}

impl Shift {
    /// All shifts in construction order.
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Night];

    /// Canonical name, as stored in availability records.
    pub fn name(self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Night => "Night",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shift {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Morning" => Ok(Shift::Morning),
            "Afternoon" => Ok(Shift::Afternoon),
            "Night" => Ok(Shift::Night),
            other => Err(TimetableError::InvalidShiftWindow(format!(
                "unknown shift '{other}'"
            ))),
        }
    }
}

/// Half-open window of whole hours, `[start_hour, end_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourWindow {
    /// First hour a class may start at.
    pub start_hour: u32,
    /// Exclusive upper bound on start hours.
    pub end_hour: u32,
}

impl HourWindow {
    /// Creates a window.
    pub const fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Candidate start hours in ascending order.
    pub fn hours(&self) -> std::ops::Range<u32> {
        self.start_hour..self.end_hour
    }

    /// Whether `hour` is a valid start hour for this window.
    #[inline]
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }
}

/// Hour windows for every shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiftWindows {
    /// Morning window.
    pub morning: HourWindow,
    /// Afternoon window.
    pub afternoon: HourWindow,
    /// Night window.
    pub night: HourWindow,
}

impl Default for ShiftWindows {
    fn default() -> Self {
        Self {
            morning: HourWindow::new(8, 12),
            afternoon: HourWindow::new(13, 18),
            night: HourWindow::new(19, 23),
        }
    }
}

impl ShiftWindows {
    /// Window of the given shift.
    pub fn window(&self, shift: Shift) -> HourWindow {
        match shift {
            Shift::Morning => self.morning,
            Shift::Afternoon => self.afternoon,
            Shift::Night => self.night,
        }
    }

    /// Checks every window is non-empty and fits in a day.
    pub fn validate(&self) -> Result<(), TimetableError> {
        for shift in Shift::ALL {
            let w = self.window(shift);
            if w.start_hour >= w.end_hour {
                return Err(TimetableError::InvalidShiftWindow(format!(
                    "{shift} window {}..{} is empty",
                    w.start_hour, w.end_hour
                )));
            }
            if w.end_hour > 24 {
                return Err(TimetableError::InvalidShiftWindow(format!(
                    "{shift} window ends after midnight ({})",
                    w.end_hour
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_shifts() {
        for shift in Shift::ALL {
            assert_eq!(shift.name().parse::<Shift>().unwrap(), shift);
        }
    }

    #[test]
    fn test_parse_unknown_shift_is_recoverable() {
        let err = "Evening".parse::<Shift>().unwrap_err();
        assert!(matches!(err, TimetableError::InvalidShiftWindow(_)));
    }

    #[test]
    fn test_default_windows() {
        let w = ShiftWindows::default();
        assert_eq!(w.window(Shift::Morning).hours().collect::<Vec<_>>(), vec![8, 9, 10, 11]);
        assert_eq!(w.window(Shift::Afternoon).hours().count(), 5);
        assert_eq!(w.window(Shift::Night).hours().count(), 4);
        assert!(w.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_window() {
        let w = ShiftWindows {
            night: HourWindow::new(19, 19),
            ..ShiftWindows::default()
        };
        assert!(matches!(w.validate(), Err(TimetableError::InvalidShiftWindow(_))));
    }

    #[test]
    fn test_validate_rejects_past_midnight() {
        let w = ShiftWindows {
            night: HourWindow::new(19, 25),
            ..ShiftWindows::default()
        };
        assert!(w.validate().is_err());
    }

    #[test]
    fn test_window_contains() {
        let w = HourWindow::new(8, 12);
        assert!(w.contains(8));
        assert!(w.contains(11));
        assert!(!w.contains(12));
        assert!(!w.contains(7));
    }
}
