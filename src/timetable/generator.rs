//! Random candidate construction and hour-slot matching.
//!
//! [`generate_random_timetable`] walks weeks → weekdays (Mon–Fri) →
//! shifts → disciplines in a fixed order. Randomness only enters through
//! the choice among eligible professors; the hour inside a shift is
//! always the earliest free one ([`next_available_time`]).
//!
//! A tuple that cannot be placed is skipped and counted, never reported
//! as an error.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, TimeDelta, Weekday};
use rand::Rng;

use super::{TimetableConfig, TimetableInput};
use crate::error::{SkipReason, SkipStats};
use crate::models::{
    Availability, Class, DisciplineId, Professor, ProfessorId, Shift, ShiftWindows, Timetable,
};

/// Teaching days of a week, as offsets from its Monday.
const WEEKDAYS_PER_WEEK: u64 = 5;

/// Professors allowed to teach `discipline_id`, in input order.
pub fn eligible_professors(discipline_id: DisciplineId, professors: &[Professor]) -> Vec<&Professor> {
    professors
        .iter()
        .filter(|p| p.can_teach(discipline_id))
        .collect()
}

/// Availability slots declared by one professor, in input order.
pub fn available_slots(professor_id: ProfessorId, availabilities: &[Availability]) -> Vec<&Availability> {
    availabilities
        .iter()
        .filter(|a| a.professor_id == professor_id)
        .collect()
}

/// First slot covering `day_of_week` and `shift`.
pub fn find_matching_slot<'a>(
    shift: Shift,
    slots: &[&'a Availability],
    day_of_week: Weekday,
) -> Option<&'a Availability> {
    slots.iter().copied().find(|s| s.matches(day_of_week, shift))
}

/// Earliest free one-hour slot of `shift` on `date`.
///
/// Hours are scanned in ascending order. An hour is taken when it appears
/// in `occupied` or when any class in `classes` already starts at that
/// (day, shift, instant). Returns `None` once the window is exhausted.
pub fn next_available_time(
    date: NaiveDate,
    windows: &ShiftWindows,
    shift: Shift,
    occupied: &[NaiveDateTime],
    day_of_week: Weekday,
    classes: &[Class],
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    for hour in windows.window(shift).hours() {
        let start = date.and_hms_opt(hour, 0, 0)?;
        if occupied.contains(&start) {
            continue;
        }
        if classes.iter().any(|c| c.occupies(day_of_week, shift, start)) {
            continue;
        }
        let end = start.checked_add_signed(TimeDelta::hours(1))?;
        return Some((start, end));
    }
    None
}

/// Builds one random, best-effort-feasible timetable.
///
/// For every (week, weekday, shift, discipline) tuple an eligible
/// professor is drawn uniformly, their availability for that day and
/// shift is looked up, and the earliest free hour is taken, provided
/// the professor's hour cap still allows it. Skipped tuples are
/// recorded in `stats`. Generation stops early at the end of the
/// representable calendar.
pub fn generate_random_timetable<R: Rng>(
    input: &TimetableInput,
    config: &TimetableConfig,
    stats: &SkipStats,
    rng: &mut R,
) -> Timetable {
    let mut timetable = Timetable::new();
    let mut occupied: HashMap<(ProfessorId, Shift), Vec<NaiveDateTime>> = HashMap::new();
    let mut allocated_hours: HashMap<ProfessorId, f64> = HashMap::new();
    let mut allocated_credits: i64 = 0;

    'weeks: for week in 0..input.weeks_to_generate {
        let days = (week as u64).saturating_mul(7);
        for offset in 0..WEEKDAYS_PER_WEEK {
            let Some(date) = config
                .calendar_start
                .checked_add_days(Days::new(days.saturating_add(offset)))
            else {
                log::warn!(
                    "calendar ends before week {week} from {}; stopping generation",
                    config.calendar_start
                );
                break 'weeks;
            };
            let weekday = date.weekday();

            for shift in Shift::ALL {
                for discipline in &input.disciplines {
                    let eligible = eligible_professors(discipline.id, &input.professors);
                    if eligible.is_empty() {
                        stats.record(SkipReason::NoEligibleProfessor);
                        continue;
                    }
                    let professor = eligible[rng.random_range(0..eligible.len())];

                    let slots = available_slots(professor.id, &input.availabilities);
                    let Some(slot) = find_matching_slot(shift, &slots, weekday) else {
                        stats.record(SkipReason::NoAvailableSlot);
                        continue;
                    };

                    let taken = occupied
                        .get(&(professor.id, slot.shift))
                        .map(Vec::as_slice)
                        .unwrap_or(&[]);
                    let Some((start, end)) = next_available_time(
                        date,
                        &config.shift_windows,
                        slot.shift,
                        taken,
                        slot.day_of_week,
                        &timetable.classes,
                    ) else {
                        stats.record(SkipReason::NoFreeHour);
                        continue;
                    };

                    let duration = (end - start).num_seconds() as f64 / 3600.0;
                    let hours = allocated_hours.entry(professor.id).or_insert(0.0);
                    // Whole hours only, as the cap is an integer.
                    if (*hours + duration) as i64 > i64::from(professor.hours_to_allocate) {
                        stats.record(SkipReason::HourCapExceeded);
                        continue;
                    }
                    *hours += duration;

                    timetable.classes.push(Class {
                        day_of_week: slot.day_of_week,
                        shift: slot.shift,
                        start,
                        end,
                        discipline_id: discipline.id,
                        professor_id: professor.id,
                    });
                    occupied
                        .entry((professor.id, slot.shift))
                        .or_default()
                        .push(start);
                    allocated_credits += i64::from(discipline.credits);
                }
            }
        }
    }

    log::trace!(
        "generated timetable with {} classes, {} credits",
        timetable.len(),
        allocated_credits
    );
    timetable
}
