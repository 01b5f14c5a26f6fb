//! Timetable crossover and mutation.
//!
//! - [`crossover`]: single-point splice of two parents' class lists
//! - [`mutate`]: per-class reassignment to another eligible professor

use chrono::Datelike;
use rand::Rng;

use super::generator::{available_slots, eligible_professors, find_matching_slot, next_available_time};
use super::{TimetableConfig, TimetableInput};
use crate::error::{SkipReason, SkipStats};
use crate::models::Timetable;

/// Single-point crossover with a random point.
///
/// The point is drawn uniformly from `0..min(len1, len2)`. If either parent
/// has no classes the child is empty. The child's fitness is unset.
pub fn crossover<R: Rng>(parent1: &Timetable, parent2: &Timetable, rng: &mut R) -> Timetable {
    if parent1.is_empty() || parent2.is_empty() {
        return Timetable::new();
    }
    let min_len = parent1.len().min(parent2.len());
    let point = rng.random_range(0..min_len);
    crossover_at(parent1, parent2, point)
}

/// Single-point crossover at a fixed point:
/// `parent1.classes[..point] ++ parent2.classes[point..]`.
///
/// `point` is clamped to both parents' lengths.
pub fn crossover_at(parent1: &Timetable, parent2: &Timetable, point: usize) -> Timetable {
    let point = point.min(parent1.len()).min(parent2.len());
    let mut classes = Vec::with_capacity(parent2.len());
    classes.extend_from_slice(&parent1.classes[..point]);
    classes.extend_from_slice(&parent2.classes[point..]);
    Timetable::from_classes(classes)
}

/// Mutates classes in place, each with probability `config.mutation_rate`.
///
/// A mutated class keeps its discipline, day and shift but gets a randomly
/// drawn eligible professor and the earliest hour of the shift not yet
/// taken by another class on that day. The professor's own occupancy and
/// hour cap are not consulted; conflicts this introduces are left for the
/// evaluator to penalize. When any lookup fails the class is left as is
/// and the failure is recorded in `stats`.
pub fn mutate<R: Rng>(
    timetable: &mut Timetable,
    input: &TimetableInput,
    config: &TimetableConfig,
    stats: &SkipStats,
    rng: &mut R,
) {
    for i in 0..timetable.classes.len() {
        if rng.random::<f64>() >= config.mutation_rate {
            continue;
        }
        let class = timetable.classes[i];

        let eligible = eligible_professors(class.discipline_id, &input.professors);
        if eligible.is_empty() {
            stats.record(SkipReason::NoEligibleProfessor);
            continue;
        }
        let professor = eligible[rng.random_range(0..eligible.len())];

        let slots = available_slots(professor.id, &input.availabilities);
        let Some(slot) = find_matching_slot(class.shift, &slots, class.start.weekday()) else {
            stats.record(SkipReason::NoAvailableSlot);
            continue;
        };

        let Some((start, end)) = next_available_time(
            class.start.date(),
            &config.shift_windows,
            slot.shift,
            &[],
            slot.day_of_week,
            &timetable.classes,
        ) else {
            stats.record(SkipReason::NoFreeHour);
            continue;
        };

        let target = &mut timetable.classes[i];
        target.professor_id = professor.id;
        target.start = start;
        target.end = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, Class, Discipline, Parameterization, Professor, Shift};
    use chrono::{NaiveDate, NaiveDateTime, Timelike, Weekday};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 10, 7)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn class(hour: u32, professor_id: i64, discipline_id: i64) -> Class {
        Class {
            day_of_week: Weekday::Mon,
            shift: Shift::Morning,
            start: at(hour),
            end: at(hour + 1),
            discipline_id,
            professor_id,
        }
    }

    fn timetable(ids: &[i64]) -> Timetable {
        Timetable::from_classes(ids.iter().map(|&id| class(8, id, id)).collect())
    }

    // ---- Crossover ----

    #[test]
    fn test_crossover_at_splices_parents() {
        let a = timetable(&[1, 2, 3, 4]);
        let b = timetable(&[11, 12, 13, 14, 15]);

        let child = crossover_at(&a, &b, 2);
        let ids: Vec<i64> = child.classes.iter().map(|c| c.professor_id).collect();
        assert_eq!(ids, vec![1, 2, 13, 14, 15]);
        assert_eq!(child.fitness, 0.0);
    }

    #[test]
    fn test_crossover_at_zero_is_parent2() {
        let a = timetable(&[1, 2]);
        let b = timetable(&[11, 12, 13]);
        assert_eq!(crossover_at(&a, &b, 0).classes, b.classes);
    }

    #[test]
    fn test_crossover_empty_parent_gives_empty_child() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = timetable(&[1, 2, 3]);
        let empty = Timetable::new();

        assert!(crossover(&a, &empty, &mut rng).is_empty());
        assert!(crossover(&empty, &a, &mut rng).is_empty());
        assert!(crossover(&empty, &empty, &mut rng).is_empty());
    }

    #[test]
    fn test_crossover_child_is_a_splice() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = timetable(&[1, 2, 3]);
        let b = timetable(&[11, 12, 13, 14, 15, 16]);

        for _ in 0..100 {
            let child = crossover(&a, &b, &mut rng);
            assert_eq!(child.len(), b.len());
            let found = (0..a.len()).any(|p| child == crossover_at(&a, &b, p));
            assert!(found, "child is not a valid splice: {child:?}");
        }
    }

    // ---- Mutation ----

    fn mutation_input() -> TimetableInput {
        let disciplines = vec![Discipline::new(10, 4, 1)];
        let professors = vec![
            Professor::new(1, 10).with_discipline(10),
            Professor::new(2, 10).with_discipline(10),
        ];
        let availabilities = vec![
            Availability::new(1, Weekday::Mon, Shift::Morning),
            Availability::new(2, Weekday::Mon, Shift::Morning),
        ];
        TimetableInput::new(disciplines, professors, availabilities, Parameterization::new(20, 1, 1))
    }

    #[test]
    fn test_mutation_rate_zero_is_noop() {
        let input = mutation_input();
        let config = TimetableConfig::default().with_mutation_rate(0.0);
        let stats = SkipStats::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut tt = Timetable::from_classes(vec![class(8, 1, 10)]);
        let before = tt.clone();

        mutate(&mut tt, &input, &config, &stats, &mut rng);
        assert_eq!(tt, before);
        assert_eq!(stats.snapshot().total(), 0);
    }

    #[test]
    fn test_mutation_moves_class_to_next_free_hour() {
        let input = mutation_input();
        let config = TimetableConfig::default().with_mutation_rate(1.0);
        let stats = SkipStats::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut tt = Timetable::from_classes(vec![class(8, 1, 10)]);

        mutate(&mut tt, &input, &config, &stats, &mut rng);

        let c = tt.classes[0];
        // 08:00 is taken by the class itself, so the search lands on 09:00.
        assert_eq!(c.start.hour(), 9);
        assert_eq!(c.end.hour(), 10);
        assert!(c.professor_id == 1 || c.professor_id == 2);
        assert_eq!(c.discipline_id, 10);
        assert_eq!(c.day_of_week, Weekday::Mon);
        assert_eq!(c.shift, Shift::Morning);
        assert_eq!(stats.snapshot().total(), 0);
    }

    #[test]
    fn test_mutation_without_matching_slot_is_noop() {
        let mut input = mutation_input();
        input.availabilities = vec![
            Availability::new(1, Weekday::Tue, Shift::Morning),
            Availability::new(2, Weekday::Mon, Shift::Night),
        ];
        let config = TimetableConfig::default().with_mutation_rate(1.0);
        let stats = SkipStats::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut tt = Timetable::from_classes(vec![class(8, 1, 10)]);
        let before = tt.clone();

        mutate(&mut tt, &input, &config, &stats, &mut rng);
        assert_eq!(tt, before);
        assert_eq!(stats.count(SkipReason::NoAvailableSlot), 1);
    }

    #[test]
    fn test_mutation_full_window_is_noop() {
        let input = mutation_input();
        let config = TimetableConfig::default().with_mutation_rate(1.0);
        let stats = SkipStats::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut tt = Timetable::from_classes((8..12).map(|h| class(h, 1, 10)).collect());
        let before = tt.clone();

        mutate(&mut tt, &input, &config, &stats, &mut rng);
        assert_eq!(tt, before);
        assert_eq!(stats.count(SkipReason::NoFreeHour), 4);
    }

    #[test]
    fn test_mutation_without_eligible_professor_is_noop() {
        let input = mutation_input();
        let config = TimetableConfig::default().with_mutation_rate(1.0);
        let stats = SkipStats::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut tt = Timetable::from_classes(vec![class(8, 1, 77)]);
        let before = tt.clone();

        mutate(&mut tt, &input, &config, &stats, &mut rng);
        assert_eq!(tt, before);
        assert_eq!(stats.count(SkipReason::NoEligibleProfessor), 1);
    }
}
