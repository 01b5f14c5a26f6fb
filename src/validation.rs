//! Input validation for timetable runs.
//!
//! Checks structural integrity of the input snapshot before generation.
//! Detects:
//! - Duplicate discipline and professor IDs
//! - Negative hour caps, credits and credit limits
//! - Eligible-discipline references to unknown disciplines
//! - Availabilities of unknown professors
//!
//! Only the negative-value kinds are fatal (see
//! [`ValidationErrorKind::is_fatal`]). The rest are reported so callers can
//! log them; generation copes with them by skipping.

use std::collections::HashSet;

use crate::timetable::TimetableInput;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two disciplines or two professors share the same ID.
    DuplicateId,
    /// A professor lists a discipline that doesn't exist.
    UnknownDiscipline,
    /// An availability belongs to a professor that doesn't exist.
    UnknownProfessor,
    /// A professor's hour cap is negative.
    NegativeHourCap,
    /// A discipline's credit value is negative.
    NegativeCredits,
    /// The parameterization's credit limit is negative.
    NegativeMaxCredits,
}

impl ValidationErrorKind {
    /// Whether this kind makes the input unusable.
    pub fn is_fatal(self) -> bool {
        matches!(
            self,
            Self::NegativeHourCap | Self::NegativeCredits | Self::NegativeMaxCredits
        )
    }
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether this error makes the input unusable.
    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }
}

/// Validates the input snapshot of a timetable run.
///
/// Checks:
/// 1. No duplicate discipline IDs
/// 2. No duplicate professor IDs
/// 3. No negative credits (construction and course lists)
/// 4. No negative hour caps (construction and course lists)
/// 5. Non-negative `max_credits_to_offer`
/// 6. Eligible disciplines exist in the discipline list
/// 7. Availabilities belong to known professors
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(input: &TimetableInput) -> ValidationResult {
    let mut errors = Vec::new();

    let mut discipline_ids = HashSet::new();
    for d in &input.disciplines {
        if !discipline_ids.insert(d.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate discipline ID: {}", d.id),
            ));
        }
    }

    let mut professor_ids = HashSet::new();
    for p in &input.professors {
        if !professor_ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate professor ID: {}", p.id),
            ));
        }
    }

    let param = &input.parameterization;
    for d in input.disciplines.iter().chain(&param.disciplines) {
        if d.credits < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeCredits,
                format!("Discipline {} has negative credits: {}", d.id, d.credits),
            ));
        }
    }

    for p in input.professors.iter().chain(&param.professors) {
        if p.hours_to_allocate < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeHourCap,
                format!(
                    "Professor {} has negative hours to allocate: {}",
                    p.id, p.hours_to_allocate
                ),
            ));
        }
    }

    if param.max_credits_to_offer < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeMaxCredits,
            format!(
                "Parameterization {} has negative max credits: {}",
                param.id, param.max_credits_to_offer
            ),
        ));
    }

    for p in &input.professors {
        for did in &p.disciplines {
            if !discipline_ids.contains(did) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDiscipline,
                    format!("Professor {} lists unknown discipline {}", p.id, did),
                ));
            }
        }
    }

    for a in &input.availabilities {
        if !professor_ids.contains(&a.professor_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownProfessor,
                format!(
                    "Availability {} {} references unknown professor {}",
                    a.day_of_week, a.shift, a.professor_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, Discipline, Parameterization, Professor, Shift};
    use chrono::Weekday;

    fn valid_input() -> TimetableInput {
        TimetableInput::new(
            vec![Discipline::new(10, 4, 1), Discipline::new(20, 2, 1)],
            vec![
                Professor::new(1, 8).with_discipline(10),
                Professor::new(2, 8).with_discipline(20),
            ],
            vec![
                Availability::new(1, Weekday::Mon, Shift::Morning),
                Availability::new(2, Weekday::Tue, Shift::Night),
            ],
            Parameterization::new(20, 1, 1),
        )
    }

    fn kinds(input: &TimetableInput) -> Vec<ValidationErrorKind> {
        match validate_input(input) {
            Ok(()) => vec![],
            Err(errors) => errors.into_iter().map(|e| e.kind).collect(),
        }
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&valid_input()).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_input(&TimetableInput::default()).is_ok());
    }

    #[test]
    fn test_duplicate_ids() {
        let mut input = valid_input();
        input.disciplines.push(Discipline::new(10, 4, 1));
        input.professors.push(Professor::new(2, 8));

        let kinds = kinds(&input);
        assert_eq!(
            kinds,
            vec![ValidationErrorKind::DuplicateId, ValidationErrorKind::DuplicateId]
        );
        assert!(kinds.iter().all(|k| !k.is_fatal()));
    }

    #[test]
    fn test_negative_values_are_fatal() {
        let mut input = valid_input();
        input.disciplines[0].credits = -1;
        input.professors[1].hours_to_allocate = -3;
        input.parameterization.max_credits_to_offer = -5;

        let errors = validate_input(&input).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(ValidationError::is_fatal));
        assert!(errors[1].message.contains("Professor 2"));
    }

    #[test]
    fn test_negative_values_in_course_lists() {
        let mut input = valid_input();
        input.parameterization.professors = vec![Professor::new(9, -1)];

        assert_eq!(kinds(&input), vec![ValidationErrorKind::NegativeHourCap]);
    }

    #[test]
    fn test_unknown_references() {
        let mut input = valid_input();
        input.professors[0].disciplines.push(99);
        input
            .availabilities
            .push(Availability::new(42, Weekday::Fri, Shift::Afternoon));

        let errors = validate_input(&input).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::UnknownDiscipline,
                ValidationErrorKind::UnknownProfessor
            ]
        );
        assert!(errors.iter().all(|e| !e.is_fatal()));
        assert!(errors[1].message.contains("unknown professor 42"));
    }
}
