//! Domain records consumed and produced by the timetable engine.
//!
//! # Input snapshot
//!
//! - [`Discipline`], [`Professor`], [`Availability`]: read-only, loaded once
//!   per run by the caller.
//! - [`Parameterization`]: offer limits and the course-scoped lists the
//!   evaluator checks against.
//!
//! # Output
//!
//! - [`Class`], [`Timetable`]: created by the generator and mutator.
//! - [`Proposal`]: the chosen timetable tagged with semester and course.
//!
//! [`Shift`] and [`ShiftWindows`] define when classes may start.

mod availability;
mod class;
mod discipline;
mod parameterization;
mod professor;
mod shift;
mod timetable;

pub use availability::Availability;
pub use class::Class;
pub use discipline::{Discipline, DisciplineId};
pub use parameterization::{Parameterization, Proposal};
pub use professor::{Professor, ProfessorId};
pub use shift::{HourWindow, Shift, ShiftWindows};
pub use timetable::Timetable;
