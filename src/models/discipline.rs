//! Discipline model.

/// Discipline identifier.
pub type DisciplineId = i64;

/// A course unit that can be offered in the timetable.
///
/// Read-only snapshot loaded once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Discipline {
    /// Unique discipline identifier.
    pub id: DisciplineId,
    /// Short catalogue code.
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Credit weight counted against the offer limit.
    pub credits: i32,
    /// Owning course.
    pub course_id: i64,
}

impl Discipline {
    /// Creates a discipline with empty code and name.
    pub fn new(id: DisciplineId, credits: i32, course_id: i64) -> Self {
        Self {
            id,
            code: String::new(),
            name: String::new(),
            credits,
            course_id,
        }
    }

    /// Sets the catalogue code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
