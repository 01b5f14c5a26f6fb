//! Professor model.

use super::DisciplineId;

/// Professor identifier.
pub type ProfessorId = i64;

/// A professor with a weekly hour cap and the disciplines they may teach.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Professor {
    /// Unique professor identifier.
    pub id: ProfessorId,
    /// Human-readable name.
    pub name: String,
    /// Maximum number of class hours this professor may be given.
    pub hours_to_allocate: i32,
    /// Disciplines this professor is eligible to teach.
    pub disciplines: Vec<DisciplineId>,
}

impl Professor {
    /// Creates a professor with no eligible disciplines.
    pub fn new(id: ProfessorId, hours_to_allocate: i32) -> Self {
        Self {
            id,
            name: String::new(),
            hours_to_allocate,
            disciplines: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an eligible discipline.
    pub fn with_discipline(mut self, discipline_id: DisciplineId) -> Self {
        self.disciplines.push(discipline_id);
        self
    }

    /// Whether this professor may teach `discipline_id`.
    #[inline]
    pub fn can_teach(&self, discipline_id: DisciplineId) -> bool {
        self.disciplines.contains(&discipline_id)
    }
}
