//! Timetable engine configuration.
//!
//! [`TimetableConfig`] gathers every tunable of a run in one place: the
//! evolutionary loop parameters ([`GaConfig`]), the per-class mutation
//! probability, the shift hour windows, and the calendar anchor.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::TimetableError;
use crate::ga::GaConfig;
use crate::models::ShiftWindows;

/// Monday the first generated week starts on, unless overridden.
pub fn default_calendar_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 7).unwrap_or(NaiveDate::MIN)
}

/// Configuration for a timetable run.
///
/// # Defaults
///
/// | Field            | Default                               |
/// |------------------|---------------------------------------|
/// | population size  | 100                                   |
/// | generations      | 1000                                  |
/// | tournament size  | 5                                     |
/// | elitism          | none                                  |
/// | mutation rate    | 0.01 per class                        |
/// | shift windows    | Morning 08–12, Afternoon 13–18, Night 19–23 |
/// | calendar start   | 2024-10-07 (Monday)                   |
///
/// ```
/// use u_timetable::timetable::TimetableConfig;
///
/// let config = TimetableConfig::default()
///     .with_population_size(30)
///     .with_max_generations(50)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimetableConfig {
    /// Evolutionary loop parameters.
    pub ga: GaConfig,

    /// Probability that any single class is mutated in a child (0.0–1.0).
    pub mutation_rate: f64,

    /// Hour windows of the three shifts.
    pub shift_windows: ShiftWindows,

    /// Date of the Monday that starts week 0.
    pub calendar_start: NaiveDate,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            ga: GaConfig::default(),
            mutation_rate: 0.01,
            shift_windows: ShiftWindows::default(),
            calendar_start: default_calendar_start(),
        }
    }
}

impl TimetableConfig {
    /// Replaces the GA parameters.
    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.ga.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.ga.max_generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.ga.tournament_size = k;
        self
    }

    /// Carries the `n` best timetables over to each next generation.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.ga.elite_count = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.ga.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.ga.time_limit_ms = Some(ms);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.ga.parallel = parallel;
        self
    }

    /// Sets the per-class mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the shift hour windows.
    pub fn with_shift_windows(mut self, windows: ShiftWindows) -> Self {
        self.shift_windows = windows;
        self
    }

    /// Sets the Monday that starts week 0.
    pub fn with_calendar_start(mut self, date: NaiveDate) -> Self {
        self.calendar_start = date;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TimetableError> {
        self.ga.validate()?;
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TimetableError::InvalidConfig(format!(
                "mutation_rate must be within 0.0..=1.0, got {}",
                self.mutation_rate
            )));
        }
        self.shift_windows.validate()?;
        if self.calendar_start.weekday() != Weekday::Mon {
            return Err(TimetableError::InvalidConfig(format!(
                "calendar_start must be a Monday, got {} ({})",
                self.calendar_start,
                self.calendar_start.weekday()
            )));
        }
        Ok(())
    }
}
