//! Temporal types: closed date ranges and the clock abstraction
//!
//! Insurance policies are active over closed calendar-date intervals, and the
//! validity checker bounds acceptable dates by a window around "today". Both
//! concerns live here: `DateRange` models the closed interval, and `Clock`
//! makes the current date injectable so date-boundary tests are deterministic
//! instead of depending on wall-clock execution time.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod { start: String, end: String },
}

/// A closed calendar-date interval: start ≤ date ≤ end
///
/// Both endpoints are inclusive. A single-day range (start == end) is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Returns true if the date lies within the interval, boundaries included
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Source of the current calendar date
///
/// Production code uses [`SystemClock`]; tests pin a date with [`FixedClock`]
/// so window boundaries do not drift with real time.
pub trait Clock: Send + Sync + 'static {
    fn today(&self) -> NaiveDate;
}

/// Reads the current date from the system clock (UTC)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to a settable date, for tests
#[derive(Debug)]
pub struct FixedClock {
    today: Mutex<NaiveDate>,
}

impl FixedClock {
    /// Creates a clock pinned at the given date
    pub fn at(date: NaiveDate) -> Self {
        Self {
            today: Mutex::new(date),
        }
    }

    /// Moves the pinned date, e.g. to simulate the window sliding daily
    pub fn set_today(&self, date: NaiveDate) {
        *self.today.lock().expect("clock lock poisoned") = date;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().expect("clock lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_contains_boundaries() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        assert!(range.contains(date(2024, 1, 1)));
        assert!(range.contains(date(2024, 12, 31)));
        assert!(range.contains(date(2024, 6, 15)));
        assert!(!range.contains(date(2023, 12, 31)));
        assert!(!range.contains(date(2025, 1, 1)));
    }

    #[test]
    fn test_date_range_single_day() {
        let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 1)).unwrap();
        assert!(range.contains(date(2024, 3, 1)));
        assert!(!range.contains(date(2024, 3, 2)));
    }

    #[test]
    fn test_date_range_rejects_inverted() {
        let result = DateRange::new(date(2024, 12, 31), date(2024, 1, 1));
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_fixed_clock_moves() {
        let clock = FixedClock::at(date(2025, 6, 15));
        assert_eq!(clock.today(), date(2025, 6, 15));
        clock.set_today(date(2025, 6, 16));
        assert_eq!(clock.today(), date(2025, 6, 16));
    }
}
