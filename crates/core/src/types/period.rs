//! Calendar month windows for sales reporting.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Errors produced when building a [`MonthWindow`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    #[error("month must be between 1 and 12 (got {0})")]
    InvalidMonth(u32),
    #[error("year {0} is out of range")]
    InvalidYear(i32),
}

/// Half-open date range `[first day of month, first day of next month)`.
///
/// December rolls over to January of the following year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthWindow {
    year: i32,
    month: u32,
    #[serde(skip)]
    start: NaiveDate,
    #[serde(skip)]
    end: NaiveDate,
}

impl MonthWindow {
    /// Build the window for `month` (1-12) of `year`.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidMonth` for months outside 1-12, and
    /// `PeriodError::InvalidYear` when the year is outside chrono's range.
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }

        let (end_year, end_month) = if month == 12 {
            (year.checked_add(1).ok_or(PeriodError::InvalidYear(year))?, 1)
        } else {
            (year, month + 1)
        };

        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or(PeriodError::InvalidYear(year))?;
        let end = NaiveDate::from_ymd_opt(end_year, end_month, 1)
            .ok_or(PeriodError::InvalidYear(year))?;

        Ok(Self {
            year,
            month,
            start,
            end,
        })
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// First day of the following month (exclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_february_window() {
        let window = MonthWindow::new(2025, 2).unwrap();
        assert_eq!(window.start(), date(2025, 2, 1));
        assert_eq!(window.end(), date(2025, 3, 1));
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let window = MonthWindow::new(2025, 12).unwrap();
        assert_eq!(window.start(), date(2025, 12, 1));
        assert_eq!(window.end(), date(2026, 1, 1));
    }

    #[test]
    fn test_leap_february_ends_on_march_first() {
        let window = MonthWindow::new(2024, 2).unwrap();
        assert_eq!(window.start(), date(2024, 2, 1));
        assert_eq!(window.end(), date(2024, 3, 1));
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(MonthWindow::new(2025, 0), Err(PeriodError::InvalidMonth(0)));
        assert_eq!(MonthWindow::new(2025, 13), Err(PeriodError::InvalidMonth(13)));
    }

    #[test]
    fn test_serializes_year_and_month_only() {
        let window = MonthWindow::new(2025, 7).unwrap();
        let json = serde_json::to_value(window).unwrap();
        assert_eq!(json, serde_json::json!({"year": 2025, "month": 7}));
    }
}
