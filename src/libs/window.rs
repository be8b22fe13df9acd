//! Calendar month windows.
//!
//! A [`MonthWindow`] is the half-open range `[first day of month, first day
//! of next month)`. It scopes both the GitLab issue query and the notes that
//! count towards the report.

use chrono::{Datelike, NaiveDate};
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("year {0} is out of range")]
    InvalidYear(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl MonthWindow {
    pub fn new(year: i32, month: u32) -> Result<Self, WindowError> {
        if !(1..=12).contains(&month) {
            return Err(WindowError::InvalidMonth(month));
        }
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or(WindowError::InvalidYear(year))?;
        let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or(WindowError::InvalidYear(year))?;

        Ok(Self { start, end })
    }

    /// First day of the month, inclusive.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// First day of the following month, exclusive.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub fn month(&self) -> u32 {
        self.start.month()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    pub fn start_iso(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_iso(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

impl Display for MonthWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year(), self.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_regular_month() {
        let window = MonthWindow::new(2024, 8).unwrap();
        assert_eq!(window.start(), date(2024, 8, 1));
        assert_eq!(window.end(), date(2024, 9, 1));
        assert_eq!(window.start_iso(), "2024-08-01");
        assert_eq!(window.end_iso(), "2024-09-01");
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let window = MonthWindow::new(2024, 12).unwrap();
        assert_eq!(window.end(), date(2025, 1, 1));
    }

    #[test]
    fn test_window_is_half_open() {
        let window = MonthWindow::new(2024, 2).unwrap();
        assert!(window.contains(date(2024, 2, 1)));
        assert!(window.contains(date(2024, 2, 29)));
        assert!(!window.contains(date(2024, 3, 1)));
        assert!(!window.contains(date(2024, 1, 31)));
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(MonthWindow::new(2024, 13), Err(WindowError::InvalidMonth(13)));
        assert_eq!(MonthWindow::new(2024, 0), Err(WindowError::InvalidMonth(0)));
    }

    #[test]
    fn test_display_matches_report_header() {
        assert_eq!(MonthWindow::new(2024, 8).unwrap().to_string(), "2024-8");
    }
}
