//! Signed time accounting for GitLab time-tracking notes.
//!
//! GitLab records manual time tracking as system notes such as
//! `added 2h 30m of time spent at 2024-08-01` or
//! `subtracted 1h of time spent at 2024-08-02`. This module turns such a
//! body into a [`SpentTime`], a signed number of seconds that can be summed
//! across notes, issues and projects.
//!
//! ## Token rules
//!
//! - the body is split on whitespace;
//! - `added` switches to add mode, `subtracted` to subtract mode;
//!   add mode is the starting mode of every note;
//! - `<n>h` adds or subtracts `n` hours, `<n>m` minutes;
//! - words that merely end in `h` or `m` (`with`, `month`) are ignored,
//!   while a numeric-looking token that does not parse (`2.5h`) or does not
//!   fit in the seconds range is an error.
//!
//! ```rust
//! use glspent::libs::spent::{parse_note_body, SpentTime};
//!
//! let spent = parse_note_body("added 2h subtracted 1h").unwrap();
//! assert_eq!(spent, SpentTime::from_seconds(3600));
//! ```

use std::fmt::{self, Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use thiserror::Error;

/// Word that marks a note body as a time-tracking entry.
pub const TIME_TRACKING_MARKER: &str = "spent";

const ADD_KEYWORD: &str = "added";
const SUBTRACT_KEYWORD: &str = "subtracted";
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_MINUTE: i64 = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid duration token '{0}'")]
    InvalidDuration(String),
}

/// Signed amount of tracked time in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpentTime(i64);

/// Direction applied to the durations that follow a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Add,
    Subtract,
}

impl SpentTime {
    pub const ZERO: SpentTime = SpentTime(0);

    pub fn from_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    pub fn from_hours(hours: i64) -> Self {
        Self(hours * SECONDS_PER_HOUR)
    }

    pub fn from_minutes(minutes: i64) -> Self {
        Self(minutes * SECONDS_PER_MINUTE)
    }

    pub fn seconds(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Whole hours, rounded towards negative infinity.
    pub fn hours(&self) -> i64 {
        self.0.div_euclid(SECONDS_PER_HOUR)
    }

    /// Minutes left over after [`SpentTime::hours`], always in `0..60`.
    pub fn minutes(&self) -> i64 {
        self.0.rem_euclid(SECONDS_PER_HOUR) / SECONDS_PER_MINUTE
    }

    /// Adds or subtracts `delta`; `None` if the result leaves the `i64` range.
    fn apply(self, mode: Mode, delta: SpentTime) -> Option<SpentTime> {
        match mode {
            Mode::Add => self.0.checked_add(delta.0),
            Mode::Subtract => self.0.checked_sub(delta.0),
        }
        .map(SpentTime)
    }
}

impl Display for SpentTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} hours {} minutes", self.hours(), self.minutes())
    }
}

impl Add for SpentTime {
    type Output = SpentTime;

    fn add(self, rhs: SpentTime) -> SpentTime {
        SpentTime(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for SpentTime {
    fn add_assign(&mut self, rhs: SpentTime) {
        *self = *self + rhs;
    }
}

impl Sum for SpentTime {
    fn sum<I: Iterator<Item = SpentTime>>(iter: I) -> SpentTime {
        iter.fold(SpentTime::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a SpentTime> for SpentTime {
    fn sum<I: Iterator<Item = &'a SpentTime>>(iter: I) -> SpentTime {
        iter.copied().sum()
    }
}

/// Returns `true` when the note body carries a time-tracking marker.
pub fn is_time_tracking(body: &str) -> bool {
    body.contains(TIME_TRACKING_MARKER)
}

/// Parses the net signed time recorded in a note body.
pub fn parse_note_body(body: &str) -> Result<SpentTime, ParseError> {
    let mut mode = Mode::Add;
    let mut total = SpentTime::ZERO;

    for token in body.split_whitespace() {
        match token {
            ADD_KEYWORD => mode = Mode::Add,
            SUBTRACT_KEYWORD => mode = Mode::Subtract,
            _ => {
                if let Some(delta) = parse_duration_token(token)? {
                    total = total
                        .apply(mode, delta)
                        .ok_or_else(|| ParseError::InvalidDuration(token.to_string()))?;
                }
            }
        }
    }

    Ok(total)
}

/// Parses a single `<n>h` / `<n>m` token.
///
/// Returns `Ok(None)` for tokens that are not durations at all.
fn parse_duration_token(token: &str) -> Result<Option<SpentTime>, ParseError> {
    let (amount, unit_seconds) = if let Some(amount) = token.strip_suffix('h') {
        (amount, SECONDS_PER_HOUR)
    } else if let Some(amount) = token.strip_suffix('m') {
        (amount, SECONDS_PER_MINUTE)
    } else {
        return Ok(None);
    };

    if !looks_numeric(amount) {
        return Ok(None);
    }

    amount
        .parse::<i64>()
        .ok()
        .and_then(|value| value.checked_mul(unit_seconds))
        .map(|seconds| Some(SpentTime::from_seconds(seconds)))
        .ok_or_else(|| ParseError::InvalidDuration(token.to_string()))
}

fn looks_numeric(amount: &str) -> bool {
    let digits = amount.strip_prefix(['+', '-']).unwrap_or(amount);
    digits.chars().next().is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_hours_and_minutes() {
        assert_eq!(parse_note_body("added 2h 30m").unwrap().seconds(), 9000);
    }

    #[test]
    fn test_added_then_subtracted() {
        assert_eq!(parse_note_body("added 2h subtracted 1h").unwrap().seconds(), 3600);
    }

    #[test]
    fn test_gitlab_system_note_layout() {
        let spent = parse_note_body("added 1h 15m of time spent at 2024-08-12").unwrap();
        assert_eq!(spent, SpentTime::from_minutes(75));
    }

    #[test]
    fn test_subtract_mode_persists_across_tokens() {
        let spent = parse_note_body("subtracted 1h 30m of time spent").unwrap();
        assert_eq!(spent.seconds(), -5400);
    }

    #[test]
    fn test_default_mode_is_add() {
        assert_eq!(parse_note_body("3h").unwrap(), SpentTime::from_hours(3));
    }

    #[test]
    fn test_words_ending_in_unit_letters_are_ignored() {
        let spent = parse_note_body("spent time with them this month: added 1h").unwrap();
        assert_eq!(spent, SpentTime::from_hours(1));
    }

    #[test]
    fn test_malformed_duration_is_rejected() {
        assert_eq!(
            parse_note_body("added 2.5h of time spent"),
            Err(ParseError::InvalidDuration("2.5h".to_string()))
        );
    }

    #[test]
    fn test_out_of_range_duration_is_rejected() {
        assert_eq!(
            parse_note_body("added 9999999999999999h of time spent"),
            Err(ParseError::InvalidDuration("9999999999999999h".to_string()))
        );
    }

    #[test]
    fn test_overflowing_total_is_rejected() {
        let body = "added 2562047788015215h 2562047788015215h";
        assert_eq!(parse_note_body(body), Err(ParseError::InvalidDuration("2562047788015215h".to_string())));
    }

    #[test]
    fn test_sum_saturates() {
        let values = [SpentTime::from_seconds(i64::MAX), SpentTime::from_hours(1)];
        assert_eq!(values.iter().sum::<SpentTime>(), SpentTime::from_seconds(i64::MAX));
    }

    #[test]
    fn test_marker_detection() {
        assert!(is_time_tracking("added 1h of time spent"));
        assert!(!is_time_tracking("added 1h"));
    }

    #[test]
    fn test_hours_and_minutes_split() {
        let spent = SpentTime::from_seconds(9000);
        assert_eq!((spent.hours(), spent.minutes()), (2, 30));
        assert_eq!(spent.to_string(), "2 hours 30 minutes");
    }

    #[test]
    fn test_negative_split_uses_floor_division() {
        let spent = SpentTime::from_seconds(-1800);
        assert_eq!((spent.hours(), spent.minutes()), (-1, 30));
    }

    #[test]
    fn test_sum() {
        let values = [SpentTime::from_hours(1), SpentTime::from_minutes(-30), SpentTime::from_minutes(45)];
        assert_eq!(values.iter().sum::<SpentTime>(), SpentTime::from_minutes(75));
    }
}
