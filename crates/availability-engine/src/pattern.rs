//! Week numbering and alternating-week evaluation.
//!
//! An intermittent closure rule names a weekday plus the parity of the weeks
//! (counted from a reference start date) on which that weekday is closed.
//! Week numbers are whole 7-day periods on the civil calendar, so the result
//! is independent of time-of-day and timezone. Dates before the reference
//! produce negative week numbers with floor semantics, keeping parity
//! consistent on both sides of the origin.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Which alternating weeks a rule closes, relative to its start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekParity {
    /// Closed on even-numbered weeks (0, 2, 4, ...).
    #[serde(rename = "even-weeks")]
    EvenWeeks,
    /// Closed on odd-numbered weeks (1, 3, 5, ...).
    #[serde(rename = "odd-weeks")]
    OddWeeks,
}

impl FromStr for WeekParity {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "even-weeks" => Ok(WeekParity::EvenWeeks),
            "odd-weeks" => Ok(WeekParity::OddWeeks),
            other => Err(EngineError::InvalidPattern(other.to_string())),
        }
    }
}

impl fmt::Display for WeekParity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekParity::EvenWeeks => f.write_str("even-weeks"),
            WeekParity::OddWeeks => f.write_str("odd-weeks"),
        }
    }
}

/// Count whole 7-day periods elapsed between `start_date` and `date`.
///
/// Negative when `date` precedes `start_date`. Floor division (not
/// truncation) puts the seven days before the start in week -1 rather than
/// week 0, so parity is well-defined for any pair of dates.
pub fn week_number(date: NaiveDate, start_date: NaiveDate) -> i64 {
    (date - start_date).num_days().div_euclid(7)
}

/// Evaluate a single alternation rule against a date.
///
/// Returns `true` when the rule imposes no constraint on `date` — either the
/// weekday does not match, or the date falls on a week of the parity the
/// rule leaves open. Callers asking "does this rule close the date" negate
/// the result.
pub fn intermittently_available(
    date: NaiveDate,
    day_of_week: Weekday,
    pattern: WeekParity,
    start_date: NaiveDate,
) -> bool {
    if date.weekday() != day_of_week {
        return true;
    }

    let is_even = week_number(date, start_date).rem_euclid(2) == 0;
    match pattern {
        WeekParity::EvenWeeks => !is_even,
        WeekParity::OddWeeks => is_even,
    }
}

/// Map the dashboard's 0-6 Sunday-based weekday index to a [`Weekday`].
///
/// This is the boundary where raw numbers enter the typed API; anything
/// outside 0-6 is rejected here so it can never reach resolution.
pub fn weekday_from_index(index: u8) -> Result<Weekday> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        _ => Err(EngineError::InvalidWeekday(index)),
    }
}

/// Inverse of [`weekday_from_index`].
pub fn weekday_index(day: Weekday) -> u8 {
    day.num_days_from_sunday() as u8
}
