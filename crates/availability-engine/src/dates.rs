//! Civil-calendar helpers for the calendar views.
//!
//! Everything here operates on [`NaiveDate`] — no time-of-day, no timezone —
//! so month grids and week strips behave identically wherever the dashboard
//! runs. Weeks start on Monday, matching the calendar layout.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// The Monday that starts `date`'s week.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

/// The first day of `date`'s month.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// The last day of `date`'s month.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date) + Months::new(1) - Days::new(1)
}

/// Every day of `date`'s month, in order.
pub fn days_in_month(date: NaiveDate) -> Vec<NaiveDate> {
    each_day_of_interval(start_of_month(date), end_of_month(date))
}

/// The seven days of `date`'s Monday-first week.
pub fn week_days(date: NaiveDate) -> Vec<NaiveDate> {
    each_day_of_interval(start_of_week(date), start_of_week(date) + Days::new(6))
}

/// Every day from `start` through `end`, inclusive. Empty when `start > end`.
pub fn each_day_of_interval(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}

/// Shift a date by whole weeks. Negative values move backward.
pub fn add_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    date + chrono::Duration::days(weeks * 7)
}
