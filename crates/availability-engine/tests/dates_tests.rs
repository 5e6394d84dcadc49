//! Tests for the civil-calendar helpers behind the calendar views.

use availability_engine::dates::{
    add_weeks, days_in_month, each_day_of_interval, end_of_month, start_of_month, start_of_week,
    week_days,
};
use chrono::{Datelike, NaiveDate, Weekday};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn weeks_start_on_monday() {
    // 2025-09-17 is a Wednesday.
    assert_eq!(start_of_week(date(2025, 9, 17)), date(2025, 9, 15));
    // A Monday is its own week start; a Sunday belongs to the week behind it.
    assert_eq!(start_of_week(date(2025, 9, 15)), date(2025, 9, 15));
    assert_eq!(start_of_week(date(2025, 9, 21)), date(2025, 9, 15));
}

#[test]
fn month_boundaries() {
    assert_eq!(start_of_month(date(2025, 9, 17)), date(2025, 9, 1));
    assert_eq!(end_of_month(date(2025, 9, 17)), date(2025, 9, 30));

    // February across a leap year.
    assert_eq!(end_of_month(date(2024, 2, 10)), date(2024, 2, 29));
    assert_eq!(end_of_month(date(2025, 2, 10)), date(2025, 2, 28));

    // December rolls into the next year for the exclusive bound.
    assert_eq!(end_of_month(date(2025, 12, 5)), date(2025, 12, 31));
}

#[test]
fn days_in_month_covers_the_whole_month_in_order() {
    let days = days_in_month(date(2025, 9, 17));
    assert_eq!(days.len(), 30);
    assert_eq!(days[0], date(2025, 9, 1));
    assert_eq!(days[29], date(2025, 9, 30));
    assert!(days.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn week_days_returns_monday_through_sunday() {
    let days = week_days(date(2025, 9, 17));
    assert_eq!(days.len(), 7);
    assert_eq!(days[0], date(2025, 9, 15));
    assert_eq!(days[0].weekday(), Weekday::Mon);
    assert_eq!(days[6], date(2025, 9, 21));
    assert_eq!(days[6].weekday(), Weekday::Sun);
}

#[test]
fn intervals_are_inclusive_and_empty_when_inverted() {
    let days = each_day_of_interval(date(2025, 9, 29), date(2025, 10, 2));
    assert_eq!(
        days,
        vec![
            date(2025, 9, 29),
            date(2025, 9, 30),
            date(2025, 10, 1),
            date(2025, 10, 2)
        ]
    );

    assert_eq!(
        each_day_of_interval(date(2025, 9, 2), date(2025, 9, 2)),
        vec![date(2025, 9, 2)]
    );
    assert!(each_day_of_interval(date(2025, 9, 3), date(2025, 9, 2)).is_empty());
}

#[test]
fn add_weeks_moves_in_whole_weeks_both_directions() {
    let base = date(2025, 9, 17);
    assert_eq!(add_weeks(base, 2), date(2025, 10, 1));
    assert_eq!(add_weeks(base, -2), date(2025, 9, 3));
    assert_eq!(add_weeks(base, 0), base);
    // The weekday never changes.
    assert_eq!(add_weeks(base, 5).weekday(), base.weekday());
}
