//! Weekly working-hours configuration.
//!
//! One open/closed flag and a list of open time ranges per weekday. The
//! resolver never reads this — slot-level availability is a separate
//! concern — but the configuration screens edit it and the day views render
//! it. Exactly one entry per weekday is guaranteed by construction and
//! re-checked when deserializing foreign data.

use chrono::{NaiveTime, Weekday};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, Result};

/// An open interval within a day. `start` strictly precedes `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    /// Build a range, rejecting `end <= start`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(EngineError::InvalidTimeRange { start, end })
        }
    }
}

/// Literal time-of-day, checked at compile time.
const fn hm(hour: u32, min: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, 0) {
        Some(t) => t,
        None => panic!("invalid literal time"),
    }
}

/// The range the UI seeds when a day is first opened.
const SEED_RANGE: TimeRange = TimeRange {
    start: hm(9, 0),
    end: hm(17, 0),
};

/// Hours for one weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHours {
    pub is_open: bool,
    /// Open ranges, meaningful only while `is_open`. May be empty even when
    /// open ("no slots configured").
    pub ranges: Vec<TimeRange>,
}

impl DayHours {
    pub fn closed() -> Self {
        Self {
            is_open: false,
            ranges: Vec::new(),
        }
    }

    pub fn open(ranges: Vec<TimeRange>) -> Self {
        Self {
            is_open: true,
            ranges,
        }
    }
}

/// Per-weekday hours, exactly one entry per weekday.
///
/// Stored Monday-first to match the calendar layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: [DayHours; 7],
}

impl WeeklySchedule {
    /// Every day closed.
    pub fn closed() -> Self {
        Self {
            days: std::array::from_fn(|_| DayHours::closed()),
        }
    }

    /// The standard split shift: Monday-Saturday 09:00-13:00 and
    /// 16:00-20:00, Sunday closed.
    pub fn standard() -> Self {
        Self::preset(&[
            TimeRange {
                start: hm(9, 0),
                end: hm(13, 0),
            },
            TimeRange {
                start: hm(16, 0),
                end: hm(20, 0),
            },
        ])
    }

    /// A continuous day: Monday-Saturday 09:00-18:00, Sunday closed.
    pub fn continuous() -> Self {
        Self::preset(&[TimeRange {
            start: hm(9, 0),
            end: hm(18, 0),
        }])
    }

    fn preset(ranges: &[TimeRange]) -> Self {
        let mut schedule = Self::closed();
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ] {
            *schedule.day_mut(day) = DayHours::open(ranges.to_vec());
        }
        schedule
    }

    pub fn day(&self, day: Weekday) -> &DayHours {
        &self.days[day.num_days_from_monday() as usize]
    }

    fn day_mut(&mut self, day: Weekday) -> &mut DayHours {
        &mut self.days[day.num_days_from_monday() as usize]
    }

    /// Open or close a day. Opening a closed day seeds the default
    /// 09:00-17:00 range; closing a day clears its ranges.
    pub fn set_open(&mut self, day: Weekday, open: bool) {
        let hours = self.day_mut(day);
        if open && !hours.is_open && hours.ranges.is_empty() {
            hours.ranges.push(SEED_RANGE);
        }
        if !open {
            hours.ranges.clear();
        }
        hours.is_open = open;
    }

    /// Append an open range to a day.
    pub fn add_range(&mut self, day: Weekday, range: TimeRange) {
        self.day_mut(day).ranges.push(range);
    }

    /// Remove a day's range by index. Out-of-range index is a no-op.
    pub fn remove_range(&mut self, day: Weekday, index: usize) -> bool {
        let ranges = &mut self.day_mut(day).ranges;
        if index < ranges.len() {
            ranges.remove(index);
            true
        } else {
            false
        }
    }

    /// Replace a day's range by index. Out-of-range index is a no-op.
    pub fn set_range(&mut self, day: Weekday, index: usize, range: TimeRange) -> bool {
        match self.day_mut(day).ranges.get_mut(index) {
            Some(slot) => {
                *slot = range;
                true
            }
            None => false,
        }
    }

    /// Copy one day's flag and ranges onto another day.
    pub fn copy_day(&mut self, from: Weekday, to: Weekday) {
        if from == to {
            return;
        }
        let source = self.day(from).clone();
        *self.day_mut(to) = source;
    }

    /// Copy one day's flag and ranges onto every other day.
    pub fn copy_to_all(&mut self, from: Weekday) {
        let source = self.day(from).clone();
        for hours in &mut self.days {
            *hours = source.clone();
        }
    }

    /// Days in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayHours)> {
        self.days
            .iter()
            .enumerate()
            .map(|(index, hours)| (weekday_from_monday_index(index), hours))
    }
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::standard()
    }
}

fn weekday_from_monday_index(index: usize) -> Weekday {
    match index {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Wire shape for one weekday entry.
#[derive(Serialize, Deserialize)]
struct DayRecord {
    day: String,
    is_open: bool,
    #[serde(default)]
    ranges: Vec<TimeRange>,
}

impl Serialize for WeeklySchedule {
    fn serialize<S: Serializer>(&self, ser: S) -> std::result::Result<S::Ok, S::Error> {
        let records: Vec<DayRecord> = self
            .iter()
            .map(|(day, hours)| DayRecord {
                day: weekday_name(day).to_string(),
                is_open: hours.is_open,
                ranges: hours.ranges.clone(),
            })
            .collect();
        records.serialize(ser)
    }
}

impl<'de> Deserialize<'de> for WeeklySchedule {
    fn deserialize<D: Deserializer<'de>>(de: D) -> std::result::Result<Self, D::Error> {
        let records = Vec::<DayRecord>::deserialize(de)?;

        let mut slots: [Option<DayHours>; 7] = Default::default();
        for record in records {
            let day = weekday_from_name(&record.day)
                .ok_or_else(|| D::Error::custom(format!("unknown weekday {:?}", record.day)))?;
            let slot = &mut slots[day.num_days_from_monday() as usize];
            if slot.is_some() {
                return Err(D::Error::custom(EngineError::DuplicateWeekday(day)));
            }
            *slot = Some(DayHours {
                is_open: record.is_open,
                ranges: record.ranges,
            });
        }

        let mut days = Vec::with_capacity(7);
        for (index, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(hours) => days.push(hours),
                None => {
                    return Err(D::Error::custom(EngineError::MissingWeekday(
                        weekday_from_monday_index(index),
                    )))
                }
            }
        }
        let days: [DayHours; 7] = days
            .try_into()
            .map_err(|_| D::Error::custom("weekly schedule must have exactly 7 entries"))?;

        Ok(WeeklySchedule { days })
    }
}
