//! Per-date availability verdicts.
//!
//! Combines the two exception collections into a single classification for a
//! calendar date. A specific one-off override always trumps a recurring
//! alternation rule; among records of one kind, the first match in
//! collection order wins.
//!
//! Resolution is a pure function of `(date, specific, intermittent)`: no
//! clock reads, no mutation, no error path. "Today" highlighting is a
//! presentation concern and lives with the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::each_day_of_interval;
use crate::exception::{IntermittentException, SpecificDateException};
use crate::pattern::intermittently_available;

/// Resolution outcome for a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Verdict {
    /// No exception closes the date.
    Available,
    /// Closed by a one-off exception on that exact day.
    ClosedSpecific { exception: SpecificDateException },
    /// Closed by an alternating-week rule.
    ClosedIntermittent { exception: IntermittentException },
}

impl Verdict {
    /// Whether the date can take bookings at all.
    pub fn is_open(&self) -> bool {
        matches!(self, Verdict::Available)
    }
}

/// Classify a calendar date against the current exception collections.
///
/// Precedence is strict:
///
/// 1. The first specific exception on the same calendar day decides the
///    verdict outright — a closure yields [`Verdict::ClosedSpecific`], while
///    a re-opening override (`is_available: true`) yields
///    [`Verdict::Available`] even when an alternation rule would close the
///    day.
/// 2. Otherwise the first *active* intermittent rule whose weekday matches
///    and whose week parity closes the date yields
///    [`Verdict::ClosedIntermittent`].
/// 3. Otherwise the date is [`Verdict::Available`].
///
/// The matching record is cloned into the verdict so callers can render its
/// reason and notes without holding a borrow on the collections.
pub fn resolve(
    date: NaiveDate,
    specific: &[SpecificDateException],
    intermittent: &[IntermittentException],
) -> Verdict {
    if let Some(exception) = specific.iter().find(|e| e.date == date) {
        if exception.is_available {
            return Verdict::Available;
        }
        return Verdict::ClosedSpecific {
            exception: exception.clone(),
        };
    }

    for rule in intermittent {
        if !rule.is_active {
            continue;
        }
        if !intermittently_available(date, rule.day_of_week, rule.pattern, rule.start_date) {
            return Verdict::ClosedIntermittent {
                exception: rule.clone(),
            };
        }
    }

    Verdict::Available
}

/// A date paired with its verdict — the unit a calendar grid cell consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStatus {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Resolve every day in an inclusive date range, in order.
///
/// This is the read path behind the month and week calendar views: one
/// verdict per cell. Returns an empty list when `start > end`.
pub fn resolve_range(
    start: NaiveDate,
    end: NaiveDate,
    specific: &[SpecificDateException],
    intermittent: &[IntermittentException],
) -> Vec<DayStatus> {
    each_day_of_interval(start, end)
        .into_iter()
        .map(|date| DayStatus {
            date,
            verdict: resolve(date, specific, intermittent),
        })
        .collect()
}
