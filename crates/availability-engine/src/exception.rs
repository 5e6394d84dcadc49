//! Exception records and the collection that owns them.
//!
//! Two kinds of overrides layer on top of the weekly schedule: one-off
//! exceptions closing a single calendar date, and intermittent rules closing
//! a weekday on alternating weeks. [`ExceptionSet`] owns both collections
//! and provides the mutator surface the configuration screens drive; the
//! resolver only ever borrows them.
//!
//! Collection order is insertion order and is observable: lookups take the
//! first match.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, Result};
use crate::pattern::WeekParity;
use crate::resolver::{self, Verdict};

/// Why a single date is closed.
///
/// Unrecognized tags deserialize to [`ClosureReason::Other`] rather than
/// failing the record, preserving foreign data with reason labels this
/// version does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum ClosureReason {
    Holiday,
    Maintenance,
    Vacation,
    Personal,
    #[default]
    Other,
}

impl From<String> for ClosureReason {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "holiday" => ClosureReason::Holiday,
            "maintenance" => ClosureReason::Maintenance,
            "vacation" => ClosureReason::Vacation,
            "personal" => ClosureReason::Personal,
            _ => ClosureReason::Other,
        }
    }
}

/// Why a weekday is closed on alternating weeks.
///
/// Same unknown-tag fallback as [`ClosureReason`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum AlternatingReason {
    StaffRest,
    Events,
    Maintenance,
    Training,
    #[default]
    Other,
}

impl From<String> for AlternatingReason {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "staff-rest" => AlternatingReason::StaffRest,
            "events" => AlternatingReason::Events,
            "maintenance" => AlternatingReason::Maintenance,
            "training" => AlternatingReason::Training,
            _ => AlternatingReason::Other,
        }
    }
}

/// A one-off override for a single calendar date.
///
/// `is_available: false` marks the date closed; a `true` record is a
/// re-opening override that trumps intermittent rules in the resolver.
/// Time-of-day never participates in comparisons — the date is a civil
/// calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificDateException {
    pub id: Uuid,
    pub date: NaiveDate,
    pub is_available: bool,
    #[serde(default)]
    pub reason: ClosureReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A recurring rule closing one weekday on alternating weeks.
///
/// `start_date` anchors week numbering and is fixed at creation. Multiple
/// rules may target the same weekday; both parities at once simply close the
/// weekday every week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntermittentException {
    pub id: Uuid,
    #[serde(with = "weekday_index_serde")]
    pub day_of_week: Weekday,
    pub pattern: WeekParity,
    pub start_date: NaiveDate,
    pub is_active: bool,
    #[serde(default)]
    pub reason: AlternatingReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Serialize [`Weekday`] as the dashboard's 0-6 Sunday-based index.
/// Out-of-range indices are rejected on deserialize.
mod weekday_index_serde {
    use chrono::Weekday;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::pattern::{weekday_from_index, weekday_index};

    pub fn serialize<S: Serializer>(day: &Weekday, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_u8(weekday_index(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Weekday, D::Error> {
        let index = u8::deserialize(de)?;
        weekday_from_index(index).map_err(D::Error::custom)
    }
}

/// The pair of exception collections owned by the application state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionSet {
    #[serde(default)]
    pub specific: Vec<SpecificDateException>,
    #[serde(default)]
    pub intermittent: Vec<IntermittentException>,
}

impl ExceptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a calendar date closed. Returns the new record's id.
    ///
    /// At most one specific exception per date is accepted; a second closure
    /// for the same day is rejected with [`EngineError::DuplicateDate`].
    pub fn close_date(
        &mut self,
        date: NaiveDate,
        reason: ClosureReason,
        notes: Option<String>,
    ) -> Result<Uuid> {
        if self.specific.iter().any(|e| e.date == date) {
            return Err(EngineError::DuplicateDate(date));
        }
        let id = Uuid::new_v4();
        self.specific.push(SpecificDateException {
            id,
            date,
            is_available: false,
            reason,
            notes,
        });
        Ok(id)
    }

    /// Replace the reason and notes of an existing closure.
    ///
    /// Returns `false` (and changes nothing) when the id is unknown.
    pub fn update_specific(
        &mut self,
        id: Uuid,
        reason: ClosureReason,
        notes: Option<String>,
    ) -> bool {
        match self.specific.iter_mut().find(|e| e.id == id) {
            Some(exception) => {
                exception.reason = reason;
                exception.notes = notes;
                true
            }
            None => false,
        }
    }

    /// Restore availability for a date by deleting its closure record.
    ///
    /// Returns `false` when the id is unknown.
    pub fn restore_date(&mut self, id: Uuid) -> bool {
        let before = self.specific.len();
        self.specific.retain(|e| e.id != id);
        self.specific.len() != before
    }

    /// First specific exception on the given calendar day, if any.
    pub fn specific_for(&self, date: NaiveDate) -> Option<&SpecificDateException> {
        self.specific.iter().find(|e| e.date == date)
    }

    /// Add an alternating-week closure rule. New rules start active.
    /// Returns the new record's id.
    pub fn add_alternating(
        &mut self,
        day_of_week: Weekday,
        pattern: WeekParity,
        start_date: NaiveDate,
        reason: AlternatingReason,
        notes: Option<String>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.intermittent.push(IntermittentException {
            id,
            day_of_week,
            pattern,
            start_date,
            is_active: true,
            reason,
            notes,
        });
        id
    }

    /// Edit an alternating rule's weekday, pattern, reason and notes.
    ///
    /// `start_date` stays as created — editing the anchor would silently
    /// re-number every past week. Returns `false` when the id is unknown.
    pub fn update_alternating(
        &mut self,
        id: Uuid,
        day_of_week: Weekday,
        pattern: WeekParity,
        reason: AlternatingReason,
        notes: Option<String>,
    ) -> bool {
        match self.intermittent.iter_mut().find(|e| e.id == id) {
            Some(rule) => {
                rule.day_of_week = day_of_week;
                rule.pattern = pattern;
                rule.reason = reason;
                rule.notes = notes;
                true
            }
            None => false,
        }
    }

    /// Flip an alternating rule between active and inactive.
    ///
    /// Returns `false` when the id is unknown.
    pub fn toggle_alternating(&mut self, id: Uuid) -> bool {
        match self.intermittent.iter_mut().find(|e| e.id == id) {
            Some(rule) => {
                rule.is_active = !rule.is_active;
                true
            }
            None => false,
        }
    }

    /// Delete an alternating rule. Returns `false` when the id is unknown.
    pub fn remove_alternating(&mut self, id: Uuid) -> bool {
        let before = self.intermittent.len();
        self.intermittent.retain(|e| e.id != id);
        self.intermittent.len() != before
    }

    /// First active alternating rule targeting the given weekday, regardless
    /// of parity. Calendar views use this for the "alternating day" marker.
    pub fn alternating_for(&self, day_of_week: Weekday) -> Option<&IntermittentException> {
        self.intermittent
            .iter()
            .find(|rule| rule.is_active && rule.day_of_week == day_of_week)
    }

    /// Classify a date against this set. See [`resolver::resolve`].
    pub fn resolve(&self, date: NaiveDate) -> Verdict {
        resolver::resolve(date, &self.specific, &self.intermittent)
    }
}
