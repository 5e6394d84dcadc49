//! Error types for availability-engine operations.

use chrono::{NaiveDate, NaiveTime, Weekday};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A closure already exists for this calendar date. At most one specific
    /// exception per day is accepted at the mutator layer.
    #[error("a closure already exists for {0}")]
    DuplicateDate(NaiveDate),

    /// A raw weekday index outside 0-6 (0 = Sunday) reached a boundary.
    #[error("invalid weekday index {0} (expected 0-6, 0 = Sunday)")]
    InvalidWeekday(u8),

    /// An unrecognized alternation pattern tag reached a boundary.
    #[error("invalid alternation pattern: {0:?}")]
    InvalidPattern(String),

    #[error("invalid time range: {start} is not before {end}")]
    InvalidTimeRange { start: NaiveTime, end: NaiveTime },

    #[error("duplicate weekly schedule entry for {0}")]
    DuplicateWeekday(Weekday),

    #[error("missing weekly schedule entry for {0}")]
    MissingWeekday(Weekday),
}

/// Convenience alias used throughout availability-engine.
pub type Result<T> = std::result::Result<T, EngineError>;
