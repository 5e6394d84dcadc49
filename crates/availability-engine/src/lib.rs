//! # availability-engine
//!
//! Deterministic day-availability resolution for a service-business
//! scheduling dashboard.
//!
//! The engine decides, for any calendar date, whether the business is open
//! and — when it is not — which configured exception closed it. Two override
//! kinds layer on top of the base weekly hours: one-off closures of a single
//! date, and intermittent rules closing a weekday on alternating weeks
//! counted from a reference start date. Resolution is a pure function of the
//! date and the current exception collections; nothing here reads a clock,
//! touches a timezone, or mutates shared state.
//!
//! ## Quick start
//!
//! ```rust
//! use availability_engine::{ClosureReason, ExceptionSet};
//! use chrono::NaiveDate;
//!
//! let mut set = ExceptionSet::new();
//! let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
//! set.close_date(christmas, ClosureReason::Holiday, None).unwrap();
//!
//! assert!(!set.resolve(christmas).is_open());
//! assert!(set.resolve(christmas.succ_opt().unwrap()).is_open());
//! ```
//!
//! ## Modules
//!
//! - [`resolver`] — per-date verdicts and range resolution
//! - [`pattern`] — week numbering and alternating-week evaluation
//! - [`exception`] — exception records and the owning collection
//! - [`schedule`] — weekly working-hours configuration
//! - [`dates`] — civil-calendar helpers for month/week grids
//! - [`error`] — error types

pub mod dates;
pub mod error;
pub mod exception;
pub mod pattern;
pub mod resolver;
pub mod schedule;

pub use error::EngineError;
pub use exception::{
    AlternatingReason, ClosureReason, ExceptionSet, IntermittentException, SpecificDateException,
};
pub use pattern::{intermittently_available, week_number, WeekParity};
pub use resolver::{resolve, resolve_range, DayStatus, Verdict};
pub use schedule::{DayHours, TimeRange, WeeklySchedule};
