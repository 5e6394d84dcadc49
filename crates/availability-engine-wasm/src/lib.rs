//! WASM bindings for availability-engine.
//!
//! Exposes date resolution, range resolution and the week-parity primitives
//! to the JavaScript dashboard via `wasm-bindgen`. Dates cross the boundary
//! as `YYYY-MM-DD` strings and exception collections as JSON arrays in the
//! engine's serde shape; results come back as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p availability-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/availability-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/availability_engine_wasm.wasm
//! ```

use availability_engine::pattern::weekday_from_index;
use availability_engine::{IntermittentException, SpecificDateException, WeekParity};
use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: parse boundary input, mapping failures to JsValue errors
// ---------------------------------------------------------------------------

/// Parse a calendar-day ISO 8601 string (`YYYY-MM-DD`) into a `NaiveDate`.
fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

fn parse_specific_json(json: &str) -> Result<Vec<SpecificDateException>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid specific exceptions JSON: {}", e)))
}

fn parse_intermittent_json(json: &str) -> Result<Vec<IntermittentException>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid intermittent exceptions JSON: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Classify a calendar date against the current exception collections.
///
/// Returns a JSON string: `{"status":"available"}`, or
/// `{"status":"closed-specific","exception":{...}}` /
/// `{"status":"closed-intermittent","exception":{...}}` with the matching
/// record embedded.
#[wasm_bindgen(js_name = "resolveDay")]
pub fn resolve_day(
    date: &str,
    specific_json: &str,
    intermittent_json: &str,
) -> Result<String, JsValue> {
    let date = parse_date(date)?;
    let specific = parse_specific_json(specific_json)?;
    let intermittent = parse_intermittent_json(intermittent_json)?;

    let verdict = availability_engine::resolve(date, &specific, &intermittent);

    serde_json::to_string(&verdict)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Resolve every day from `start` through `end` inclusive.
///
/// Returns a JSON array of `{date, status, exception?}` objects, one per
/// calendar day — the shape the month and week grids consume directly.
#[wasm_bindgen(js_name = "resolveRange")]
pub fn resolve_range(
    start: &str,
    end: &str,
    specific_json: &str,
    intermittent_json: &str,
) -> Result<String, JsValue> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    let specific = parse_specific_json(specific_json)?;
    let intermittent = parse_intermittent_json(intermittent_json)?;

    let statuses = availability_engine::resolve_range(start, end, &specific, &intermittent);

    serde_json::to_string(&statuses)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Count whole 7-day periods elapsed between `start_date` and `date`.
/// Negative when `date` precedes `start_date`.
#[wasm_bindgen(js_name = "weekNumber")]
pub fn week_number(date: &str, start_date: &str) -> Result<i64, JsValue> {
    let date = parse_date(date)?;
    let start_date = parse_date(start_date)?;
    Ok(availability_engine::week_number(date, start_date))
}

/// Evaluate a single alternation rule against a date.
///
/// `day_of_week` is the 0-6 Sunday-based index and `pattern` is
/// `"even-weeks"` or `"odd-weeks"`; both are validated here. Returns `true`
/// when the rule leaves the date unconstrained.
#[wasm_bindgen(js_name = "intermittentlyAvailable")]
pub fn intermittently_available(
    date: &str,
    day_of_week: u8,
    pattern: &str,
    start_date: &str,
) -> Result<bool, JsValue> {
    let date = parse_date(date)?;
    let start_date = parse_date(start_date)?;
    let day_of_week =
        weekday_from_index(day_of_week).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let pattern: WeekParity = pattern
        .parse()
        .map_err(|e: availability_engine::EngineError| JsValue::from_str(&e.to_string()))?;

    Ok(availability_engine::intermittently_available(
        date,
        day_of_week,
        pattern,
        start_date,
    ))
}
