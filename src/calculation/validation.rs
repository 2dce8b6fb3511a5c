//! Time entry validation.
//!
//! Turns a raw [`TimeEntry`] into a [`ValidEntry`] or an
//! [`EngineError::InvalidEntry`] describing the first problem found.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

use crate::error::{EngineError, EngineResult};
use crate::models::{TimeEntry, ValidEntry};

use super::day_bucketing::{DayBoundary, local_date, parse_start_time};

/// Longest duration a single entry may carry: one full day.
pub const MAX_ENTRY_MINUTES: u64 = 24 * 60;

/// Validates an entry and assigns it to a calendar day.
///
/// # Errors
///
/// Returns [`EngineError::InvalidEntry`] when:
/// - `id` is missing or blank
/// - `user_id` is missing or blank
/// - `start_time` is missing or cannot be parsed
/// - `duration_minutes` is missing, not a number, negative, or longer than
///   [`MAX_ENTRY_MINUTES`] once rounded
///
/// Fractional durations are rounded to the nearest minute, halves away from
/// zero.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::{validate_entry, DayBoundary};
/// use timecard_engine::models::TimeEntry;
///
/// let entry = TimeEntry::new("te_001", "user_1", "2026-01-15T09:00:00+10:00", -5);
/// let err = validate_entry(&entry, DayBoundary::EntryOffset).unwrap_err();
/// assert!(err.to_string().contains("negative"));
/// ```
pub fn validate_entry(entry: &TimeEntry, boundary: DayBoundary) -> EngineResult<ValidEntry> {
    if entry.id.trim().is_empty() {
        return Err(EngineError::invalid_entry(&entry.id, "id is missing"));
    }

    let user_id = match entry.user_id.as_deref().map(str::trim) {
        Some(user_id) if !user_id.is_empty() => user_id.to_string(),
        _ => return Err(EngineError::invalid_entry(&entry.id, "user_id is missing")),
    };

    let raw_start = entry
        .start_time
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| EngineError::invalid_entry(&entry.id, "start_time is missing"))?;
    let start_time =
        parse_start_time(raw_start).map_err(|message| EngineError::invalid_entry(&entry.id, message))?;

    let minutes = duration_minutes(entry.duration_minutes.as_ref())
        .map_err(|message| EngineError::invalid_entry(&entry.id, message))?;

    Ok(ValidEntry {
        id: entry.id.clone(),
        user_id,
        date: local_date(&start_time, boundary),
        start_time,
        minutes,
    })
}

/// Reads a submitted duration as whole minutes.
fn duration_minutes(raw: Option<&Value>) -> Result<u64, String> {
    let number = match raw {
        None | Some(Value::Null) => return Err("duration_minutes is missing".to_string()),
        Some(Value::Number(number)) => number,
        Some(other) => return Err(format!("duration_minutes must be a number (got {})", other)),
    };

    let exact = if let Some(whole) = number.as_i64() {
        Some(Decimal::from(whole))
    } else if let Some(whole) = number.as_u64() {
        Some(Decimal::from(whole))
    } else {
        number.as_f64().and_then(Decimal::from_f64)
    };
    let exact = exact.ok_or_else(|| format!("duration_minutes is out of range (got {})", number))?;

    if exact.is_sign_negative() && !exact.is_zero() {
        return Err(format!("duration_minutes must not be negative (got {})", number));
    }

    exact
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .filter(|minutes| *minutes <= MAX_ENTRY_MINUTES)
        .ok_or_else(|| {
            format!(
                "duration_minutes must not exceed {} (got {})",
                MAX_ENTRY_MINUTES, number
            )
        })
}
