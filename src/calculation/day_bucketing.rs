//! Timestamp parsing and calendar-day bucketing.
//!
//! Entries are assigned to exactly one calendar day based on their start time.
//! Which day that is depends on the offset used to truncate the timestamp,
//! selected with a [`DayBoundary`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Selects the offset used to turn a start time into a calendar day.
///
/// Serialized as `"entry_offset"` or as a `±HH:MM` offset string.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::DayBoundary;
///
/// let boundary: DayBoundary = "+10:00".parse().unwrap();
/// assert_eq!(boundary.to_string(), "+10:00");
///
/// let boundary: DayBoundary = "entry_offset".parse().unwrap();
/// assert_eq!(boundary, DayBoundary::EntryOffset);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayBoundary {
    /// Truncate in the offset carried by the timestamp itself.
    #[default]
    EntryOffset,
    /// Convert to this offset first, then truncate.
    Fixed(FixedOffset),
}

impl fmt::Display for DayBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayBoundary::EntryOffset => write!(f, "entry_offset"),
            DayBoundary::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl FromStr for DayBoundary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("entry_offset") {
            return Ok(DayBoundary::EntryOffset);
        }
        if s == "Z" || s.eq_ignore_ascii_case("utc") {
            return Ok(DayBoundary::Fixed(FixedOffset::east_opt(0).ok_or("bad offset")?));
        }
        s.parse::<FixedOffset>()
            .map(DayBoundary::Fixed)
            .map_err(|e| format!("'{}' is not 'entry_offset' or a ±HH:MM offset: {}", s, e))
    }
}

impl TryFrom<String> for DayBoundary {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayBoundary> for String {
    fn from(value: DayBoundary) -> Self {
        value.to_string()
    }
}

/// Parses an entry start time.
///
/// Accepts RFC 3339 (`2026-01-15T09:00:00+10:00`) and the space-separated
/// form Postgres renders `timestamptz` values in (`2026-01-15 09:00:00+10`).
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::parse_start_time;
///
/// let a = parse_start_time("2026-01-15T09:00:00+10:00").unwrap();
/// let b = parse_start_time("2026-01-15 09:00:00+10").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_start_time(raw: &str) -> Result<DateTime<FixedOffset>, String> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z"))
        .map_err(|e| format!("start_time '{}' is not a valid timestamp: {}", raw, e))
}

/// Returns the calendar day a start time falls on.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::{local_date, parse_start_time, DayBoundary};
/// use chrono::NaiveDate;
///
/// // 07:30 in Sydney on the 16th is still the 15th in UTC.
/// let start = parse_start_time("2026-01-16T07:30:00+10:00").unwrap();
/// assert_eq!(
///     local_date(&start, DayBoundary::EntryOffset),
///     NaiveDate::from_ymd_opt(2026, 1, 16).unwrap()
/// );
/// assert_eq!(
///     local_date(&start, "Z".parse().unwrap()),
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
/// );
/// ```
pub fn local_date(start_time: &DateTime<FixedOffset>, boundary: DayBoundary) -> NaiveDate {
    match boundary {
        DayBoundary::EntryOffset => start_time.date_naive(),
        DayBoundary::Fixed(offset) => start_time.with_timezone(&offset).date_naive(),
    }
}
