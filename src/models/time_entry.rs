//! Time entry model and related types.
//!
//! This module defines the [`TimeEntry`] record as it arrives from the backend
//! and the [`ValidEntry`] form the allocation engine works with once the
//! record has passed validation.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Approval state of a time entry.
///
/// The allocation engine ignores status; payroll-facing totals are built from
/// approved entries only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// Submitted but not yet reviewed.
    #[default]
    Pending,
    /// Approved by a manager; feeds payroll.
    Approved,
    /// Rejected by a manager.
    Rejected,
}

/// A recorded span of worked or leave time for a user, as received.
///
/// Fields that the backend may omit or send malformed are kept loose here so
/// that a single bad record can be reported instead of failing deserialization
/// of a whole batch. `duration_minutes` is held as the raw JSON value and
/// checked during validation.
///
/// # Example
///
/// ```
/// use timecard_engine::models::{EntryStatus, TimeEntry};
///
/// let entry = TimeEntry::new("te_001", "user_1", "2026-01-15T09:00:00+10:00", 480);
/// assert_eq!(entry.status, EntryStatus::Pending);
/// assert_eq!(entry.duration_minutes, Some(480.into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique identifier for the entry. Empty when the backend omitted it.
    #[serde(default)]
    pub id: String,
    /// The owning employee.
    #[serde(default)]
    pub user_id: Option<String>,
    /// ISO-8601 timestamp with offset marking the start of the entry.
    #[serde(default)]
    pub start_time: Option<String>,
    /// Length of the entry in minutes, as submitted. Fractional values are
    /// rounded to the nearest minute; negative values are rejected.
    #[serde(default)]
    pub duration_minutes: Option<Value>,
    /// Approval state.
    #[serde(default)]
    pub status: EntryStatus,
}

impl TimeEntry {
    /// Creates a pending entry with all fields present.
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        start_time: impl Into<String>,
        duration_minutes: i64,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: Some(user_id.into()),
            start_time: Some(start_time.into()),
            duration_minutes: Some(Value::from(duration_minutes)),
            status: EntryStatus::Pending,
        }
    }

    /// Returns the entry with its status replaced.
    pub fn with_status(mut self, status: EntryStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns true if the entry has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == EntryStatus::Approved
    }
}

/// A time entry that passed validation and has been assigned to a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEntry {
    /// The entry's identifier.
    pub id: String,
    /// The owning employee (never blank).
    pub user_id: String,
    /// Parsed start timestamp.
    pub start_time: DateTime<FixedOffset>,
    /// Calendar day the entry is bucketed under.
    pub date: NaiveDate,
    /// Non-negative duration in minutes.
    pub minutes: u64,
}
