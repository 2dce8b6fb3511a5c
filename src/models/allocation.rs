//! Allocation result models for the Timecard Engine.
//!
//! This module contains the [`Allocation`] type and its associated structures
//! that capture everything produced by a run of the allocation engine: the
//! per-day buckets, the per-entry labels, skipped entries and totals.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BucketKey, DailyBucket, minutes_to_hours};

/// Badge shown next to a time entry on the time card.
///
/// # Example
///
/// ```
/// use timecard_engine::models::HoursLabel;
///
/// assert_eq!(HoursLabel::Mixed.to_string(), "Mixed");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursLabel {
    /// The whole entry fits inside the daily threshold.
    Regular,
    /// The entry crosses the threshold; part regular, part overtime.
    Mixed,
    /// The day was already at the threshold; the whole entry is overtime.
    Overtime,
}

impl fmt::Display for HoursLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoursLabel::Regular => write!(f, "Regular"),
            HoursLabel::Mixed => write!(f, "Mixed"),
            HoursLabel::Overtime => write!(f, "Overtime"),
        }
    }
}

/// How a single entry's minutes were split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryClassification {
    /// The badge for the entry.
    pub label: HoursLabel,
    /// Minutes of this entry counted as regular time.
    pub regular_minutes: u64,
    /// Minutes of this entry counted as overtime.
    pub overtime_minutes: u64,
}

impl EntryClassification {
    /// Regular portion in hours.
    pub fn regular_hours(&self) -> Decimal {
        minutes_to_hours(self.regular_minutes)
    }

    /// Overtime portion in hours.
    pub fn overtime_hours(&self) -> Decimal {
        minutes_to_hours(self.overtime_minutes)
    }
}

/// An entry together with its bucket and classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedEntry {
    /// The entry's identifier.
    pub entry_id: String,
    /// The owning employee.
    pub user_id: String,
    /// The day bucket the entry was folded into.
    pub date: NaiveDate,
    /// The split of this entry's minutes.
    pub classification: EntryClassification,
}

/// An entry the engine could not allocate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    /// The entry's identifier.
    pub entry_id: String,
    /// Why the entry was rejected.
    pub reason: String,
}

/// Aggregated hour totals across a set of buckets.
///
/// # Example
///
/// ```
/// use timecard_engine::models::AllocationTotals;
/// use rust_decimal::Decimal;
///
/// let empty = AllocationTotals::default();
/// assert_eq!(empty.total_regular_hours, Decimal::ZERO);
/// assert_eq!(empty.total_overtime_hours, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationTotals {
    /// Sum of regular hours.
    pub total_regular_hours: Decimal,
    /// Sum of overtime hours.
    pub total_overtime_hours: Decimal,
}

impl AllocationTotals {
    /// Regular plus overtime hours.
    pub fn total_hours(&self) -> Decimal {
        self.total_regular_hours + self.total_overtime_hours
    }
}

/// The complete output of one allocation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocation {
    /// Buckets ordered by user, then date.
    pub buckets: BTreeMap<BucketKey, DailyBucket>,
    /// Classified entries in folding order (user, date, start time).
    pub entries: Vec<ClassifiedEntry>,
    /// Entries rejected during validation.
    pub skipped: Vec<SkippedEntry>,
}

impl Allocation {
    /// Looks up the bucket for a user on a day.
    pub fn bucket(&self, user_id: &str, date: NaiveDate) -> Option<&DailyBucket> {
        self.buckets.get(&BucketKey::new(user_id, date))
    }

    /// Finds the classification produced for an entry.
    pub fn classification_for(&self, entry_id: &str) -> Option<&EntryClassification> {
        self.entries
            .iter()
            .find(|e| e.entry_id == entry_id)
            .map(|e| &e.classification)
    }

    /// Returns true if no entry was skipped.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
