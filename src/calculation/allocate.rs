//! Batch allocation of time entries into per-user daily buckets.
//!
//! Entries are validated, grouped by `(user, day)`, sorted by start time
//! within each group and folded one at a time with [`classify`]. Sorting
//! before folding makes both the bucket totals and the per-entry labels
//! independent of the order entries arrive in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::EngineResult;
use crate::models::{
    Allocation, BucketKey, ClassifiedEntry, DailyBucket, SkippedEntry, TimeEntry, ValidEntry,
};

use super::day_bucketing::DayBoundary;
use super::entry_split::{DEFAULT_DAILY_THRESHOLD_MINUTES, classify};
use super::validation::validate_entry;

/// What to do when an entry in a batch fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchPolicy {
    /// Record the entry in [`Allocation::skipped`] and keep going.
    #[default]
    SkipAndReport,
    /// Abort the batch with the first validation error.
    FailFast,
}

/// Parameters for a run of [`allocate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationOptions {
    /// Minutes per day counted as regular time.
    pub threshold_minutes: u64,
    /// How start times map to calendar days.
    pub day_boundary: DayBoundary,
    /// Handling of invalid entries.
    pub batch_policy: BatchPolicy,
}

impl Default for AllocationOptions {
    fn default() -> Self {
        Self {
            threshold_minutes: DEFAULT_DAILY_THRESHOLD_MINUTES,
            day_boundary: DayBoundary::default(),
            batch_policy: BatchPolicy::default(),
        }
    }
}

impl AllocationOptions {
    /// Returns the options with a different batch policy.
    pub fn with_batch_policy(mut self, batch_policy: BatchPolicy) -> Self {
        self.batch_policy = batch_policy;
        self
    }
}

/// Allocates entries into regular/overtime buckets per user per day.
///
/// # Arguments
///
/// * `entries` - Entries in any order
/// * `options` - Threshold, day boundary and batch policy
///
/// # Returns
///
/// An [`Allocation`] holding every bucket, every valid entry's
/// classification and, under [`BatchPolicy::SkipAndReport`], the entries that
/// were rejected.
///
/// # Errors
///
/// Under [`BatchPolicy::FailFast`], the first invalid entry (in input order)
/// aborts the run with [`crate::error::EngineError::InvalidEntry`].
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::{allocate, AllocationOptions};
/// use timecard_engine::models::{HoursLabel, TimeEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entries = vec![
///     TimeEntry::new("te_2", "user_1", "2026-01-15T13:00:00+10:00", 300),
///     TimeEntry::new("te_1", "user_1", "2026-01-15T07:00:00+10:00", 300),
/// ];
/// let allocation = allocate(&entries, &AllocationOptions::default()).unwrap();
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let bucket = allocation.bucket("user_1", day).unwrap();
/// assert_eq!(bucket.regular_hours(), Decimal::from(8));
/// assert_eq!(bucket.overtime_hours(), Decimal::from(2));
///
/// // The later entry is the one that crosses into overtime.
/// assert_eq!(allocation.classification_for("te_1").unwrap().label, HoursLabel::Regular);
/// assert_eq!(allocation.classification_for("te_2").unwrap().label, HoursLabel::Mixed);
/// ```
pub fn allocate(entries: &[TimeEntry], options: &AllocationOptions) -> EngineResult<Allocation> {
    let mut groups: BTreeMap<BucketKey, Vec<ValidEntry>> = BTreeMap::new();
    let mut skipped = Vec::new();

    for entry in entries {
        match validate_entry(entry, options.day_boundary) {
            Ok(valid) => {
                groups
                    .entry(BucketKey::new(valid.user_id.clone(), valid.date))
                    .or_default()
                    .push(valid);
            }
            Err(err) => match options.batch_policy {
                BatchPolicy::FailFast => {
                    warn!(entry_id = %entry.id, error = %err, "Rejecting batch on invalid entry");
                    return Err(err);
                }
                BatchPolicy::SkipAndReport => {
                    warn!(entry_id = %entry.id, error = %err, "Skipping invalid entry");
                    skipped.push(SkippedEntry {
                        entry_id: entry.id.clone(),
                        reason: err.to_string(),
                    });
                }
            },
        }
    }

    let mut allocation = Allocation {
        skipped,
        ..Allocation::default()
    };

    for (key, mut group) in groups {
        group.sort_by(|a, b| {
            a.start_time
                .cmp(&b.start_time)
                .then_with(|| a.id.cmp(&b.id))
        });

        let mut bucket = DailyBucket::default();
        for entry in group {
            let classification = classify(entry.minutes, &bucket, options.threshold_minutes);
            bucket.apply(&classification);
            allocation.entries.push(ClassifiedEntry {
                entry_id: entry.id,
                user_id: entry.user_id,
                date: entry.date,
                classification,
            });
        }
        allocation.buckets.insert(key, bucket);
    }

    debug!(
        entries = entries.len(),
        buckets = allocation.buckets.len(),
        skipped = allocation.skipped.len(),
        "Allocation completed"
    );

    Ok(allocation)
}

/// Keeps only approved entries, the set payroll-facing totals are built from.
pub fn approved_only(entries: &[TimeEntry]) -> Vec<TimeEntry> {
    entries.iter().filter(|e| e.is_approved()).cloned().collect()
}
