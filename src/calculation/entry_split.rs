//! Regular/overtime split for a single entry.
//!
//! This module provides the rule that decides how much of an entry counts as
//! regular time and how much as overtime, given the state of the entry's day
//! bucket before the entry is added.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{DailyBucket, EntryClassification, HoursLabel};

/// Default daily overtime threshold in hours.
///
/// The first 8 hours a user works on a calendar day are regular time.
pub const DEFAULT_DAILY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// [`DEFAULT_DAILY_OVERTIME_THRESHOLD`] expressed in minutes.
pub const DEFAULT_DAILY_THRESHOLD_MINUTES: u64 = 8 * 60;

/// Classifies an entry against the pre-entry state of its bucket.
///
/// The bucket must be read *before* the entry is folded in, otherwise the
/// entry that carries the day past the threshold would be labelled
/// `Overtime` instead of `Mixed`.
///
/// # Arguments
///
/// * `entry_minutes` - The entry's duration in minutes
/// * `before` - The bucket as it stood before this entry
/// * `threshold_minutes` - The daily threshold (typically 480)
///
/// # Rule
///
/// 1. If the day stays within the threshold, the whole entry is regular.
/// 2. Otherwise, if regular time is still below the threshold, the entry
///    tops regular time up to the threshold and the rest is overtime.
/// 3. Otherwise the whole entry is overtime.
///
/// `before` is expected to be a state [`allocate`](fn@super::allocate) can
/// produce, where overtime only exists once regular time is full. For any other
/// state the regular portion is still capped at the entry's own length, so the
/// returned minutes always sum to `entry_minutes`.
///
/// # Examples
///
/// ## Entry that crosses the threshold
///
/// ```
/// use timecard_engine::calculation::{classify, DEFAULT_DAILY_THRESHOLD_MINUTES};
/// use timecard_engine::models::{DailyBucket, HoursLabel};
///
/// let before = DailyBucket { regular_minutes: 300, overtime_minutes: 0 };
/// let result = classify(300, &before, DEFAULT_DAILY_THRESHOLD_MINUTES);
///
/// assert_eq!(result.label, HoursLabel::Mixed);
/// assert_eq!(result.regular_minutes, 180);
/// assert_eq!(result.overtime_minutes, 120);
/// ```
///
/// ## Entry on a day already at the threshold
///
/// ```
/// use timecard_engine::calculation::{classify, DEFAULT_DAILY_THRESHOLD_MINUTES};
/// use timecard_engine::models::{DailyBucket, HoursLabel};
///
/// let before = DailyBucket { regular_minutes: 480, overtime_minutes: 0 };
/// let result = classify(60, &before, DEFAULT_DAILY_THRESHOLD_MINUTES);
///
/// assert_eq!(result.label, HoursLabel::Overtime);
/// assert_eq!(result.overtime_minutes, 60);
/// ```
pub fn classify(
    entry_minutes: u64,
    before: &DailyBucket,
    threshold_minutes: u64,
) -> EntryClassification {
    let existing_total = before.total_minutes();

    if existing_total.saturating_add(entry_minutes) <= threshold_minutes {
        EntryClassification {
            label: HoursLabel::Regular,
            regular_minutes: entry_minutes,
            overtime_minutes: 0,
        }
    } else if before.regular_minutes < threshold_minutes {
        debug_assert!(
            before.overtime_minutes == 0,
            "overtime recorded before regular time reached the threshold"
        );
        let regular_minutes = (threshold_minutes - before.regular_minutes).min(entry_minutes);
        let overtime_minutes = entry_minutes - regular_minutes;
        EntryClassification {
            label: if overtime_minutes == 0 {
                HoursLabel::Regular
            } else {
                HoursLabel::Mixed
            },
            regular_minutes,
            overtime_minutes,
        }
    } else {
        EntryClassification {
            label: HoursLabel::Overtime,
            regular_minutes: 0,
            overtime_minutes: entry_minutes,
        }
    }
}

/// Converts a threshold in hours into whole minutes.
///
/// Returns `None` if the threshold is not positive or not a whole number of
/// minutes.
///
/// ```
/// use timecard_engine::calculation::threshold_minutes;
/// use rust_decimal::Decimal;
///
/// assert_eq!(threshold_minutes(Decimal::new(75, 1)), Some(450));
/// assert_eq!(threshold_minutes(Decimal::ZERO), None);
/// ```
pub fn threshold_minutes(threshold_hours: Decimal) -> Option<u64> {
    if threshold_hours <= Decimal::ZERO {
        return None;
    }
    let minutes = threshold_hours * Decimal::from(60);
    if minutes.fract() != Decimal::ZERO {
        return None;
    }
    minutes.to_u64()
}
