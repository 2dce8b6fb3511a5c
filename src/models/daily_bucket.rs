//! Per-user, per-day accumulator models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EntryClassification;

/// Converts whole minutes into hours.
///
/// ```
/// use timecard_engine::models::minutes_to_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(minutes_to_hours(480), Decimal::from(8));
/// assert_eq!(minutes_to_hours(90), Decimal::new(15, 1));
/// ```
pub fn minutes_to_hours(minutes: u64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(60)
}

/// Composite key of a bucket: one user on one calendar day.
///
/// Ordering is by user first, then date, which is also the order buckets are
/// reported in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BucketKey {
    /// The employee the bucket belongs to.
    pub user_id: String,
    /// The calendar day.
    pub date: NaiveDate,
}

impl BucketKey {
    /// Creates a new bucket key.
    pub fn new(user_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            user_id: user_id.into(),
            date,
        }
    }
}

/// Regular and overtime time accumulated for one [`BucketKey`].
///
/// Both counters start at zero and only ever grow. Time is held in whole
/// minutes so the split is exact; hours are derived on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBucket {
    /// Minutes counted as regular time (never above the daily threshold).
    pub regular_minutes: u64,
    /// Minutes counted as overtime.
    pub overtime_minutes: u64,
}

impl DailyBucket {
    /// Total minutes folded into this bucket.
    pub fn total_minutes(&self) -> u64 {
        self.regular_minutes.saturating_add(self.overtime_minutes)
    }

    /// Regular time in hours.
    pub fn regular_hours(&self) -> Decimal {
        minutes_to_hours(self.regular_minutes)
    }

    /// Overtime in hours.
    pub fn overtime_hours(&self) -> Decimal {
        minutes_to_hours(self.overtime_minutes)
    }

    /// Total time in hours.
    pub fn total_hours(&self) -> Decimal {
        minutes_to_hours(self.total_minutes())
    }

    /// Adds one entry's contribution to the bucket.
    pub fn apply(&mut self, classification: &EntryClassification) {
        self.regular_minutes += classification.regular_minutes;
        self.overtime_minutes += classification.overtime_minutes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HoursLabel;

    #[test]
    fn test_new_bucket_is_zeroed() {
        let bucket = DailyBucket::default();
        assert_eq!(bucket.regular_hours(), Decimal::ZERO);
        assert_eq!(bucket.overtime_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_apply_accumulates_both_sides() {
        let mut bucket = DailyBucket {
            regular_minutes: 300,
            overtime_minutes: 0,
        };
        bucket.apply(&EntryClassification {
            label: HoursLabel::Mixed,
            regular_minutes: 180,
            overtime_minutes: 120,
        });

        assert_eq!(bucket.regular_hours(), Decimal::from(8));
        assert_eq!(bucket.overtime_hours(), Decimal::from(2));
        assert_eq!(bucket.total_hours(), Decimal::from(10));
    }

    #[test]
    fn test_bucket_keys_order_by_user_then_date() {
        let d1 = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();

        let mut keys = vec![
            BucketKey::new("user_b", d1),
            BucketKey::new("user_a", d2),
            BucketKey::new("user_a", d1),
        ];
        keys.sort();

        assert_eq!(keys[0], BucketKey::new("user_a", d1));
        assert_eq!(keys[1], BucketKey::new("user_a", d2));
        assert_eq!(keys[2], BucketKey::new("user_b", d1));
    }

    #[test]
    fn test_total_minutes_sums_both_sides() {
        let bucket = DailyBucket {
            regular_minutes: 480,
            overtime_minutes: 15,
        };
        assert_eq!(bucket.total_minutes(), 495);
        assert_eq!(bucket.overtime_hours(), Decimal::new(25, 2));
    }
}
