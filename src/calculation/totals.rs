//! Hour totals over allocated buckets.

use std::collections::BTreeMap;

use crate::models::{AllocationTotals, BucketKey, DailyBucket, minutes_to_hours};

/// Sums regular and overtime hours across buckets.
///
/// Minutes are summed first and converted once, so the totals carry no
/// rounding from per-bucket conversions.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::totals;
/// use timecard_engine::models::DailyBucket;
/// use rust_decimal::Decimal;
///
/// let empty: Vec<DailyBucket> = vec![];
/// let result = totals(&empty);
/// assert_eq!(result.total_regular_hours, Decimal::ZERO);
/// assert_eq!(result.total_overtime_hours, Decimal::ZERO);
/// ```
pub fn totals<'a, I>(buckets: I) -> AllocationTotals
where
    I: IntoIterator<Item = &'a DailyBucket>,
{
    let (regular, overtime) = buckets
        .into_iter()
        .fold((0u64, 0u64), |(regular, overtime), bucket| {
            (
                regular.saturating_add(bucket.regular_minutes),
                overtime.saturating_add(bucket.overtime_minutes),
            )
        });

    AllocationTotals {
        total_regular_hours: minutes_to_hours(regular),
        total_overtime_hours: minutes_to_hours(overtime),
    }
}

/// Totals per employee, ordered by user id.
pub fn totals_by_user(
    buckets: &BTreeMap<BucketKey, DailyBucket>,
) -> BTreeMap<String, AllocationTotals> {
    let mut per_user: BTreeMap<String, Vec<&DailyBucket>> = BTreeMap::new();
    for (key, bucket) in buckets {
        per_user.entry(key.user_id.clone()).or_default().push(bucket);
    }

    per_user
        .into_iter()
        .map(|(user_id, buckets)| (user_id, totals(buckets)))
        .collect()
}
