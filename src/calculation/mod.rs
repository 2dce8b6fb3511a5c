//! Calculation logic for the Timecard Engine.
//!
//! This module contains the time allocation engine: entry validation and
//! day bucketing, the per-entry regular/overtime split, batch allocation
//! into daily buckets, and hour totals.

mod allocate;
mod day_bucketing;
mod entry_split;
mod totals;
mod validation;

pub use allocate::{AllocationOptions, BatchPolicy, allocate, approved_only};
pub use day_bucketing::{DayBoundary, local_date, parse_start_time};
pub use entry_split::{
    DEFAULT_DAILY_OVERTIME_THRESHOLD, DEFAULT_DAILY_THRESHOLD_MINUTES, classify, threshold_minutes,
};
pub use totals::{totals, totals_by_user};
pub use validation::{MAX_ENTRY_MINUTES, validate_entry};
