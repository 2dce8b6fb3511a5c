//! Core data models for the Timecard Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod allocation;
mod daily_bucket;
mod plan;
mod time_entry;

pub use allocation::{
    Allocation, AllocationTotals, ClassifiedEntry, EntryClassification, HoursLabel, SkippedEntry,
};
pub use daily_bucket::{BucketKey, DailyBucket, minutes_to_hours};
pub use plan::{NavItem, SubscriptionPlan};
pub use time_entry::{EntryStatus, TimeEntry, ValidEntry};
