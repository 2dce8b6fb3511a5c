//! Configuration types for the Timecard Engine.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from `engine.yaml`.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{
    AllocationOptions, BatchPolicy, DEFAULT_DAILY_OVERTIME_THRESHOLD, DayBoundary,
    threshold_minutes,
};
use crate::error::{EngineError, EngineResult};

/// Engine settings loaded from `engine.yaml`.
///
/// Every field is optional in the file; missing fields take the defaults
/// shown below.
///
/// ```yaml
/// daily_threshold_hours: 8
/// day_boundary: entry_offset
/// batch_policy: skip_and_report
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Hours per day counted as regular time.
    pub daily_threshold_hours: Decimal,
    /// How start times map to calendar days.
    pub day_boundary: DayBoundary,
    /// Handling of invalid entries in a batch.
    pub batch_policy: BatchPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            daily_threshold_hours: DEFAULT_DAILY_OVERTIME_THRESHOLD,
            day_boundary: DayBoundary::EntryOffset,
            batch_policy: BatchPolicy::SkipAndReport,
        }
    }
}

impl EngineConfig {
    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> EngineResult<()> {
        if self.daily_threshold_hours > Decimal::from(24) {
            return Err(EngineError::InvalidConfig {
                field: "daily_threshold_hours".to_string(),
                message: format!(
                    "must not exceed 24 (got {})",
                    self.daily_threshold_hours.normalize()
                ),
            });
        }
        self.threshold_minutes().map(|_| ())
    }

    /// The daily threshold in whole minutes.
    pub fn threshold_minutes(&self) -> EngineResult<u64> {
        threshold_minutes(self.daily_threshold_hours).ok_or_else(|| EngineError::InvalidConfig {
            field: "daily_threshold_hours".to_string(),
            message: format!(
                "must be a positive whole number of minutes (got {})",
                self.daily_threshold_hours.normalize()
            ),
        })
    }

    /// Builds allocation options from the configuration.
    pub fn allocation_options(&self) -> EngineResult<AllocationOptions> {
        Ok(AllocationOptions {
            threshold_minutes: self.threshold_minutes()?,
            day_boundary: self.day_boundary,
            batch_policy: self.batch_policy,
        })
    }
}
