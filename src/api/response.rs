//! Response types for the Timecard Engine API.
//!
//! This module defines the JSON bodies returned by the handlers, the error
//! response structure, and the mapping from [`EngineError`] to HTTP status.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{totals, totals_by_user};
use crate::error::EngineError;
use crate::models::{Allocation, AllocationTotals, HoursLabel, SkippedEntry, SubscriptionPlan};

/// One bucket in an allocation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketView {
    /// The employee.
    pub user_id: String,
    /// The calendar day.
    pub date: NaiveDate,
    /// Regular minutes.
    pub regular_minutes: u64,
    /// Overtime minutes.
    pub overtime_minutes: u64,
    /// Regular hours.
    pub regular_hours: Decimal,
    /// Overtime hours.
    pub overtime_hours: Decimal,
}

/// One classified entry in an allocation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryView {
    /// The entry.
    pub entry_id: String,
    /// The employee.
    pub user_id: String,
    /// The day bucket it landed in.
    pub date: NaiveDate,
    /// Regular / Mixed / Overtime.
    pub label: HoursLabel,
    /// Regular hours contributed by this entry.
    pub regular_hours: Decimal,
    /// Overtime hours contributed by this entry.
    pub overtime_hours: Decimal,
}

/// Body returned by `/allocate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResponse {
    /// Buckets ordered by user then date.
    pub buckets: Vec<BucketView>,
    /// Entries in folding order.
    pub entries: Vec<EntryView>,
    /// Entries rejected by validation.
    pub skipped: Vec<SkippedEntry>,
    /// Totals across all buckets.
    pub totals: AllocationTotals,
    /// Totals per employee.
    pub user_totals: BTreeMap<String, AllocationTotals>,
}

impl From<Allocation> for AllocationResponse {
    fn from(allocation: Allocation) -> Self {
        let totals = normalize_totals(totals(allocation.buckets.values()));
        let user_totals = totals_by_user(&allocation.buckets)
            .into_iter()
            .map(|(user, t)| (user, normalize_totals(t)))
            .collect();

        let buckets = allocation
            .buckets
            .iter()
            .map(|(key, bucket)| BucketView {
                user_id: key.user_id.clone(),
                date: key.date,
                regular_minutes: bucket.regular_minutes,
                overtime_minutes: bucket.overtime_minutes,
                regular_hours: bucket.regular_hours().normalize(),
                overtime_hours: bucket.overtime_hours().normalize(),
            })
            .collect();

        let entries = allocation
            .entries
            .into_iter()
            .map(|entry| EntryView {
                regular_hours: entry.classification.regular_hours().normalize(),
                overtime_hours: entry.classification.overtime_hours().normalize(),
                label: entry.classification.label,
                entry_id: entry.entry_id,
                user_id: entry.user_id,
                date: entry.date,
            })
            .collect();

        Self {
            buckets,
            entries,
            skipped: allocation.skipped,
            totals,
            user_totals,
        }
    }
}

fn normalize_totals(totals: AllocationTotals) -> AllocationTotals {
    AllocationTotals {
        total_regular_hours: totals.total_regular_hours.normalize(),
        total_overtime_hours: totals.total_overtime_hours.normalize(),
    }
}

/// Body returned by `/access`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessResponse {
    /// The resolved plan.
    pub plan: SubscriptionPlan,
    /// The page that was checked.
    pub page_id: String,
    /// Whether the page may render.
    pub allowed: bool,
    /// Upgrade prompt; empty when allowed or already on the top tier.
    pub upgrade_message: String,
}

/// Body returned by `/plans/:plan/pages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPagesResponse {
    /// The plan.
    pub plan: SubscriptionPlan,
    /// Its allow-list.
    pub pages: Vec<String>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidEntry { entry_id, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid time entry '{}': {}", entry_id, message),
                    "The batch was rejected; fix the entry or use the skip_and_report policy",
                ),
            },
            EngineError::UnknownPlan { plan } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_PLAN",
                    format!("Unknown subscription plan: {}", plan),
                    "Expected one of: starter, pro, business",
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid configuration",
                    format!("{}: {}", field, message),
                ),
            },
        }
    }
}
