//! Request types for the Timecard Engine API.
//!
//! This module defines the JSON request structures for the `/allocate` and
//! `/access` endpoints.

use serde::{Deserialize, Serialize};

use crate::calculation::BatchPolicy;
use crate::models::TimeEntry;

/// Request body for the `/allocate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// The entries to allocate, in any order.
    pub entries: Vec<TimeEntry>,
    /// Overrides the configured batch policy for this request.
    #[serde(default)]
    pub policy: Option<BatchPolicy>,
    /// Drop entries that are not approved before allocating.
    #[serde(default)]
    pub approved_only: bool,
}

/// Request body for the `/access` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRequest {
    /// The account's plan as stored on its profile. Missing means starter.
    #[serde(default)]
    pub plan: Option<String>,
    /// The page being requested.
    pub page_id: String,
}
