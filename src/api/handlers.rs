//! HTTP request handlers for the Timecard Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::access::{allowed_pages, has_access, upgrade_message};
use crate::calculation::{allocate, approved_only};
use crate::models::SubscriptionPlan;

use super::request::{AccessRequest, AllocationRequest};
use super::response::{
    AccessResponse, AllocationResponse, ApiError, ApiErrorResponse, PlanPagesResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/allocate", post(allocate_handler))
        .route("/access", post(access_handler))
        .route("/plans/:plan/pages", get(plan_pages_handler))
        .with_state(state)
}

/// Handler for POST /allocate.
///
/// Allocates the submitted entries with the configured options, optionally
/// overriding the batch policy per request.
async fn allocate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AllocationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing allocation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let mut options = state.config().allocation_options();
    if let Some(policy) = request.policy {
        options.batch_policy = policy;
    }

    let entries = if request.approved_only {
        approved_only(&request.entries)
    } else {
        request.entries
    };

    let start_time = Instant::now();
    match allocate(&entries, &options) {
        Ok(allocation) => {
            let response = AllocationResponse::from(allocation);
            info!(
                correlation_id = %correlation_id,
                entries = entries.len(),
                buckets = response.buckets.len(),
                skipped = response.skipped.len(),
                total_overtime_hours = %response.totals.total_overtime_hours,
                duration_us = start_time.elapsed().as_micros(),
                "Allocation completed successfully"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Allocation failed");
            error_response(err.into())
        }
    }
}

/// Handler for POST /access.
///
/// Resolves the profile plan and reports whether the page may render.
async fn access_handler(payload: Result<Json<AccessRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let plan = match SubscriptionPlan::from_profile(request.plan.as_deref()) {
        Ok(plan) => plan,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Unknown plan");
            return error_response(err.into());
        }
    };

    let allowed = has_access(plan, &request.page_id);
    info!(
        correlation_id = %correlation_id,
        plan = %plan,
        page_id = %request.page_id,
        allowed,
        "Access check"
    );

    let upgrade_message = if allowed {
        String::new()
    } else {
        upgrade_message(plan, &request.page_id)
    };

    json_response(
        StatusCode::OK,
        AccessResponse {
            plan,
            page_id: request.page_id,
            allowed,
            upgrade_message,
        },
    )
}

/// Handler for GET /plans/:plan/pages.
async fn plan_pages_handler(Path(plan): Path<String>) -> Response {
    match plan.parse::<SubscriptionPlan>() {
        Ok(plan) => json_response(
            StatusCode::OK,
            PlanPagesResponse {
                plan,
                pages: allowed_pages(plan).iter().map(|p| p.to_string()).collect(),
            },
        ),
        Err(err) => error_response(err.into()),
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON extraction failure onto a 400 with a stable error code.
///
/// Entry fields are deserialized loosely and checked per entry during
/// allocation, so only failures in the request's own shape reach this point,
/// such as a missing or non-array `entries` or an unknown `policy`.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Request body has the wrong shape"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}
