//! HTTP API module for the Timecard Engine.
//!
//! This module exposes the allocation engine and plan gating over a small
//! REST surface for the hosting application.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AccessRequest, AllocationRequest};
pub use response::{
    AccessResponse, AllocationResponse, ApiError, BucketView, EntryView, PlanPagesResponse,
};
pub use state::AppState;
