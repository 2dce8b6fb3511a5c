//! Timecard Engine for field-service applications
//!
//! This crate splits each employee's daily worked minutes into regular and
//! overtime hours, labels every time entry Regular / Mixed / Overtime, and
//! gates application pages by subscription plan.

#![warn(missing_docs)]

pub mod access;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
