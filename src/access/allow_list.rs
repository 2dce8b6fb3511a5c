//! Page allow-lists per subscription tier.
//!
//! Each tier's list is written out in full. Higher tiers happen to contain
//! the lower tiers' pages, but no list is derived from another.

use crate::models::SubscriptionPlan;

/// Pages available on the starter tier.
pub const STARTER_PAGES: &[&str] = &[
    "dashboard",
    "customers",
    "work_orders",
    "schedule",
    "invoices",
    "settings",
];

/// Pages available on the pro tier.
pub const PRO_PAGES: &[&str] = &[
    "dashboard",
    "customers",
    "work_orders",
    "schedule",
    "invoices",
    "settings",
    "dispatch",
    "estimates",
    "time_cards",
    "inventory",
    "reports",
];

/// Pages available on the business tier.
pub const BUSINESS_PAGES: &[&str] = &[
    "dashboard",
    "customers",
    "work_orders",
    "schedule",
    "invoices",
    "settings",
    "dispatch",
    "estimates",
    "time_cards",
    "inventory",
    "reports",
    "crm",
    "pipeline",
    "payroll",
    "analytics",
    "team",
];

/// Returns the allow-list for a tier.
pub fn allowed_pages(plan: SubscriptionPlan) -> &'static [&'static str] {
    match plan {
        SubscriptionPlan::Starter => STARTER_PAGES,
        SubscriptionPlan::Pro => PRO_PAGES,
        SubscriptionPlan::Business => BUSINESS_PAGES,
    }
}
