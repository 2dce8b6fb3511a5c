//! Plan-gated page access.
//!
//! This module decides whether a page is visible to an account's tier and
//! what to tell the user when it is not.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{NavItem, SubscriptionPlan};

use super::allow_list::allowed_pages;

/// Returns true if `page_id` is on the allow-list for `plan`.
///
/// # Example
///
/// ```
/// use timecard_engine::access::has_access;
/// use timecard_engine::models::SubscriptionPlan;
///
/// assert!(!has_access(SubscriptionPlan::Starter, "reports"));
/// assert!(has_access(SubscriptionPlan::Business, "reports"));
/// assert!(!has_access(SubscriptionPlan::Pro, "crm"));
/// ```
pub fn has_access(plan: SubscriptionPlan, page_id: &str) -> bool {
    allowed_pages(plan).contains(&page_id)
}

/// Returns the upgrade prompt for a page denied on `plan`.
///
/// The prompt depends only on the current tier; the page name is
/// interpolated. Business has nothing to upgrade to and gets an empty string.
///
/// # Example
///
/// ```
/// use timecard_engine::access::upgrade_message;
/// use timecard_engine::models::SubscriptionPlan;
///
/// assert_eq!(
///     upgrade_message(SubscriptionPlan::Starter, "reports"),
///     "Upgrade to Pro to access reports."
/// );
/// assert_eq!(upgrade_message(SubscriptionPlan::Business, "reports"), "");
/// ```
pub fn upgrade_message(plan: SubscriptionPlan, page_id: &str) -> String {
    match plan.next_tier() {
        Some(next) => format!("Upgrade to {} to access {}.", next.display_name(), page_id),
        None => String::new(),
    }
}

/// Outcome of gating a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "access", rename_all = "snake_case")]
pub enum RouteAccess {
    /// The page may render.
    Granted,
    /// The page is hidden behind an upgrade.
    Denied {
        /// Prompt to show in place of the page.
        upgrade_message: String,
    },
}

impl RouteAccess {
    /// Returns true if the route may render.
    pub fn is_granted(&self) -> bool {
        matches!(self, RouteAccess::Granted)
    }
}

/// Decides whether a route renders or shows an upgrade prompt.
pub fn gate_route(plan: SubscriptionPlan, page_id: &str) -> RouteAccess {
    if has_access(plan, page_id) {
        RouteAccess::Granted
    } else {
        debug!(plan = %plan, page_id, "Route gated by plan");
        RouteAccess::Denied {
            upgrade_message: upgrade_message(plan, page_id),
        }
    }
}

/// Filters navigation down to the pages `plan` can reach, keeping order.
pub fn visible_nav_items(plan: SubscriptionPlan, items: &[NavItem]) -> Vec<NavItem> {
    items
        .iter()
        .filter(|item| has_access(plan, &item.page_id))
        .cloned()
        .collect()
}
