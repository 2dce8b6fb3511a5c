//! Subscription plan gating for navigation and routes.
//!
//! Each tier maps to a fixed allow-list of page identifiers; access is a flat
//! membership test against that list.

mod allow_list;
mod gate;

pub use allow_list::{BUSINESS_PAGES, PRO_PAGES, STARTER_PAGES, allowed_pages};
pub use gate::{RouteAccess, gate_route, has_access, upgrade_message, visible_nav_items};
