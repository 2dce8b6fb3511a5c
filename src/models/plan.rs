//! Subscription plan and navigation models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The subscription tier an account is on.
///
/// A tier is read once per session from the account profile and never
/// changes while the session runs.
///
/// # Example
///
/// ```
/// use timecard_engine::models::SubscriptionPlan;
///
/// let plan: SubscriptionPlan = "Pro".parse().unwrap();
/// assert_eq!(plan, SubscriptionPlan::Pro);
/// assert_eq!(plan.next_tier(), Some(SubscriptionPlan::Business));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionPlan {
    /// Entry-level tier.
    #[default]
    Starter,
    /// Mid tier.
    Pro,
    /// Top tier.
    Business,
}

impl SubscriptionPlan {
    /// All tiers, lowest first.
    pub const ALL: [SubscriptionPlan; 3] = [
        SubscriptionPlan::Starter,
        SubscriptionPlan::Pro,
        SubscriptionPlan::Business,
    ];

    /// The identifier used in profiles and URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionPlan::Starter => "starter",
            SubscriptionPlan::Pro => "pro",
            SubscriptionPlan::Business => "business",
        }
    }

    /// Human-readable tier name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionPlan::Starter => "Starter",
            SubscriptionPlan::Pro => "Pro",
            SubscriptionPlan::Business => "Business",
        }
    }

    /// The tier an upgrade prompt should point at, if any.
    pub fn next_tier(&self) -> Option<SubscriptionPlan> {
        match self {
            SubscriptionPlan::Starter => Some(SubscriptionPlan::Pro),
            SubscriptionPlan::Pro => Some(SubscriptionPlan::Business),
            SubscriptionPlan::Business => None,
        }
    }

    /// Resolves the plan stored on a profile.
    ///
    /// Profiles created before billing existed carry no plan and are treated
    /// as starter. A plan name that is present but unknown is an error.
    pub fn from_profile(plan: Option<&str>) -> Result<Self, EngineError> {
        match plan.map(str::trim) {
            None | Some("") => Ok(SubscriptionPlan::Starter),
            Some(name) => name.parse(),
        }
    }
}

impl fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionPlan {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "starter" => Ok(SubscriptionPlan::Starter),
            "pro" => Ok(SubscriptionPlan::Pro),
            "business" => Ok(SubscriptionPlan::Business),
            _ => Err(EngineError::UnknownPlan {
                plan: s.to_string(),
            }),
        }
    }
}

/// An entry in the application's navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// The page identifier checked against plan allow-lists.
    pub page_id: String,
    /// The label shown in the sidebar.
    pub label: String,
}

impl NavItem {
    /// Creates a navigation item.
    pub fn new(page_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            page_id: page_id.into(),
            label: label.into(),
        }
    }
}
