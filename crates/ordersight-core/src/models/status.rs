//! Canonical fulfillment lifecycle states.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The closed set of lifecycle states an order can occupy.
///
/// Ordered by position on the happy path; [`Issue`](Self::Issue) is an
/// out-of-band terminal state and only sorts last for display
/// purposes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalStatus {
    Picked,
    Qa,
    PreDelivery,
    InDelivery,
    Shipping,
    Delivered,
    Issue,
}

impl CanonicalStatus {
    /// Map free-text status labels onto the canonical set.
    ///
    /// Input is trimmed and lower-cased; `-`, `_` and spaces are
    /// interchangeable, so `"Pre-Delivery"`, `"pre_delivery"` and
    /// `"PRE DELIVERY"` all canonicalize to [`PreDelivery`](Self::PreDelivery).
    /// Unrecognized or empty input yields `None`; callers must exclude
    /// such labels from canonical-state computations rather than treat
    /// them as an error.
    pub fn canonicalize(raw: Option<&str>) -> Option<Self> {
        let normalized: String = raw?
            .trim()
            .to_ascii_lowercase()
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c })
            .collect();

        match normalized.as_str() {
            "picked" => Some(Self::Picked),
            "qa" => Some(Self::Qa),
            "pre_delivery" => Some(Self::PreDelivery),
            "in_delivery" => Some(Self::InDelivery),
            "shipping" => Some(Self::Shipping),
            "delivered" => Some(Self::Delivered),
            "issue" => Some(Self::Issue),
            _ => None,
        }
    }
}

impl fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Picked => "Picked",
            Self::Qa => "QA",
            Self::PreDelivery => "Pre-Delivery",
            Self::InDelivery => "In-Delivery",
            Self::Shipping => "Shipping",
            Self::Delivered => "Delivered",
            Self::Issue => "Issue",
        };
        f.write_str(label)
    }
}

/// One observed status change, derived from an order's audit log.
///
/// `from = None` marks the first observed status of the order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusTransition {
    pub from: Option<CanonicalStatus>,
    pub to: CanonicalStatus,
    pub at: DateTime<Utc>,
}
