//! Recent-activity feed domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time;

/// One human-legible fact about an order, as returned by the recent
/// activity feed.
///
/// `timestamp` is kept as the raw wire string; upstream occasionally
/// emits malformed instants and those must never crash a render. Use
/// [`occurred_at`](Self::occurred_at) for a parsed view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub order_id: String,
    #[serde(default)]
    pub order_number: Option<String>,
    pub timestamp: String,
    pub description: String,
    #[serde(default)]
    pub changed_by: Option<String>,
    #[serde(default)]
    pub from_status: Option<String>,
    #[serde(default)]
    pub to_status: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl ActivityEvent {
    /// Event type emitted for order status changes.
    pub const STATUS_CHANGED: &str = "status_changed";

    /// Parsed timestamp, if the wire value is a valid instant.
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        time::parse_instant(&self.timestamp)
    }

    pub fn is_status_change(&self) -> bool {
        self.event_type == Self::STATUS_CHANGED
    }

    /// True when the event records no prior status, i.e. the first
    /// observed status of the order. An empty `from_status` string is
    /// treated the same as an absent one.
    pub fn has_no_prior_status(&self) -> bool {
        self.from_status
            .as_deref()
            .is_none_or(|s| s.trim().is_empty())
    }
}
