//! Unified operational timeline rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A clickable reference to the order a timeline row is about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderRef {
    pub id: String,
    pub number: Option<String>,
}

/// Projection of one activity-feed event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRow {
    pub timestamp: DateTime<Utc>,
    pub label: String,
    pub order: OrderRef,
    pub actor: Option<String>,
    pub event_type: String,
}

/// Projection of one system-audit event. `order` is only present for
/// order-scoped entities; rows about other entity types are never
/// order-clickable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemRow {
    pub timestamp: DateTime<Utc>,
    pub label: String,
    pub order: Option<OrderRef>,
    pub actor: Option<String>,
    pub entity_type: String,
    pub action: String,
}

/// One row of the unified, time-ordered operational feed, tagged by
/// its originating source.
///
/// Entries are immutable once produced; a merged sequence is
/// recomputed on every fetch, never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineEntry {
    Activity(ActivityRow),
    System(SystemRow),
}

impl TimelineEntry {
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Activity(row) => row.timestamp,
            Self::System(row) => row.timestamp,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Activity(row) => &row.label,
            Self::System(row) => &row.label,
        }
    }

    pub fn order_ref(&self) -> Option<&OrderRef> {
        match self {
            Self::Activity(row) => Some(&row.order),
            Self::System(row) => row.order.as_ref(),
        }
    }

    pub fn actor(&self) -> Option<&str> {
        match self {
            Self::Activity(row) => row.actor.as_deref(),
            Self::System(row) => row.actor.as_deref(),
        }
    }

    /// Case-insensitive substring match across the searchable fields:
    /// order id, order number, label, actor, entity type, and action.
    /// `needle` must already be lower-cased.
    pub fn matches_search(&self, needle: &str) -> bool {
        let contains = |s: &str| s.to_lowercase().contains(needle);

        if self.label().to_lowercase().contains(needle) {
            return true;
        }
        if self.actor().is_some_and(contains) {
            return true;
        }
        if let Some(order) = self.order_ref() {
            if contains(&order.id) || order.number.as_deref().is_some_and(contains) {
                return true;
            }
        }
        match self {
            Self::Activity(row) => contains(&row.event_type),
            Self::System(row) => contains(&row.entity_type) || contains(&row.action),
        }
    }
}
