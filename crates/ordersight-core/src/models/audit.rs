//! System-audit feed and per-order audit log models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time;

/// One low-level system fact about any entity (not necessarily an
/// order), as returned by the system audit feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemAuditEvent {
    pub entity_type: String,
    pub entity_id: String,
    #[serde(default)]
    pub order_number: Option<String>,
    pub timestamp: String,
    pub action: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl SystemAuditEvent {
    /// Parsed timestamp, if the wire value is a valid instant.
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        time::parse_instant(&self.timestamp)
    }

    pub fn is_order_scoped(&self) -> bool {
        self.entity_type.eq_ignore_ascii_case("order")
    }
}

/// Filters accepted by the system audit feed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// One page of audit feed results with an opaque continuation cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditPage {
    pub items: Vec<SystemAuditEvent>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// One row of a single order's status-transition log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub timestamp: String,
    #[serde(default)]
    pub from_status: Option<String>,
    pub to_status: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub changed_by: Option<String>,
}

impl AuditLogEntry {
    /// Parsed timestamp, substituting the epoch for malformed values
    /// so that a bad row sorts deterministically instead of panicking.
    pub fn occurred_at_or_epoch(&self) -> DateTime<Utc> {
        time::parse_instant_or_epoch(&self.timestamp)
    }
}
