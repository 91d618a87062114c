//! Status path and per-state dwell duration computation.

use std::collections::{BTreeMap, BTreeSet};

use ordersight_core::models::audit::AuditLogEntry;
use ordersight_core::models::status::{CanonicalStatus, StatusTransition};
use tracing::warn;

/// The canonicalized view of one order's status history.
#[derive(Debug, Clone, Default)]
pub struct StatusPath {
    /// Transitions in ascending time order, canonicalized.
    pub transitions: Vec<StatusTransition>,
    /// Every canonical state observed, as either a source or a target.
    pub reached: BTreeSet<CanonicalStatus>,
    /// Dwell time in milliseconds preceding each arrival, keyed by the
    /// arrived-at state. The first transition has no predecessor and
    /// contributes nothing here.
    pub duration_by_arrival: BTreeMap<CanonicalStatus, i64>,
}

/// Compute which canonical states an order reached and how long it
/// dwelt before each arrival.
///
/// The raw log is sorted ascending by timestamp regardless of input
/// order. Entries whose `to_status` fails to canonicalize cannot be
/// positioned on the fixed path; they are dropped from the reached set
/// and from duration math, with a warning naming the raw label so
/// vocabulary drift stays visible.
///
/// Dwell durations are clamped to zero: backward or concurrent
/// timestamps never produce a negative duration.
pub fn compute_status_path(log: &[AuditLogEntry]) -> StatusPath {
    let mut ordered: Vec<&AuditLogEntry> = log.iter().collect();
    ordered.sort_by_key(|entry| entry.occurred_at_or_epoch());

    let mut path = StatusPath::default();
    for entry in ordered {
        let Some(to) = CanonicalStatus::canonicalize(Some(&entry.to_status)) else {
            warn!(
                entry_id = %entry.id,
                to_status = %entry.to_status,
                "unrecognized status label dropped from path computation"
            );
            continue;
        };
        let from = CanonicalStatus::canonicalize(entry.from_status.as_deref());

        if let Some(from) = from {
            path.reached.insert(from);
        }
        path.reached.insert(to);

        let at = entry.occurred_at_or_epoch();
        if let Some(previous) = path.transitions.last() {
            let dwell_ms = (at - previous.at).num_milliseconds().max(0);
            path.duration_by_arrival.insert(to, dwell_ms);
        }
        path.transitions.push(StatusTransition { from, to, at });
    }
    path
}
