//! Merging the two event feeds into one operational timeline.

use std::cmp::Reverse;

use ordersight_core::models::activity::ActivityEvent;
use ordersight_core::models::audit::SystemAuditEvent;
use ordersight_core::models::timeline::{ActivityRow, OrderRef, SystemRow, TimelineEntry};

use crate::config::{DedupConfig, MergeOptions};
use crate::dedup::DedupPolicy;

/// Merges the activity and system-audit feeds into one deduplicated,
/// time-descending sequence of [`TimelineEntry`] rows.
///
/// The merge is deterministic and side-effect-free given identical
/// inputs; it performs no I/O and holds no state between calls.
pub struct TimelineMerger {
    dedup: DedupConfig,
}

impl TimelineMerger {
    pub fn new(dedup: DedupConfig) -> Self {
        Self { dedup }
    }

    pub fn merge(
        &self,
        activity: &[ActivityEvent],
        system: &[SystemAuditEvent],
        opts: &MergeOptions,
    ) -> Vec<TimelineEntry> {
        // Unparseable timestamps and anything before the cutoff are
        // dropped up front.
        let activity: Vec<&ActivityEvent> = activity
            .iter()
            .filter(|e| e.occurred_at().is_some_and(|at| at >= opts.since))
            .collect();
        let system: Vec<&SystemAuditEvent> = if opts.include_system_audit {
            system
                .iter()
                .filter(|e| e.occurred_at().is_some_and(|at| at >= opts.since))
                .collect()
        } else {
            Vec::new()
        };

        let mut entries: Vec<TimelineEntry> = Vec::with_capacity(activity.len() + system.len());

        if opts.include_system_audit {
            let policy = DedupPolicy::new(self.dedup.clone(), system.iter().copied());
            entries.extend(
                activity
                    .iter()
                    .filter_map(|e| policy.apply(e))
                    .map(project_activity),
            );
        } else {
            // Without the system feed the dedup signal is absent, so
            // the filter is skipped entirely.
            entries.extend(activity.iter().map(|e| project_activity((*e).clone())));
        }

        entries.extend(system.iter().map(|e| project_system(e)));

        if !opts.search.trim().is_empty() {
            let needle = opts.search.trim().to_lowercase();
            entries.retain(|entry| entry.matches_search(&needle));
        }

        // Stable sort: ties keep their insertion order but carry no
        // meaning.
        entries.sort_by_key(|entry| Reverse(entry.timestamp()));
        entries
    }
}

impl Default for TimelineMerger {
    fn default() -> Self {
        Self::new(DedupConfig::default())
    }
}

fn project_activity(event: ActivityEvent) -> TimelineEntry {
    // Filtered upstream; a missing timestamp cannot reach this point.
    let timestamp = event.occurred_at().unwrap_or(chrono::DateTime::UNIX_EPOCH);
    TimelineEntry::Activity(ActivityRow {
        timestamp,
        label: event.description,
        order: OrderRef {
            id: event.order_id,
            number: event.order_number,
        },
        actor: event.changed_by,
        event_type: event.event_type,
    })
}

fn project_system(event: &SystemAuditEvent) -> TimelineEntry {
    let timestamp = event.occurred_at().unwrap_or(chrono::DateTime::UNIX_EPOCH);
    let order = event.is_order_scoped().then(|| OrderRef {
        id: event.entity_id.clone(),
        number: event.order_number.clone(),
    });
    let label = event
        .description
        .clone()
        .unwrap_or_else(|| event.action.clone());
    TimelineEntry::System(SystemRow {
        timestamp,
        label,
        order,
        actor: event.user_id.clone(),
        entity_type: event.entity_type.clone(),
        action: event.action.clone(),
    })
}
