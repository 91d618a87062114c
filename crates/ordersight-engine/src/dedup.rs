//! Cross-feed deduplication of order-ingestion restatements.
//!
//! Order ingestion from the upstream system produces two facts: a
//! system-audit "imported" action and a synthetic activity event
//! ("status changed to Picked by system"). Both describe the same
//! real-world occurrence; showing both is noise. This module suppresses
//! the activity-side restatement when a matching import fact exists
//! within a bounded time window, and relabels it when none does.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use ordersight_core::models::activity::ActivityEvent;
use ordersight_core::models::audit::SystemAuditEvent;
use ordersight_core::models::status::CanonicalStatus;
use tracing::warn;

use crate::config::DedupConfig;

/// Actor recorded on synthetic ingestion events.
const SYSTEM_ACTOR: &str = "system";

/// The deduplication policy, instantiated per merge pass.
pub struct DedupPolicy {
    config: DedupConfig,
    /// Import timestamps indexed by lower-cased order id, so the
    /// per-event check is O(1) amortized instead of re-scanning the
    /// full audit feed.
    import_times: HashMap<String, Vec<DateTime<Utc>>>,
}

impl DedupPolicy {
    /// Build the policy's per-order import index from the system feed.
    pub fn new<'a>(
        mut config: DedupConfig,
        system_events: impl IntoIterator<Item = &'a SystemAuditEvent>,
    ) -> Self {
        // Phrase matching is case-insensitive; normalize once here.
        config.ingestion_phrase = config.ingestion_phrase.to_lowercase();
        let mut import_times: HashMap<String, Vec<DateTime<Utc>>> = HashMap::new();
        for event in system_events {
            if event.action != config.import_action {
                continue;
            }
            let Some(at) = event.occurred_at() else {
                continue;
            };
            import_times
                .entry(event.entity_id.to_lowercase())
                .or_default()
                .push(at);
        }
        Self {
            config,
            import_times,
        }
    }

    /// True when the event is a synthetic restatement of an order
    /// ingestion: a first-status change to Picked, made by the system
    /// actor, whose reason carries the ingestion phrase.
    pub fn is_ingestion_restatement(&self, event: &ActivityEvent) -> bool {
        event.is_status_change()
            && event.has_no_prior_status()
            && CanonicalStatus::canonicalize(event.to_status.as_deref())
                == Some(CanonicalStatus::Picked)
            && event.changed_by.as_deref() == Some(SYSTEM_ACTOR)
            && event
                .reason
                .as_deref()
                .is_some_and(|r| r.to_lowercase().contains(&self.config.ingestion_phrase))
    }

    /// Decide the fate of one activity event: `None` means suppressed;
    /// otherwise the (possibly relabeled) event is returned.
    pub fn apply(&self, event: &ActivityEvent) -> Option<ActivityEvent> {
        if !self.is_ingestion_restatement(event) {
            return Some(event.clone());
        }
        let Some(at) = event.occurred_at() else {
            return Some(event.clone());
        };

        let imports = self.import_times.get(&event.order_id.to_lowercase());
        let within_window = imports.is_some_and(|times| {
            times
                .iter()
                .any(|import_at| (*import_at - at).abs() <= self.config.window)
        });

        if within_window {
            return None;
        }

        // An import fact outside the window means the correlation
        // heuristic almost fired; surface it so wording or clock drift
        // does not silently disable dedup.
        if imports.is_some_and(|times| !times.is_empty()) {
            warn!(
                order_id = %event.order_id,
                activity_at = %event.timestamp,
                "near-miss ingestion duplicate: import fact found outside dedup window"
            );
        }

        let mut kept = event.clone();
        kept.description = self.config.relabel.clone();
        Some(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DedupConfig;

    fn no_system_policy() -> DedupPolicy {
        let system: Vec<SystemAuditEvent> = Vec::new();
        DedupPolicy::new(DedupConfig::default(), &system)
    }

    fn ingestion_event() -> ActivityEvent {
        ActivityEvent {
            event_type: ActivityEvent::STATUS_CHANGED.into(),
            order_id: "ORD-1".into(),
            order_number: Some("TH1001".into()),
            timestamp: "2026-03-01T10:00:00Z".into(),
            description: "Status changed to PICKED by system".into(),
            changed_by: Some("system".into()),
            from_status: None,
            to_status: Some("picked".into()),
            reason: Some("Order ingested from Inflow at 10:00".into()),
        }
    }

    #[test]
    fn classifies_ingestion_restatement() {
        let policy = no_system_policy();
        assert!(policy.is_ingestion_restatement(&ingestion_event()));
    }

    #[test]
    fn human_actor_is_not_a_candidate() {
        let policy = no_system_policy();
        let mut event = ingestion_event();
        event.changed_by = Some("alice".into());
        assert!(!policy.is_ingestion_restatement(&event));
    }

    #[test]
    fn prior_status_is_not_a_candidate() {
        let policy = no_system_policy();
        let mut event = ingestion_event();
        event.from_status = Some("picked".into());
        assert!(!policy.is_ingestion_restatement(&event));
    }

    #[test]
    fn non_picked_target_is_not_a_candidate() {
        let policy = no_system_policy();
        let mut event = ingestion_event();
        event.to_status = Some("qa".into());
        assert!(!policy.is_ingestion_restatement(&event));
    }

    #[test]
    fn missing_phrase_is_not_a_candidate() {
        let policy = no_system_policy();
        let mut event = ingestion_event();
        event.reason = Some("manual correction".into());
        assert!(!policy.is_ingestion_restatement(&event));
    }

    #[test]
    fn retained_candidate_is_relabeled() {
        let policy = no_system_policy();
        let kept = policy.apply(&ingestion_event()).unwrap();
        assert_eq!(kept.description, "Imported from source system (Picked)");
    }
}
