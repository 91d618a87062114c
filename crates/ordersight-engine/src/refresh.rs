//! Snapshot refresh coordination.
//!
//! Each refresh produces an immutable [`TimelineSnapshot`] tagged with
//! a monotonically increasing sequence number. [`DashboardState`]
//! applies snapshots in sequence order and discards stale responses,
//! so a slow earlier refresh can never overwrite a faster later one.

use std::sync::atomic::{AtomicU64, Ordering};

use ordersight_core::error::{OrdersightError, OrdersightResult};
use ordersight_core::feeds::{ActivityFeed, SystemAuditFeed};
use ordersight_core::models::activity::ActivityEvent;
use ordersight_core::models::audit::{AuditQuery, SystemAuditEvent};
use ordersight_core::models::timeline::TimelineEntry;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::{MergeOptions, RefreshConfig};
use crate::timeline::TimelineMerger;

/// One immutable view of the merged timeline.
#[derive(Debug, Clone)]
pub struct TimelineSnapshot {
    pub seq: u64,
    pub entries: Vec<TimelineEntry>,
    /// A single user-visible message when one or both feeds failed.
    /// The surviving feed's rows still render.
    pub banner: Option<String>,
}

/// Holds the currently rendered snapshot; replaced wholesale.
#[derive(Debug, Default)]
pub struct DashboardState {
    current: Option<TimelineSnapshot>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a snapshot unless a newer one has already been applied.
    /// Returns false when the snapshot was stale and discarded.
    pub fn apply(&mut self, snapshot: TimelineSnapshot) -> bool {
        if let Some(current) = &self.current
            && snapshot.seq <= current.seq
        {
            debug!(
                stale_seq = snapshot.seq,
                current_seq = current.seq,
                "discarding stale refresh response"
            );
            return false;
        }
        self.current = Some(snapshot);
        true
    }

    pub fn current(&self) -> Option<&TimelineSnapshot> {
        self.current.as_ref()
    }
}

/// Fetches both feeds in parallel and merges them into a snapshot.
pub struct RefreshCoordinator<A: ActivityFeed, S: SystemAuditFeed> {
    activity: A,
    system: S,
    merger: TimelineMerger,
    config: RefreshConfig,
    next_seq: AtomicU64,
}

impl<A: ActivityFeed, S: SystemAuditFeed> RefreshCoordinator<A, S> {
    pub fn new(activity: A, system: S, merger: TimelineMerger, config: RefreshConfig) -> Self {
        Self {
            activity,
            system,
            merger,
            config,
            next_seq: AtomicU64::new(0),
        }
    }

    /// Run one refresh. A failed or timed-out feed contributes an
    /// empty result plus a banner instead of failing the refresh; a
    /// single bad feed never blocks the other's rows.
    pub async fn refresh(&self, opts: &MergeOptions) -> TimelineSnapshot {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed) + 1;

        let activity_fut = timeout(
            self.config.fetch_timeout,
            self.activity.fetch_recent(opts.since),
        );
        let system_fut = async {
            if opts.include_system_audit {
                Some(timeout(self.config.fetch_timeout, self.fetch_system_pages(opts)).await)
            } else {
                None
            }
        };
        let (activity_res, system_res) = tokio::join!(activity_fut, system_fut);

        let mut failures: Vec<&str> = Vec::new();
        let activity: Vec<ActivityEvent> = match flatten_timeout(activity_res) {
            Ok(events) => events,
            Err(err) => {
                warn!(error = %err, "activity feed fetch failed");
                failures.push("recent activity");
                Vec::new()
            }
        };
        let system: Vec<SystemAuditEvent> = match system_res.map(flatten_timeout) {
            Some(Ok(events)) => events,
            Some(Err(err)) => {
                warn!(error = %err, "system audit feed fetch failed");
                failures.push("system audit");
                Vec::new()
            }
            None => Vec::new(),
        };

        let banner = (!failures.is_empty()).then(|| {
            format!(
                "Some timeline data could not be loaded: {}",
                failures.join(", ")
            )
        });
        let entries = self.merger.merge(&activity, &system, opts);

        TimelineSnapshot {
            seq,
            entries,
            banner,
        }
    }

    /// Drain the audit feed's pagination cursor up to the configured
    /// page cap.
    async fn fetch_system_pages(
        &self,
        opts: &MergeOptions,
    ) -> OrdersightResult<Vec<SystemAuditEvent>> {
        let mut events = Vec::new();
        let mut cursor: Option<String> = None;
        for _ in 0..self.config.max_audit_pages {
            let query = AuditQuery {
                limit: Some(self.config.audit_page_limit),
                since: Some(opts.since),
                cursor: cursor.take(),
                ..AuditQuery::default()
            };
            let page = self.system.fetch(&query).await?;
            events.extend(page.items);
            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }
        Ok(events)
    }
}

fn flatten_timeout<T>(
    result: Result<OrdersightResult<T>, tokio::time::error::Elapsed>,
) -> OrdersightResult<T> {
    match result {
        Ok(inner) => inner,
        Err(_) => Err(OrdersightError::Timeout {
            what: "feed fetch".into(),
        }),
    }
}
