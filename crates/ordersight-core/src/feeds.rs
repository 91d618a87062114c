//! Collaborator trait definitions for the external read contracts.
//!
//! All feed operations are async and read-only; the engine never
//! writes anything upstream. Implementations live in
//! `ordersight-client`; tests substitute in-memory fakes.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::OrdersightResult;
use crate::models::activity::ActivityEvent;
use crate::models::audit::{AuditLogEntry, AuditPage, AuditQuery};
use crate::models::order::{OrderDetail, OrderSummary};

/// The human-oriented recent activity feed.
pub trait ActivityFeed: Send + Sync {
    fn fetch_recent(
        &self,
        since: DateTime<Utc>,
    ) -> impl Future<Output = OrdersightResult<Vec<ActivityEvent>>> + Send;
}

/// The raw system audit feed, paginated via an opaque cursor.
pub trait SystemAuditFeed: Send + Sync {
    fn fetch(&self, query: &AuditQuery) -> impl Future<Output = OrdersightResult<AuditPage>> + Send;
}

/// Order identity and audit-trail lookups.
pub trait OrderDirectory: Send + Sync {
    /// Exact-match lookup by human-facing order number. `Ok(None)`
    /// means the number is unknown, which is not a transport failure.
    fn find_by_number(
        &self,
        number: &str,
    ) -> impl Future<Output = OrdersightResult<Option<OrderSummary>>> + Send;

    fn get_detail(&self, id: Uuid) -> impl Future<Output = OrdersightResult<OrderDetail>> + Send;

    fn fetch_audit_log(
        &self,
        id: Uuid,
    ) -> impl Future<Output = OrdersightResult<Vec<AuditLogEntry>>> + Send;
}
