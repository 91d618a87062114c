//! Order inspector — resolution plus status-path computation.

use ordersight_core::error::OrdersightResult;
use ordersight_core::feeds::OrderDirectory;
use ordersight_core::models::order::ResolvedOrderRef;

use crate::resolver::OrderResolver;
use crate::status_path::{StatusPath, compute_status_path};

/// One inspected order: its resolved identity and canonicalized
/// status history.
#[derive(Debug, Clone)]
pub struct OrderInspection {
    pub order: ResolvedOrderRef,
    pub path: StatusPath,
}

/// Drives the inspector panel: resolve a user-entered token, fetch
/// that order's audit log, and compute its status path.
///
/// A failure here is fatal to this inspector request only; it never
/// affects timeline data already rendered.
pub struct OrderInspector<D: OrderDirectory + Clone> {
    resolver: OrderResolver<D>,
    directory: D,
}

impl<D: OrderDirectory + Clone> OrderInspector<D> {
    pub fn new(directory: D) -> Self {
        Self {
            resolver: OrderResolver::new(directory.clone()),
            directory,
        }
    }

    pub async fn inspect(&self, token: &str) -> OrdersightResult<OrderInspection> {
        let order = self.resolver.resolve(token).await?;
        let log = self.directory.fetch_audit_log(order.canonical_id).await?;
        let path = compute_status_path(&log);
        Ok(OrderInspection { order, path })
    }
}
